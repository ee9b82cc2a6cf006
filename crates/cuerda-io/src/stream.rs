//! Real-time audio output via cpal.

use crate::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Host, Stream};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Extract device name via `description()` (cpal 0.17+).
pub(crate) fn device_name(device: &Device) -> std::result::Result<String, cpal::DeviceNameError> {
    device.description().map(|d| d.name().to_string())
}

/// Audio output device information.
#[derive(Debug, Clone)]
pub struct AudioDevice {
    /// Human-readable device name.
    pub name: String,
    /// Default sample rate in Hz.
    pub default_sample_rate: u32,
    /// Default channel count.
    pub channels: u16,
}

/// List all available audio output devices.
pub fn list_output_devices() -> Result<Vec<AudioDevice>> {
    let host = cpal::default_host();
    let mut devices = Vec::new();

    if let Ok(outputs) = host.output_devices() {
        for device in outputs {
            if let Ok(name) = device_name(&device) {
                let (sample_rate, channels) = device
                    .default_output_config()
                    .map(|c| (c.sample_rate(), c.channels()))
                    .unwrap_or((48000, 2));

                devices.push(AudioDevice {
                    name,
                    default_sample_rate: sample_rate,
                    channels,
                });
            }
        }
    }

    Ok(devices)
}

/// Get the default audio output device info, if any.
pub fn default_output_device() -> Option<AudioDevice> {
    let host = cpal::default_host();
    host.default_output_device().and_then(|d| {
        device_name(&d).ok().map(|name| {
            let (sample_rate, channels) = d
                .default_output_config()
                .map(|c| (c.sample_rate(), c.channels()))
                .unwrap_or((48000, 2));
            AudioDevice {
                name,
                default_sample_rate: sample_rate,
                channels,
            }
        })
    })
}

/// Find an output device by partial name match (case-insensitive).
pub fn find_output_device_fuzzy(search: &str) -> Result<AudioDevice> {
    let devices = list_output_devices()?;
    let search_lower = search.to_lowercase();

    devices
        .into_iter()
        .find(|d| d.name.to_lowercase().contains(&search_lower))
        .ok_or_else(|| Error::DeviceNotFound(format!("no output device matching '{search}'")))
}

/// Find an output device by zero-based index.
pub fn find_output_device_by_index(index: usize) -> Result<AudioDevice> {
    let devices = list_output_devices()?;
    let count = devices.len();
    devices.into_iter().nth(index).ok_or_else(|| {
        Error::DeviceNotFound(format!(
            "output device index {index} (only {count} devices available)"
        ))
    })
}

/// Real-time audio output stream.
pub struct OutputStream {
    #[allow(dead_code)]
    host: Host,
    device: Device,
    sample_rate: u32,
    channels: u16,
    running: Arc<AtomicBool>,
    _stream: Option<Stream>,
}

impl OutputStream {
    /// Open an output stream on the named device, or the system default.
    ///
    /// `device` can be a numeric index, an exact name, or a partial
    /// case-insensitive name.
    pub fn new(device: Option<&str>) -> Result<Self> {
        let host = cpal::default_host();

        let device = match device {
            Some(name) => find_device(&host, name)?,
            None => host.default_output_device().ok_or(Error::NoDevice)?,
        };

        let config = device
            .default_output_config()
            .map_err(|e| Error::Stream(e.to_string()))?;
        let sample_rate = config.sample_rate();
        let channels = config.channels();

        tracing::info!(
            device = %device_name(&device).unwrap_or_else(|_| "<unknown>".into()),
            sample_rate,
            channels,
            "opened audio output"
        );

        Ok(Self {
            host,
            device,
            sample_rate,
            channels,
            running: Arc::new(AtomicBool::new(false)),
            _stream: None,
        })
    }

    /// The device's sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The device's channel count.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Start the stream with a stereo frame generator.
    ///
    /// The generator is called once per frame and returns a `(left, right)`
    /// pair which is spread across the device's channel layout: mono mixes
    /// the pair, stereo maps directly, and wider layouts get the pair in
    /// the first two channels with silence elsewhere.
    ///
    /// Returns immediately; the stream runs until [`stop`](Self::stop) or
    /// drop.
    pub fn start<F>(&mut self, mut next_frame: F) -> Result<()>
    where
        F: FnMut() -> (f32, f32) + Send + 'static,
    {
        let config = self
            .device
            .default_output_config()
            .map_err(|e| Error::Stream(e.to_string()))?;
        let channels = config.channels() as usize;

        self.running.store(true, Ordering::SeqCst);
        let running = Arc::clone(&self.running);

        let stream = self
            .device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    if !running.load(Ordering::SeqCst) {
                        data.fill(0.0);
                        return;
                    }

                    for frame in data.chunks_mut(channels) {
                        let (l, r) = next_frame();
                        match channels {
                            1 => frame[0] = (l + r) * 0.5,
                            2 => {
                                frame[0] = l;
                                frame[1] = r;
                            }
                            _ => {
                                frame[0] = l;
                                frame[1] = r;
                                for sample in &mut frame[2..] {
                                    *sample = 0.0;
                                }
                            }
                        }
                    }
                },
                |err| tracing::error!("output stream error: {err}"),
                None,
            )
            .map_err(|e| Error::Stream(e.to_string()))?;

        stream.play().map_err(|e| Error::Stream(e.to_string()))?;
        self._stream = Some(stream);

        Ok(())
    }

    /// Stop the stream. The callback keeps firing but emits silence.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Check if the stream is running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Find an output device by index, exact name, or fuzzy match.
fn find_device(host: &Host, name_or_index: &str) -> Result<Device> {
    let devices: Vec<_> = host
        .output_devices()
        .map_err(|e| Error::Stream(e.to_string()))?
        .collect();

    // Try parsing as index first
    if let Ok(index) = name_or_index.parse::<usize>() {
        return devices.get(index).cloned().ok_or_else(|| {
            Error::DeviceNotFound(format!(
                "output device index {} (only {} devices available)",
                index,
                devices.len()
            ))
        });
    }

    // Try exact match
    for device in &devices {
        if device_name(device).is_ok_and(|n| n == name_or_index) {
            return Ok(device.clone());
        }
    }

    // Try case-insensitive partial match
    let search_lower = name_or_index.to_lowercase();
    let mut matches: Vec<_> = devices
        .iter()
        .filter_map(|d| {
            device_name(d).ok().and_then(|name| {
                if name.to_lowercase().contains(&search_lower) {
                    Some((d.clone(), name))
                } else {
                    None
                }
            })
        })
        .collect();

    match matches.len() {
        0 => Err(Error::DeviceNotFound(format!(
            "no output device matching '{name_or_index}'"
        ))),
        1 => Ok(matches.remove(0).0),
        _ => {
            let names: Vec<_> = matches.iter().map(|(_, n)| n.as_str()).collect();
            tracing::warn!(
                "'{}' matches multiple output devices: {:?}. Using first match: {}",
                name_or_index,
                names,
                names[0]
            );
            Ok(matches.remove(0).0)
        }
    }
}
