//! Interactive note playback.
//!
//! [`NotePlayer`] couples a [`VoiceEngine`] to an output stream. The engine
//! lives inside the audio callback; the player talks to it through a
//! bounded command queue, so neither `play` nor `stop_current` ever blocks
//! and no lock is shared with the audio thread.

use crate::stream::OutputStream;
use crate::{Error, Result};
use cuerda_synth::{Timbre, VoiceEngine};
use cuerda_theory::{PitchClass, frequency};
use std::sync::mpsc::{self, SyncSender};

/// Commands crossing from the UI thread to the audio callback.
enum Command {
    Strike {
        class: PitchClass,
        octave: i32,
        timbre: Timbre,
    },
    Stop,
}

/// Commands buffered between callback wakeups. Interactions arrive at
/// human speed; this only needs to cover a burst inside one buffer period.
const COMMAND_QUEUE_DEPTH: usize = 32;

struct Active {
    stream: OutputStream,
    commands: SyncSender<Command>,
}

/// Plays one pluck at a time on an output device.
///
/// The underlying stream opens lazily on the first [`play`](Self::play),
/// matching the usual platform requirement that audio start from a user
/// gesture. Once open it stays open; silence is just an idle engine.
pub struct NotePlayer {
    device: Option<String>,
    active: Option<Active>,
}

impl NotePlayer {
    /// Create a player targeting the named output device, or the system
    /// default. No stream is opened yet.
    pub fn new(device: Option<&str>) -> Self {
        Self {
            device: device.map(str::to_owned),
            active: None,
        }
    }

    /// Whether the output stream has been opened.
    pub fn is_started(&self) -> bool {
        self.active.is_some()
    }

    /// Sample rate of the open stream, if any.
    pub fn sample_rate(&self) -> Option<u32> {
        self.active.as_ref().map(|a| a.stream.sample_rate())
    }

    /// Strike a note, replacing whatever is sounding.
    ///
    /// The note is validated before anything is queued: an out-of-range
    /// pitch returns [`Error::UnplayableNote`] and leaves playback
    /// untouched. Returns as soon as the command is queued; the pluck
    /// begins on the next audio buffer.
    pub fn play(&mut self, class: PitchClass, octave: i32, timbre: Timbre) -> Result<()> {
        // Same check the engine applies, surfaced here so callers get the
        // error synchronously instead of a silent dropped command.
        frequency(class, octave).map_err(|_| {
            Error::UnplayableNote(cuerda_synth::SynthError::UnsupportedPitch { class, octave })
        })?;

        let active = self.ensure_started()?;
        let sent = active.commands.try_send(Command::Strike {
            class,
            octave,
            timbre,
        });
        if sent.is_err() {
            // Queue full: the audio thread is a whole burst behind.
            tracing::debug!("strike command dropped, queue full");
        }
        Ok(())
    }

    /// Fade out the sounding note, if any. No-op when idle.
    pub fn stop_current(&mut self) {
        if let Some(active) = &self.active {
            let _ = active.commands.try_send(Command::Stop);
        }
    }

    /// Open the stream and install the engine callback on first use.
    fn ensure_started(&mut self) -> Result<&Active> {
        if self.active.is_none() {
            let mut stream = OutputStream::new(self.device.as_deref())?;
            let sample_rate = stream.sample_rate() as f32;

            let (tx, rx) = mpsc::sync_channel::<Command>(COMMAND_QUEUE_DEPTH);
            let mut engine = VoiceEngine::new(sample_rate);

            stream.start(move || {
                while let Ok(cmd) = rx.try_recv() {
                    match cmd {
                        Command::Strike {
                            class,
                            octave,
                            timbre,
                        } => {
                            // Already validated on the caller's side.
                            if let Err(e) = engine.strike(class, octave, timbre) {
                                tracing::debug!("dropped strike: {e}");
                            }
                        }
                        Command::Stop => engine.stop(),
                    }
                }
                engine.process_stereo()
            })?;

            tracing::info!(sample_rate, "note player started");
            self.active = Some(Active {
                stream,
                commands: tx,
            });
        }

        self.active.as_ref().ok_or(Error::NoDevice)
    }
}
