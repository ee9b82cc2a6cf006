//! Offline rendering of plucks to WAV files.

use crate::Result;
use hound::{SampleFormat, WavWriter};
use std::path::Path;

/// Write interleaved stereo samples to a 32-bit float WAV file.
///
/// # Example
/// ```ignore
/// let frames = vec![0.0f32; 48000 * 2]; // 1 second of stereo silence
/// write_wav_stereo("pluck.wav", &frames, 48000)?;
/// ```
pub fn write_wav_stereo<P: AsRef<Path>>(
    path: P,
    interleaved: &[f32],
    sample_rate: u32,
) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in interleaved {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(())
}
