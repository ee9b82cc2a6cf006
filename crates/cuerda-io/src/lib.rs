//! Audio output layer for the Cuerda note explorer.
//!
//! This crate provides:
//!
//! - **Real-time playback**: [`NotePlayer`] drives a [`cuerda_synth::VoiceEngine`]
//!   on the system's default (or a named) output device
//! - **Device discovery**: [`list_output_devices`] and friends
//! - **WAV rendering**: [`write_wav_stereo`] for offline rendering of plucks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cuerda_io::NotePlayer;
//! use cuerda_synth::Timbre;
//! use cuerda_theory::PitchClass;
//!
//! let mut player = NotePlayer::new(None)?;
//! player.play(PitchClass::A, 4, Timbre::Keyboard)?;
//! std::thread::sleep(std::time::Duration::from_millis(950));
//! ```

mod player;
mod stream;
mod wav;

pub use player::NotePlayer;
pub use stream::{
    AudioDevice, OutputStream, default_output_device, find_output_device_by_index,
    find_output_device_fuzzy, list_output_devices,
};
pub use wav::write_wav_stereo;

/// Error types for audio output operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Audio stream setup or runtime error.
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// No audio output device available on the system.
    #[error("No audio output device available")]
    NoDevice,

    /// The requested audio device was not found.
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// The requested note cannot be played.
    #[error("Unplayable note: {0}")]
    UnplayableNote(cuerda_synth::SynthError),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio output operations.
pub type Result<T> = std::result::Result<T, Error>;
