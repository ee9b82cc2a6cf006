//! Cuerda Synth - the pluck-voice synthesis engine
//!
//! Renders a clicked note as a short percussive pluck: a detuned triangle
//! fundamental with two sine overtones, shaped by a four-stage amplitude
//! envelope and a lowpass filter whose cutoff decays over the note's
//! lifetime.
//!
//! # Core Components
//!
//! ## Building Blocks
//!
//! - [`Oscillator`] / [`OscillatorWaveform`] - sine/triangle phase
//!   accumulator
//! - [`PluckEnvelope`] / [`EnvelopeStage`] - attack, exponential decay,
//!   exponential tail, and a click-free cut ramp
//! - [`ToneFilter`] - one-pole lowpass with exponentially decaying cutoff
//! - [`PluckProfile`] - the empirical timing/level constants, configurable
//!
//! ## Voices
//!
//! - [`PluckVoice`] - one sounding note: three oscillators, envelope,
//!   filter, stereo pan
//! - [`Timbre`] - keyboard vs fretboard rendering (pan direction only)
//! - [`VoiceEngine`] - monophonic voice slot with bounded cross-fade on
//!   retrigger
//!
//! # Example
//!
//! ```rust
//! use cuerda_synth::{Timbre, VoiceEngine};
//! use cuerda_theory::PitchClass;
//!
//! let mut engine = VoiceEngine::new(48000.0);
//! engine.strike(PitchClass::A, 4, Timbre::Keyboard).unwrap();
//!
//! for _ in 0..1000 {
//!     let (left, right) = engine.process_stereo();
//! }
//!
//! // A second strike pre-empts the first with a 10 ms fade
//! engine.strike(PitchClass::E, 4, Timbre::Fretboard).unwrap();
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! cuerda-synth = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod engine;
pub mod envelope;
pub mod oscillator;
pub mod profile;
pub mod tone;
pub mod voice;

// Re-export main types at crate root
pub use engine::{SynthError, VoiceEngine};
pub use envelope::{EnvelopeStage, PluckEnvelope};
pub use oscillator::{Oscillator, OscillatorWaveform};
pub use profile::PluckProfile;
pub use tone::ToneFilter;
pub use voice::{PluckVoice, Timbre, cents_to_ratio};

// Re-export commonly used types from cuerda-theory
pub use cuerda_theory::{Pitch, PitchClass, frequency};
