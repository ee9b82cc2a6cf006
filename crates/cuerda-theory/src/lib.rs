//! Cuerda Theory - pitch and fretboard mapping
//!
//! This crate provides the data model shared by the cuerda keyboard and
//! fretboard surfaces: pitch classes, equal-temperament frequency lookup,
//! string tunings, and the chromatic arithmetic that maps fret positions
//! to pitches and back.
//!
//! # Core Abstractions
//!
//! ## Pitches
//!
//! - [`PitchClass`] - the 12 chromatic note names, sharp spelling canonical
//! - [`Pitch`] - a pitch class paired with an octave register
//! - [`frequency`] - equal-temperament lookup anchored at A4 = 440 Hz
//!
//! ```rust
//! use cuerda_theory::{PitchClass, frequency};
//!
//! let a4 = frequency(PitchClass::A, 4).unwrap();
//! assert!((a4 - 440.0).abs() < 1e-3);
//! ```
//!
//! ## Fretboard Mapping
//!
//! - [`StringTuning`] / [`STANDARD_TUNING`] - the six strings, visually
//!   high-to-low
//! - [`StringTuning::note_at_fret`] - chromatic fret arithmetic
//! - [`positions_of`] - every (string, fret) producing a given pitch
//!
//! ```rust
//! use cuerda_theory::{PitchClass, STANDARD_TUNING, positions_of, FRET_COUNT};
//!
//! // E4 is the open high-e string (among other positions)
//! let hits = positions_of(PitchClass::E, 4, &STANDARD_TUNING, FRET_COUNT);
//! assert!(hits.iter().any(|p| p.string_label == "e" && p.fret == 0));
//! ```
//!
//! ## Display
//!
//! - [`DisplayMode`] - explicit formatting flags, threaded by value
//! - [`display_name`] / [`note_label`] - sharp or flat user-facing spelling
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! cuerda-theory = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod display;
pub mod freq;
pub mod pitch;
pub mod tuning;

// Re-export main types at crate root
pub use display::{DisplayMode, display_name, note_label};
pub use freq::{A4_HZ, OCTAVE_MAX, OCTAVE_MIN, frequency};
pub use pitch::{Pitch, PitchClass};
pub use tuning::{FRET_COUNT, FretPosition, STANDARD_TUNING, StringTuning, positions_of};

/// Errors from pitch and fretboard lookups.
///
/// All variants are recoverable; callers surface them as messages rather
/// than aborting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TheoryError {
    /// Octave outside the supported frequency-table range (2..=7).
    OctaveOutOfRange(i32),
    /// Fret index beyond the instrument's last fret (0..=24).
    InvalidFret(u8),
    /// A note spelling that names no pitch class.
    UnknownPitchName,
}

impl core::fmt::Display for TheoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OctaveOutOfRange(octave) => {
                write!(
                    f,
                    "octave {octave} outside supported range {OCTAVE_MIN}..={OCTAVE_MAX}"
                )
            }
            Self::InvalidFret(fret) => {
                write!(f, "fret {fret} beyond last fret {FRET_COUNT}")
            }
            Self::UnknownPitchName => write!(f, "unknown pitch name"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TheoryError {}
