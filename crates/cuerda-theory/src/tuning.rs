//! String tunings and fret-position arithmetic.
//!
//! A fret position is never stored; it is a pure function of the string's
//! open pitch and the fret index. Pitch class advances one semitone per
//! fret and the octave increments each time the arithmetic crosses a C.

use crate::TheoryError;
use crate::pitch::{Pitch, PitchClass};
use alloc::vec::Vec;

/// Number of frets on the rendered fretboard (positions 0..=24).
pub const FRET_COUNT: u8 = 24;

/// One string of the instrument: display label plus open-string pitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringTuning {
    /// Display label; lowercase "e" distinguishes the high E string.
    pub label: &'static str,
    /// Pitch class of the open string.
    pub open_class: PitchClass,
    /// Octave of the open string.
    pub open_octave: i32,
}

impl StringTuning {
    /// Pitch produced at a fret on this string.
    ///
    /// Fret 0 is the open string. Frets beyond [`FRET_COUNT`] fail with
    /// [`TheoryError::InvalidFret`].
    pub fn note_at_fret(&self, fret: u8) -> Result<Pitch, TheoryError> {
        if fret > FRET_COUNT {
            return Err(TheoryError::InvalidFret(fret));
        }
        let total = u32::from(self.open_class.chromatic_index()) + u32::from(fret);
        Ok(Pitch {
            class: PitchClass::from_index(total % 12),
            octave: self.open_octave + (total / 12) as i32,
        })
    }
}

/// Standard six-string tuning, ordered visually high-to-low.
pub const STANDARD_TUNING: [StringTuning; 6] = [
    StringTuning {
        label: "e",
        open_class: PitchClass::E,
        open_octave: 4,
    },
    StringTuning {
        label: "B",
        open_class: PitchClass::B,
        open_octave: 3,
    },
    StringTuning {
        label: "G",
        open_class: PitchClass::G,
        open_octave: 3,
    },
    StringTuning {
        label: "D",
        open_class: PitchClass::D,
        open_octave: 3,
    },
    StringTuning {
        label: "A",
        open_class: PitchClass::A,
        open_octave: 2,
    },
    StringTuning {
        label: "E",
        open_class: PitchClass::E,
        open_octave: 2,
    },
];

/// One location on the fretboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FretPosition {
    /// Label of the string ([`StringTuning::label`]).
    pub string_label: &'static str,
    /// Fret index, 0 = open string.
    pub fret: u8,
}

/// Every fretboard position that produces the given pitch.
///
/// Strings are scanned in their declared (visual) order, frets ascending
/// within each string. An empty result means the pitch does not occur on
/// the instrument — a normal outcome for the caller to message, not an
/// error.
pub fn positions_of(
    class: PitchClass,
    octave: i32,
    strings: &[StringTuning],
    max_fret: u8,
) -> Vec<FretPosition> {
    let target = Pitch::new(class, octave);
    let mut positions = Vec::new();
    for string in strings {
        for fret in 0..=max_fret.min(FRET_COUNT) {
            // note_at_fret cannot fail for fret <= FRET_COUNT
            if string.note_at_fret(fret) == Ok(target) {
                positions.push(FretPosition {
                    string_label: string.label,
                    fret,
                });
            }
        }
    }
    positions
}
