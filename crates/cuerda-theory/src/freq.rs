//! Equal-temperament frequency lookup.
//!
//! Frequencies are derived, not tabulated: every pitch is
//! `440 * 2^(n/12)` where `n` is its semitone distance from A4. The
//! supported octave range (2..=7) is one octave wider at the top than the
//! rendered keyboard (2..=6) so fretted notes above the keyboard's last
//! key still resolve.

use crate::pitch::{Pitch, PitchClass};
use crate::TheoryError;
use libm::exp2f;

/// Reference tuning: A4 in Hz.
pub const A4_HZ: f32 = 440.0;

/// Lowest octave with a frequency-table entry.
pub const OCTAVE_MIN: i32 = 2;

/// Highest octave with a frequency-table entry.
pub const OCTAVE_MAX: i32 = 7;

/// Equal-temperament frequency of a pitch, in Hz.
///
/// Pure and deterministic: the same `(class, octave)` always yields the
/// same value, and no two inputs share an entry. Octaves outside
/// [`OCTAVE_MIN`]..=[`OCTAVE_MAX`] fail with
/// [`TheoryError::OctaveOutOfRange`].
///
/// # Example
///
/// ```rust
/// use cuerda_theory::{PitchClass, frequency};
///
/// let e2 = frequency(PitchClass::E, 2).unwrap();
/// assert!((e2 - 82.41).abs() < 0.01); // low E string
/// ```
pub fn frequency(class: PitchClass, octave: i32) -> Result<f32, TheoryError> {
    if !(OCTAVE_MIN..=OCTAVE_MAX).contains(&octave) {
        return Err(TheoryError::OctaveOutOfRange(octave));
    }
    let semitones = Pitch::new(class, octave).semitones_from_a4();
    Ok(A4_HZ * exp2f(semitones as f32 / 12.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference values from the standard equal-temperament table,
    /// 2 decimal places.
    #[test]
    fn matches_reference_table() {
        let cases = [
            (PitchClass::C, 2, 65.41),
            (PitchClass::E, 2, 82.41),
            (PitchClass::A, 2, 110.00),
            (PitchClass::D, 3, 146.83),
            (PitchClass::G, 3, 196.00),
            (PitchClass::B, 3, 246.94),
            (PitchClass::E, 4, 329.63),
            (PitchClass::A, 4, 440.00),
            (PitchClass::Cs, 5, 554.37),
            (PitchClass::Fs, 6, 2959.96),
            (PitchClass::B, 7, 7902.13),
        ];
        for (class, octave, expected) in cases {
            let got = frequency(class, octave).unwrap();
            assert!(
                (got - expected).abs() < 0.01,
                "{class}{octave}: expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_octaves() {
        assert_eq!(
            frequency(PitchClass::C, 1),
            Err(TheoryError::OctaveOutOfRange(1))
        );
        assert_eq!(
            frequency(PitchClass::C, 8),
            Err(TheoryError::OctaveOutOfRange(8))
        );
        assert!(frequency(PitchClass::C, 2).is_ok());
        assert!(frequency(PitchClass::B, 7).is_ok());
    }

    #[test]
    fn no_two_pitches_share_a_frequency() {
        let mut last = 0.0f32;
        for octave in OCTAVE_MIN..=OCTAVE_MAX {
            for class in PitchClass::ALL {
                let f = frequency(class, octave).unwrap();
                assert!(f > last, "frequencies must be strictly increasing");
                last = f;
            }
        }
    }
}
