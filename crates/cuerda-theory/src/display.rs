//! User-facing note spelling.
//!
//! Display preferences are an explicit [`DisplayMode`] value threaded into
//! each call, never process-wide state; the owning UI passes a snapshot
//! per render.

use crate::pitch::{Pitch, PitchClass};
use alloc::format;
use alloc::string::String;

/// Formatting flags for note labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayMode {
    /// Append the octave number to labels ("C#4" instead of "C#").
    pub show_octave_numbers: bool,
    /// Spell the five enharmonic sharps as flats (Db, Eb, Gb, Ab, Bb).
    pub show_flats: bool,
}

/// User-facing spelling of a pitch class.
///
/// Total over all 12 classes: naturals are unchanged regardless of mode,
/// and the sharp spelling is returned unless `show_flats` is set.
pub fn display_name(class: PitchClass, mode: DisplayMode) -> &'static str {
    if mode.show_flats {
        if let Some(flat) = class.flat_name() {
            return flat;
        }
    }
    class.name()
}

/// Full label for a pitch, honoring both display flags.
pub fn note_label(pitch: Pitch, mode: DisplayMode) -> String {
    let name = display_name(pitch.class, mode);
    if mode.show_octave_numbers {
        format!("{name}{}", pitch.octave)
    } else {
        String::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sharp_mode_is_identity() {
        let mode = DisplayMode::default();
        for class in PitchClass::ALL {
            assert_eq!(display_name(class, mode), class.name());
        }
    }

    #[test]
    fn flat_mode_respells_the_five_sharps() {
        let mode = DisplayMode {
            show_flats: true,
            ..DisplayMode::default()
        };
        assert_eq!(display_name(PitchClass::Cs, mode), "Db");
        assert_eq!(display_name(PitchClass::Ds, mode), "Eb");
        assert_eq!(display_name(PitchClass::Fs, mode), "Gb");
        assert_eq!(display_name(PitchClass::Gs, mode), "Ab");
        assert_eq!(display_name(PitchClass::As, mode), "Bb");
        // Naturals are untouched
        assert_eq!(display_name(PitchClass::E, mode), "E");
        assert_eq!(display_name(PitchClass::C, mode), "C");
    }

    #[test]
    fn labels_append_octave_on_request() {
        let pitch = Pitch::new(PitchClass::Cs, 4);
        assert_eq!(note_label(pitch, DisplayMode::default()), "C#");
        assert_eq!(
            note_label(
                pitch,
                DisplayMode {
                    show_octave_numbers: true,
                    show_flats: true,
                }
            ),
            "Db4"
        );
    }
}
