//! Pitch classes and pitches.
//!
//! The sharp spelling is the canonical internal form; flat spellings exist
//! only at the display boundary ([`crate::display`]) and in parsing.

use crate::TheoryError;

/// The 12 chromatic pitch classes, ordered by semitone position within the
/// octave (C = 0 .. B = 11).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PitchClass {
    /// C
    C,
    /// C# / Db
    Cs,
    /// D
    D,
    /// D# / Eb
    Ds,
    /// E
    E,
    /// F
    F,
    /// F# / Gb
    Fs,
    /// G
    G,
    /// G# / Ab
    Gs,
    /// A
    A,
    /// A# / Bb
    As,
    /// B
    B,
}

impl PitchClass {
    /// All 12 pitch classes in chromatic order.
    pub const ALL: [PitchClass; 12] = [
        Self::C,
        Self::Cs,
        Self::D,
        Self::Ds,
        Self::E,
        Self::F,
        Self::Fs,
        Self::G,
        Self::Gs,
        Self::A,
        Self::As,
        Self::B,
    ];

    /// Semitone position within the octave (0..=11).
    #[inline]
    pub fn chromatic_index(self) -> u8 {
        self as u8
    }

    /// Pitch class at a chromatic index; wraps modulo 12.
    #[inline]
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % 12) as usize]
    }

    /// Canonical sharp spelling.
    pub fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cs => "C#",
            Self::D => "D",
            Self::Ds => "D#",
            Self::E => "E",
            Self::F => "F",
            Self::Fs => "F#",
            Self::G => "G",
            Self::Gs => "G#",
            Self::A => "A",
            Self::As => "A#",
            Self::B => "B",
        }
    }

    /// Flat spelling for the five enharmonic sharps, `None` for naturals.
    pub fn flat_name(self) -> Option<&'static str> {
        match self {
            Self::Cs => Some("Db"),
            Self::Ds => Some("Eb"),
            Self::Fs => Some("Gb"),
            Self::Gs => Some("Ab"),
            Self::As => Some("Bb"),
            _ => None,
        }
    }

    /// Whether this class is one of the five enharmonic sharps.
    pub fn is_sharp(self) -> bool {
        self.flat_name().is_some()
    }
}

impl core::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for PitchClass {
    type Err = TheoryError;

    /// Parse a pitch class from either its sharp or its flat spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Self::C),
            "C#" | "Db" => Ok(Self::Cs),
            "D" => Ok(Self::D),
            "D#" | "Eb" => Ok(Self::Ds),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            "F#" | "Gb" => Ok(Self::Fs),
            "G" => Ok(Self::G),
            "G#" | "Ab" => Ok(Self::Gs),
            "A" => Ok(Self::A),
            "A#" | "Bb" => Ok(Self::As),
            "B" => Ok(Self::B),
            _ => Err(TheoryError::UnknownPitchName),
        }
    }
}

/// A pitch class in a specific octave register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pitch {
    /// Chromatic pitch class.
    pub class: PitchClass,
    /// Octave register; octave 4 contains A4 = 440 Hz.
    pub octave: i32,
}

impl Pitch {
    /// Create a pitch from class and octave.
    pub fn new(class: PitchClass, octave: i32) -> Self {
        Self { class, octave }
    }

    /// Semitone distance from A4 (A in octave 4). Negative below A4.
    #[inline]
    pub fn semitones_from_a4(self) -> i32 {
        (self.octave - 4) * 12 + i32::from(self.class.chromatic_index()) - 9
    }
}

impl core::fmt::Display for Pitch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.class, self.octave)
    }
}
