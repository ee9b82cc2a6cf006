//! Shared helpers for CLI commands.

use anyhow::{Context, bail};
use clap::ValueEnum;
use cuerda_synth::Timbre;
use cuerda_theory::PitchClass;

/// Which instrument surface a note should sound as.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CliInstrument {
    /// Piano-style keyboard voice (panned slightly left).
    Keyboard,
    /// Guitar-style fretboard voice (panned slightly right).
    #[default]
    Fretboard,
}

impl From<CliInstrument> for Timbre {
    fn from(s: CliInstrument) -> Self {
        match s {
            CliInstrument::Keyboard => Timbre::Keyboard,
            CliInstrument::Fretboard => Timbre::Fretboard,
        }
    }
}

/// Parse a note argument like `A4`, `C#3`, or `Db5` into a pitch class
/// and octave.
pub fn parse_note(input: &str) -> anyhow::Result<(PitchClass, i32)> {
    let split = input
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit() || *c == '-')
        .map(|(i, _)| i);

    let Some(split) = split else {
        bail!("note '{input}' is missing an octave number (try 'A4' or 'C#3')");
    };
    if split == 0 {
        bail!("note '{input}' is missing a pitch name (try 'A4' or 'C#3')");
    }

    let (name, octave) = input.split_at(split);
    let class: PitchClass = name
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown pitch name '{name}' in '{input}'"))?;
    let octave: i32 = octave
        .parse()
        .with_context(|| format!("bad octave '{octave}' in '{input}'"))?;

    Ok((class, octave))
}
