//! Fretboard map printing command.

use clap::Args;
use cuerda_theory::{DisplayMode, FRET_COUNT, STANDARD_TUNING, note_label};

#[derive(Args)]
pub struct FretboardArgs {
    /// Highest fret to print
    #[arg(long, default_value = "12")]
    max_fret: u8,

    /// Spell accidentals as flats
    #[arg(long)]
    flats: bool,

    /// Include octave numbers on each note
    #[arg(long)]
    octaves: bool,
}

pub fn run(args: FretboardArgs) -> anyhow::Result<()> {
    let max_fret = args.max_fret.min(FRET_COUNT);
    let mode = DisplayMode {
        show_octave_numbers: args.octaves,
        show_flats: args.flats,
    };
    let width = if args.octaves { 4 } else { 3 };

    // Header row of fret numbers
    print!("    ");
    for fret in 0..=max_fret {
        print!("{fret:>width$} ");
    }
    println!();

    for string in &STANDARD_TUNING {
        print!("{:<3} ", string.label);
        for fret in 0..=max_fret {
            let pitch = string.note_at_fret(fret)?;
            print!("{:>width$} ", note_label(pitch, mode));
        }
        println!();
    }

    Ok(())
}
