//! Fretboard position lookup command.

use super::common::parse_note;
use clap::Args;
use cuerda_theory::{DisplayMode, FRET_COUNT, STANDARD_TUNING, note_label, positions_of};

#[derive(Args)]
pub struct PositionsArgs {
    /// Note to look up, e.g. E4, C#3, Db5
    #[arg(value_name = "NOTE")]
    note: String,

    /// Highest fret to search
    #[arg(long, default_value_t = FRET_COUNT)]
    max_fret: u8,

    /// Spell accidentals as flats
    #[arg(long)]
    flats: bool,
}

pub fn run(args: PositionsArgs) -> anyhow::Result<()> {
    let (class, octave) = parse_note(&args.note)?;
    let mode = DisplayMode {
        show_octave_numbers: true,
        show_flats: args.flats,
    };
    let label = note_label(
        cuerda_theory::Pitch { class, octave },
        mode,
    );

    let positions = positions_of(class, octave, &STANDARD_TUNING, args.max_fret);

    if positions.is_empty() {
        println!("{label} is not reachable in standard tuning within {} frets", args.max_fret);
        return Ok(());
    }

    println!("{label} in standard tuning:");
    for pos in positions {
        println!("  string {:<2} fret {}", pos.string_label, pos.fret);
    }

    Ok(())
}
