//! Note frequency table command.

use clap::Args;
use cuerda_theory::{DisplayMode, OCTAVE_MAX, OCTAVE_MIN, PitchClass, display_name, frequency};

#[derive(Args)]
pub struct TableArgs {
    /// Spell accidentals as flats
    #[arg(long)]
    flats: bool,

    /// Only print this octave
    #[arg(long)]
    octave: Option<i32>,
}

pub fn run(args: TableArgs) -> anyhow::Result<()> {
    let mode = DisplayMode {
        show_octave_numbers: true,
        show_flats: args.flats,
    };

    let octaves: Vec<i32> = match args.octave {
        Some(o) => {
            anyhow::ensure!(
                (OCTAVE_MIN..=OCTAVE_MAX).contains(&o),
                "octave {o} is outside the supported range {OCTAVE_MIN}..={OCTAVE_MAX}"
            );
            vec![o]
        }
        None => (OCTAVE_MIN..=OCTAVE_MAX).collect(),
    };

    println!("{:<6} {:>10}", "Note", "Freq (Hz)");
    for octave in octaves {
        for class in PitchClass::ALL {
            let freq = frequency(class, octave)?;
            println!("{:<2}{:<4} {freq:>10.2}", display_name(class, mode), octave);
        }
    }

    Ok(())
}
