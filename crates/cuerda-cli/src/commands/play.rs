//! Live note playback command.

use super::common::{CliInstrument, parse_note};
use clap::Args;
use cuerda_io::NotePlayer;
use cuerda_theory::{
    DisplayMode, FRET_COUNT, Pitch, STANDARD_TUNING, frequency, note_label, positions_of,
};
use std::time::Duration;

#[derive(Args)]
pub struct PlayArgs {
    /// Notes to play in order, e.g. A4 C#3 Db5
    #[arg(value_name = "NOTE", required = true)]
    notes: Vec<String>,

    /// Which instrument voice to use
    #[arg(long, value_enum, default_value = "fretboard")]
    instrument: CliInstrument,

    /// Output device (index, exact name, or partial name)
    #[arg(long)]
    output: Option<String>,

    /// Gap between note onsets in milliseconds. Gaps shorter than the
    /// 900 ms pluck retrigger the single voice.
    #[arg(long, default_value = "950")]
    gap_ms: u64,

    /// Spell accidentals as flats
    #[arg(long)]
    flats: bool,

    /// Include octave numbers on printed positions
    #[arg(long)]
    octaves: bool,
}

pub fn run(args: PlayArgs) -> anyhow::Result<()> {
    // Parse everything up front so a typo in the last note does not play
    // half the sequence first.
    let notes = args
        .notes
        .iter()
        .map(|n| parse_note(n))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mode = DisplayMode {
        show_octave_numbers: args.octaves,
        show_flats: args.flats,
    };

    let mut player = NotePlayer::new(args.output.as_deref());
    let last = notes.len() - 1;

    for (i, (class, octave)) in notes.into_iter().enumerate() {
        let freq = frequency(class, octave)?;
        player.play(class, octave, args.instrument.into())?;

        let label = note_label(Pitch { class, octave }, mode);
        println!("{label} ({freq:.2} Hz)");
        for pos in positions_of(class, octave, &STANDARD_TUNING, FRET_COUNT) {
            println!("  string {:<2} fret {}", pos.string_label, pos.fret);
        }

        // Hold past the last pluck so it can ring out.
        let hold = if i == last {
            args.gap_ms.max(950)
        } else {
            args.gap_ms
        };
        std::thread::sleep(Duration::from_millis(hold));
    }

    Ok(())
}
