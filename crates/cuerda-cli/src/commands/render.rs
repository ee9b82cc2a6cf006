//! Offline WAV rendering command.

use super::common::{CliInstrument, parse_note};
use clap::Args;
use cuerda_io::write_wav_stereo;
use cuerda_synth::VoiceEngine;
use std::path::PathBuf;

#[derive(Args)]
pub struct RenderArgs {
    /// Note to render, e.g. A4, C#3, Db5
    #[arg(value_name = "NOTE")]
    note: String,

    /// Output WAV file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// Which instrument voice to use
    #[arg(long, value_enum, default_value = "fretboard")]
    instrument: CliInstrument,

    /// Sample rate
    #[arg(long, default_value = "48000")]
    sample_rate: u32,

    /// Length of the rendered file in milliseconds
    #[arg(long, default_value = "950")]
    duration_ms: u32,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let (class, octave) = parse_note(&args.note)?;

    let mut engine = VoiceEngine::new(args.sample_rate as f32);
    engine.strike(class, octave, args.instrument.into())?;

    let frames = (u64::from(args.sample_rate) * u64::from(args.duration_ms) / 1000) as usize;
    let mut buffer = vec![0.0f32; frames * 2];
    engine.render(&mut buffer);

    write_wav_stereo(&args.output, &buffer, args.sample_rate)?;
    println!(
        "Rendered {class}{octave} ({} ms) to {}",
        args.duration_ms,
        args.output.display()
    );

    Ok(())
}
