//! Cuerda CLI - explore and hear notes on a keyboard and a fretboard.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cuerda")]
#[command(author, version, about = "Cuerda note explorer CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a note on the default audio output
    Play(commands::play::PlayArgs),

    /// Show where a note lives on the fretboard
    Positions(commands::positions::PositionsArgs),

    /// Print the fretboard note map
    Fretboard(commands::fretboard::FretboardArgs),

    /// Print the note frequency table
    Table(commands::table::TableArgs),

    /// Render a note to a WAV file
    Render(commands::render::RenderArgs),

    /// List audio output devices
    Devices(commands::devices::DevicesArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => commands::play::run(args),
        Commands::Positions(args) => commands::positions::run(args),
        Commands::Fretboard(args) => commands::fretboard::run(args),
        Commands::Table(args) => commands::table::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Devices(args) => commands::devices::run(args),
    }
}
