//! Audio output device listing command.

use clap::Args;
use cuerda_io::{default_output_device, list_output_devices};

#[derive(Args)]
pub struct DevicesArgs {}

pub fn run(_args: DevicesArgs) -> anyhow::Result<()> {
    let devices = list_output_devices()?;

    if devices.is_empty() {
        println!("No audio output devices found.");
        return Ok(());
    }

    let default_name = default_output_device().map(|d| d.name);

    println!("Output Devices");
    println!("==============\n");
    for (idx, device) in devices.iter().enumerate() {
        let marker = if Some(&device.name) == default_name.as_ref() {
            " (default)"
        } else {
            ""
        };
        println!(
            "  [{}] {} ({} Hz, {} ch){}",
            idx, device.name, device.default_sample_rate, device.channels, marker
        );
    }

    println!();
    println!("Tip: Use device index or partial name with --device:");
    println!("  cuerda play A4 --device 0");
    println!("  cuerda play A4 --device \"USB\"");

    Ok(())
}
