//! `tfleet info` — Show the process-wide settings.

use clap::Args;
use tfleet_common::settings::GlobalSettings;

/// Arguments for the `info` command.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Clear the settings before printing them.
    #[arg(long)]
    pub reset: bool,
}

/// Executes the `info` command.
///
/// # Errors
///
/// This command does not fail; the signature matches the other handlers.
pub fn execute(args: InfoArgs, settings: &GlobalSettings) -> anyhow::Result<()> {
    if args.reset {
        settings.reset();
    }

    println!("environment: {}", settings.environment());
    println!("created_at:  {}", settings.created_at().to_rfc3339());

    let values = settings.settings();
    if values.is_empty() {
        println!("settings:    (none)");
    } else {
        println!("settings:");
        for (key, value) in &values {
            println!("  {key} = {value}");
        }
    }

    Ok(())
}
