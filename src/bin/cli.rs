// src/bin/cli.rs
use tgstat_tools::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = log::init() {
        eprintln!("Logging disabled: {e}");
    }
    cli::run().map_err(|e| color_eyre::eyre::eyre!("{e}"))
}
