use std::process;

use anyhow::{Context, Result};
use cocktail_image_resizer::{config::app_config, service::resizer};

fn main() {
    if let Err(err) = run() {
        println!("❌ Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    ctrlc::set_handler(|| {
        println!("\n❌ Process interrupted by user");
        process::exit(1);
    })
    .context("Cannot install the Ctrl-C handler")?;

    let (source_dir, output_dir) = app_config::resolve_asset_dirs()?;
    resizer::resize_all(&source_dir, &output_dir)?;
    Ok(())
}
