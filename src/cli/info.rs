use anyhow::{Context, Result};
use std::path::PathBuf;

use ratechart::pipeline::load_rates;
use ratechart::summary::RateSummary;

/// Display summary statistics about a rate log
pub fn run(file: PathBuf) -> Result<()> {
    let table = load_rates(&file).context("Failed to read rate log")?;
    let summary = RateSummary::from_table(&table);

    println!("File: {}", file.display());

    #[cfg(feature = "colorized_output")]
    {
        print!("{}", summary.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        print!("{}", summary);
    }

    Ok(())
}
