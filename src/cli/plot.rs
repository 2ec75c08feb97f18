use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use ratechart::pipeline::{self, ChartJob};
use ratechart::render::Backend;

/// Render a single rate log
pub fn run(
    input: PathBuf,
    output_dir: PathBuf,
    name: Option<String>,
    title: Option<String>,
    file_name: Option<String>,
    size: Option<(u32, u32)>,
    show: bool,
    backend: Backend,
) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .with_context(|| format!("Cannot derive a chart name from {}", input.display()))?,
    };

    let job = ChartJob {
        name,
        input,
        output_dir,
        title,
        file_name,
        size,
        show,
    };

    let renderer = backend.renderer().context("Failed to initialize chart backend")?;
    info!("Backend: {}", backend);

    let stats = pipeline::run(&job, renderer.as_ref())
        .with_context(|| format!("Chart '{}' failed", job.name))?;
    println!("{}", stats);
    Ok(())
}
