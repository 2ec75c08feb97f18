use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use ratechart::pipeline;
use ratechart::render::Backend;

use super::config::Config;

/// Render every chart of a batch config, stopping at the first failure
pub fn run(config_path: PathBuf, backend: Option<Backend>) -> Result<()> {
    let config = Config::from_file(&config_path)?;
    let jobs = config.jobs()?;
    let backend = match backend {
        Some(backend) => backend,
        None => config.backend()?.unwrap_or_default(),
    };

    info!(
        "Batch {}: {} chart(s), {} backend",
        config_path.display(),
        jobs.len(),
        backend
    );

    let renderer = backend.renderer().context("Failed to initialize chart backend")?;
    for (idx, job) in jobs.iter().enumerate() {
        let stats = pipeline::run(job, renderer.as_ref())
            .with_context(|| format!("Chart {} of {} ('{}') failed", idx + 1, jobs.len(), job.name))?;
        println!("{}", stats);
    }

    Ok(())
}
