//! TOML batch configuration.
//!
//! Each `[[chart]]` entry is one run of the pipeline; `[defaults]` fills in
//! whatever an entry leaves out:
//!
//! ```toml
//! # charts.toml
//! [defaults]
//! output_dir = "export"
//! show = false        # headless; charts are presented unless told otherwise
//! backend = "bitmap"
//!
//! [[chart]]
//! name = "quic-full"
//! input = "log/quic-full.json"
//!
//! [[chart]]
//! name = "example"
//! input = "export.json"
//! output_dir = "pic"
//! size = [800, 600]
//! ```
//!
//! `input` is always required and `output_dir` must come from the entry or
//! from `[defaults]`; neither is guessed.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use ratechart::pipeline::ChartJob;
use ratechart::render::Backend;

/// Root configuration structure for batch files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Settings shared by every chart.
    #[serde(default)]
    pub defaults: ChartDefaults,

    /// Charts to render, in order.
    #[serde(default, rename = "chart")]
    pub charts: Vec<ChartEntry>,
}

/// Fallback values for chart entries.
#[derive(Debug, Default, Deserialize)]
pub struct ChartDefaults {
    /// Output directory for charts that do not name one.
    pub output_dir: Option<PathBuf>,

    /// Present charts interactively.
    pub show: Option<bool>,

    /// Chart backend name (`bitmap` or `matplotlib`).
    pub backend: Option<String>,
}

/// One chart to render.
#[derive(Debug, Deserialize)]
pub struct ChartEntry {
    /// Chart name; default title and file stem.
    pub name: String,

    /// JSON log to read.
    pub input: PathBuf,

    /// Output directory, overriding the default.
    pub output_dir: Option<PathBuf>,

    /// Chart title.
    pub title: Option<String>,

    /// Image file name.
    pub file_name: Option<String>,

    /// Image size in pixels as `[width, height]`.
    pub size: Option<(u32, u32)>,

    /// Present this chart interactively, overriding the default.
    pub show: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Backend named in `[defaults]`, if any.
    pub fn backend(&self) -> Result<Option<Backend>> {
        self.defaults
            .backend
            .as_deref()
            .map(|name| name.parse::<Backend>().map_err(anyhow::Error::msg))
            .transpose()
    }

    /// Resolve every entry into a pipeline job.
    pub fn jobs(&self) -> Result<Vec<ChartJob>> {
        self.charts
            .iter()
            .map(|entry| -> Result<ChartJob> {
                let output_dir = entry
                    .output_dir
                    .clone()
                    .or_else(|| self.defaults.output_dir.clone())
                    .with_context(|| {
                        format!("Chart '{}' has no output_dir and no default is set", entry.name)
                    })?;

                Ok(ChartJob {
                    name: entry.name.clone(),
                    input: entry.input.clone(),
                    output_dir,
                    title: entry.title.clone(),
                    file_name: entry.file_name.clone(),
                    size: entry.size,
                    show: entry.show.or(self.defaults.show).unwrap_or(true),
                })
            })
            .collect()
    }
}
