//! # Chart Pipeline
//!
//! One [`ChartJob`] names an input log, an output directory and a chart
//! title. [`run`] executes the steps strictly in order:
//!
//! 1. load the log,
//! 2. derive `RateMBps`,
//! 3. ensure the output directory exists,
//! 4. render the image,
//! 5. present it, unless the job opts out.
//!
//! The first failure aborts the job. A log that cannot be loaded therefore
//! never creates the output directory nor touches the image.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::loader::{LoadError, SampleTable};
use crate::output::{ensure_dir, DirStatus, OutputError};
use crate::render::{ChartSpec, RenderError, Renderer, DEFAULT_SIZE};
use crate::summary::RateSummary;
use crate::transform::RateTable;

/// Errors that abort a chart job
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Input log could not be loaded
    #[error("Failed to load {path}: {source}")]
    LoadError {
        /// Input log path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: LoadError,
    },

    /// `RateMBps` could not be derived
    #[error("Transform error: {0}")]
    TransformError(#[from] arrow::error::ArrowError),

    /// Output directory could not be prepared
    #[error("Output error: {0}")]
    OutputError(#[from] OutputError),

    /// Chart could not be rendered
    #[error("Render error: {0}")]
    RenderError(#[from] RenderError),
}

/// One parameterization of the pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct ChartJob {
    /// Job name; default title and file stem
    pub name: String,
    /// JSON log to read
    pub input: PathBuf,
    /// Directory receiving the image (created if missing, not recursively)
    pub output_dir: PathBuf,
    /// Chart title, defaults to `name`
    pub title: Option<String>,
    /// Image file name, defaults to `<name>.png`
    pub file_name: Option<String>,
    /// Image size in pixels, defaults to [`DEFAULT_SIZE`]
    pub size: Option<(u32, u32)>,
    /// Present the chart interactively after writing it
    pub show: bool,
}

impl ChartJob {
    /// Job with default title, file name and size, presented once written
    pub fn new(
        name: impl Into<String>,
        input: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            output_dir: output_dir.into(),
            title: None,
            file_name: None,
            size: None,
            show: true,
        }
    }

    /// Set the chart title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the image file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Set the image size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Whether to present the chart after writing it
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Chart title
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Chart description handed to the renderer
    pub fn chart_spec(&self) -> ChartSpec {
        let chart = ChartSpec::new(self.title());
        match self.size {
            Some((width, height)) => chart.with_size(width, height),
            None => chart,
        }
    }

    /// Full path of the image
    pub fn output_path(&self) -> PathBuf {
        match &self.file_name {
            Some(file_name) => self.output_dir.join(file_name),
            None => self.output_dir.join(format!("{}.png", self.name)),
        }
    }
}

/// Outcome of a successful job
#[derive(Debug, Clone)]
pub struct PipelineStats {
    /// Number of samples read
    pub samples: usize,
    /// Image written
    pub output: PathBuf,
    /// Whether the output directory had to be created
    pub dir_status: DirStatus,
    /// Highest rate in MB/s, with the second it occurred at
    pub peak_mbps: Option<(f64, f64)>,
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} samples -> {}", self.samples, self.output.display())?;
        if self.dir_status == DirStatus::Created {
            write!(f, " (directory created)")?;
        }
        if let Some((second, rate)) = self.peak_mbps {
            write!(f, ", peak {:.2} MB/s at {}s", rate, second)?;
        }
        Ok(())
    }
}

/// Load a log and derive its `RateMBps` column
pub fn load_rates(input: &Path) -> Result<RateTable, PipelineError> {
    let samples = SampleTable::from_path(input).map_err(|source| PipelineError::LoadError {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(RateTable::from_samples(&samples)?)
}

/// Run one chart job to completion
pub fn run(job: &ChartJob, renderer: &dyn Renderer) -> Result<PipelineStats, PipelineError> {
    info!("Chart '{}': {}", job.name, job.input.display());

    let table = load_rates(&job.input)?;
    let dir_status = ensure_dir(&job.output_dir)?;

    let output = job.output_path();
    let (second, rate_mbps) = table.series();
    let chart = job.chart_spec();
    renderer.render(&second, &rate_mbps, &chart, &output)?;
    info!(
        "Wrote {} ({} samples, {} backend)",
        output.display(),
        table.len(),
        renderer.name()
    );

    if job.show {
        if let Err(e) = renderer.present(&output) {
            warn!("Could not present {}: {}", output.display(), e);
        }
    }

    Ok(PipelineStats {
        samples: table.len(),
        output,
        dir_status,
        peak_mbps: RateSummary::from_table(&table).peak,
    })
}
