//! # Chart Rendering
//!
//! Draws `RateMBps` against `Second` as a single line chart and writes it as
//! a PNG image, overwriting any file already at the destination.
//!
//! Two backends implement [`Renderer`]:
//!
//! - [`BitmapRenderer`]: pure Rust, built on `plotters`. Presenting opens the
//!   written image in the platform's image viewer.
//! - `MatplotlibRenderer` (feature `python`): drives `matplotlib.pyplot`
//!   through an embedded interpreter. Presenting opens an interactive
//!   matplotlib window and blocks until it is closed.
//!
//! Both backends truncate the series to the shorter of the two inputs and
//! treat non-finite values as gaps in the line.

mod bitmap;
mod layout;
#[cfg(feature = "python")]
mod pyplot;
mod viewer;

pub use bitmap::BitmapRenderer;
#[cfg(feature = "python")]
pub use pyplot::MatplotlibRenderer;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default x-axis label
pub const DEFAULT_X_LABEL: &str = "Second";
/// Default y-axis label
pub const DEFAULT_Y_LABEL: &str = "Rate MB/s";
/// Default image size in pixels (width, height)
pub const DEFAULT_SIZE: (u32, u32) = (640, 480);

/// Errors that can occur during rendering
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error reported by the plotting library
    #[error("Plotting error: {0}")]
    PlotError(String),

    /// Backend not compiled into this build
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Python exception raised by matplotlib
    #[cfg(feature = "python")]
    #[error("Python error: {0}")]
    PythonError(#[from] pyo3::PyErr),
}

/// Labels and dimensions of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Chart title
    pub title: String,
    /// x-axis label
    pub x_label: String,
    /// y-axis label
    pub y_label: String,
    /// Image size in pixels (width, height)
    pub size: (u32, u32),
}

impl ChartSpec {
    /// Chart with the given title and the default labels and size
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            size: DEFAULT_SIZE,
        }
    }

    /// Override the image size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }
}

/// A chart backend
pub trait Renderer {
    /// Short backend name, for logging
    fn name(&self) -> &'static str;

    /// Plot `rate_mbps` against `second` and write the image to `output`
    fn render(
        &self,
        second: &[f64],
        rate_mbps: &[f64],
        chart: &ChartSpec,
        output: &Path,
    ) -> Result<(), RenderError>;

    /// Show the chart last written to `output` interactively
    fn present(&self, output: &Path) -> Result<(), RenderError>;
}

/// Available chart backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// `plotters` bitmap backend
    #[default]
    Bitmap,
    /// matplotlib through embedded Python (feature `python`)
    Matplotlib,
}

impl Backend {
    /// Instantiate the renderer for this backend
    pub fn renderer(self) -> Result<Box<dyn Renderer>, RenderError> {
        match self {
            Backend::Bitmap => Ok(Box::new(BitmapRenderer::new())),
            #[cfg(feature = "python")]
            Backend::Matplotlib => Ok(Box::new(MatplotlibRenderer::new())),
            #[cfg(not(feature = "python"))]
            Backend::Matplotlib => Err(RenderError::BackendUnavailable(
                "matplotlib backend requires the `python` feature".to_string(),
            )),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Bitmap => write!(f, "bitmap"),
            Backend::Matplotlib => write!(f, "matplotlib"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bitmap" | "plotters" => Ok(Backend::Bitmap),
            "matplotlib" | "pyplot" => Ok(Backend::Matplotlib),
            other => Err(format!(
                "unknown backend '{}' (expected 'bitmap' or 'matplotlib')",
                other
            )),
        }
    }
}
