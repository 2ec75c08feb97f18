//! # ratechart - Throughput Log Charts
//!
//! `ratechart` turns a JSON log of per-second throughput samples into a line
//! chart of the transfer rate in MB/s.
//!
//! ## Pipeline
//!
//! Every chart goes through the same four steps, strictly in order:
//!
//! 1. **Load**: parse the JSON records into a columnar [`loader::SampleTable`]
//!    (an Arrow `RecordBatch` with `Second` and `RateBytes` columns).
//! 2. **Transform**: derive `RateMBps = RateBytes / 1048576` into a
//!    [`transform::RateTable`].
//! 3. **Ensure output directory**: create it if it is missing.
//! 4. **Render**: plot `RateMBps` against `Second` and write a PNG, optionally
//!    presenting the chart in an interactive viewer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ratechart::pipeline::{self, ChartJob};
//! use ratechart::render::BitmapRenderer;
//!
//! let job = ChartJob::new("quic-full", "log/quic-full.json", "export");
//! let stats = pipeline::run(&job, &BitmapRenderer::new())?;
//! println!("{}", stats);
//! # Ok::<(), ratechart::pipeline::PipelineError>(())
//! ```
//!
//! ## Input Format
//!
//! ```json
//! [{"Second": 0, "RateBytes": 1048576}, {"Second": 1, "RateBytes": 2097152}]
//! ```
//!
//! Extra keys in each record are ignored.
//!
//! ## Architecture
//!
//! - [`schema`]: column names and Arrow schemas
//! - [`loader`]: JSON log parsing into a columnar table
//! - [`transform`]: byte rate to MB/s conversion
//! - [`output`]: output directory handling
//! - [`render`]: chart backends (plotters bitmap, optional matplotlib)
//! - [`pipeline`]: the parameterized load/transform/render job
//! - [`summary`]: descriptive statistics over a rate log

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod loader;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod schema;
pub mod summary;
pub mod transform;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::loader::{LoadError, SampleTable};
    pub use crate::output::{ensure_dir, DirStatus, OutputError};
    pub use crate::pipeline::{ChartJob, PipelineError, PipelineStats};
    pub use crate::render::{Backend, BitmapRenderer, ChartSpec, RenderError, Renderer};
    pub use crate::schema::{columns, create_rate_schema, create_sample_schema};
    pub use crate::summary::RateSummary;
    pub use crate::transform::{rate_mbps, RateTable, BYTES_PER_MEBIBYTE};
}
