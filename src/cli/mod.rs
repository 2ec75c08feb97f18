use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ratechart::render::Backend;

mod batch;
mod info;
mod plot;

mod config;

/// ratechart - Throughput Log Charts
#[derive(Parser)]
#[command(name = "ratechart")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Chart backend selection.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum BackendArg {
    /// Pure Rust bitmap renderer (plotters)
    #[default]
    Bitmap,
    /// matplotlib via embedded Python (requires the python feature)
    Matplotlib,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Bitmap => Backend::Bitmap,
            BackendArg::Matplotlib => Backend::Matplotlib,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render one rate log as a MB/s line chart
    Plot {
        /// Input JSON log path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Directory receiving the image (created if missing)
        #[arg(short = 'o', long, value_name = "DIR")]
        output_dir: PathBuf,

        /// Chart name (defaults to the input file stem)
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Chart title (defaults to the name)
        #[arg(short = 't', long)]
        title: Option<String>,

        /// Image file name (defaults to <name>.png)
        #[arg(long)]
        file_name: Option<String>,

        /// Image size in pixels, e.g. 800x600 (defaults to 640x480)
        #[arg(long, value_name = "WxH", value_parser = parse_size)]
        size: Option<(u32, u32)>,

        /// Write the chart without opening it in a viewer
        #[arg(long)]
        no_show: bool,

        /// Chart backend
        #[arg(short = 'b', long, default_value = "bitmap", value_enum)]
        backend: BackendArg,
    },

    /// Render every chart listed in a TOML config file
    Batch {
        /// TOML config file path
        #[arg(value_name = "CONFIG")]
        config: PathBuf,

        /// Chart backend (overrides the config file)
        #[arg(short = 'b', long, value_enum)]
        backend: Option<BackendArg>,
    },

    /// Display summary statistics about a rate log
    Info {
        /// Input JSON log path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

/// Parse an image size given as `WIDTHxHEIGHT`.
fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (width, height) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let width: u32 = width.trim().parse().map_err(|e| format!("invalid width: {}", e))?;
    let height: u32 = height.trim().parse().map_err(|e| format!("invalid height: {}", e))?;
    if width == 0 || height == 0 {
        return Err(format!("image size must be non-zero, got {}x{}", width, height));
    }
    Ok((width, height))
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Plot {
            input,
            output_dir,
            name,
            title,
            file_name,
            size,
            no_show,
            backend,
        } => plot::run(
            input,
            output_dir,
            name,
            title,
            file_name,
            size,
            !no_show,
            Backend::from(backend),
        ),
        Commands::Batch { config, backend } => batch::run(config, backend.map(Backend::from)),
        Commands::Info { file } => info::run(file),
    }
}
