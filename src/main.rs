//! Reads the reception outline of every feeder instance and prints the
//! merged `multiRange` document.
//!
//! ```text
//! multioutline --count 3                       # /run/adsb-feeder-ultrafeeder_{1..3}
//! multioutline --count 2 --run-dir /tmp/run --pretty
//! RUST_LOG=multioutline=debug multioutline --count 4 --output range.json
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use multioutline::config::{
    SourceConfig, DEFAULT_INSTANCE_PREFIX, DEFAULT_OUTLINE_PATH, DEFAULT_RUN_DIR,
};
use multioutline::source::FsOutlineSource;
use multioutline::{MultiOutline, Result};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "multioutline")]
#[command(about = "Merge per-feeder reception outlines into combined coverage regions")]
#[command(version)]
struct Cli {
    /// Number of feeder instances to read (candidates 1..=COUNT)
    #[arg(short, long)]
    count: u16,

    /// Directory holding the per-instance run directories
    #[arg(long, default_value = DEFAULT_RUN_DIR)]
    run_dir: PathBuf,

    /// Prefix of each instance directory; the candidate index is appended
    #[arg(long, default_value = DEFAULT_INSTANCE_PREFIX)]
    instance_prefix: String,

    /// Outline file location inside an instance directory
    #[arg(long, default_value = DEFAULT_OUTLINE_PATH)]
    outline_path: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// Default: WARN for everything, INFO for multioutline.
const DEFAULT_LOG_FILTER: &str = "warn,multioutline=info";

/// Builds the log filter from `RUST_LOG` (e.g. `RUST_LOG=multioutline=debug`),
/// falling back to [`DEFAULT_LOG_FILTER`] when unset, empty or unparsable.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SourceConfig {
        run_dir: cli.run_dir,
        instance_prefix: cli.instance_prefix,
        outline_path: cli.outline_path,
    };

    let report =
        MultiOutline::new(FsOutlineSource::new(config)).create(usize::from(cli.count));
    tracing::info!(
        regions = report.multi_range.len(),
        active = report.active,
        dropped = report.dropped.len(),
        "merged feeder outlines"
    );

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    if cli.pretty {
        serde_json::to_writer_pretty(&mut writer, &report.multi_range)?;
    } else {
        serde_json::to_writer(&mut writer, &report.multi_range)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
