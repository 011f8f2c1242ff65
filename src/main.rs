use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use unspike::pipeline::{default_output_path, run};
use unspike::{AngleThreshold, CoincidentVertexPolicy, DegenerateRingPolicy, UnspikeConfig};

#[derive(Parser)]
#[command(name = "unspike")]
#[command(
    version,
    about = "Remove spikes from polygons by filtering out vertices forming angles sharper than a threshold angle"
)]
struct Cli {
    /// Input GeoJSON feature collection
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (defaults to <input>_unspiked.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Minimum angle threshold in degrees, in (0, 180]
    #[arg(short, long, allow_hyphen_values = true)]
    angle: f64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Angle given to a vertex that coincides with a neighbour
    #[arg(long, value_enum, default_value_t = CoincidentArg::Straight)]
    coincident: CoincidentArg,

    /// What to do with a ring that would drop below three vertices
    #[arg(long, value_enum, default_value_t = DegenerateArg::Keep)]
    degenerate_ring: DegenerateArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum CoincidentArg {
    /// 180 degrees, never a spike
    Straight,
    /// 0 degrees, always removed
    Collapse,
}

impl From<CoincidentArg> for CoincidentVertexPolicy {
    fn from(arg: CoincidentArg) -> Self {
        match arg {
            CoincidentArg::Straight => Self::Straight,
            CoincidentArg::Collapse => Self::Collapse,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DegenerateArg {
    /// Leave the ring unfiltered
    Keep,
    /// Skip the whole polygon
    Invalidate,
}

impl From<DegenerateArg> for DegenerateRingPolicy {
    fn from(arg: DegenerateArg) -> Self {
        match arg {
            DegenerateArg::Keep => Self::KeepOriginal,
            DegenerateArg::Invalidate => Self::InvalidatePolygon,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let threshold = AngleThreshold::new(cli.angle).context("invalid --angle")?;
    let config = UnspikeConfig::new(threshold)
        .with_coincident(cli.coincident.into())
        .with_degenerate_ring(cli.degenerate_ring.into());
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input));

    tracing::info!(
        input = %cli.input.display(),
        output = %output.display(),
        angle = threshold.degrees(),
        "configuration"
    );

    let summary = run(&cli.input, &output, &config)
        .with_context(|| format!("failed to unspike {}", cli.input.display()))?;

    if cli.verbose {
        println!("{summary}");
    }
    if summary.total_spikes_removed > 0 {
        println!(
            "Process completed. {} spike/s removed.",
            summary.total_spikes_removed
        );
    } else {
        println!("Process completed. No spikes found.");
    }
    Ok(())
}
