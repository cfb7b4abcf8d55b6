use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use nodepack::{load_catalog, pack_remainders, split_oversized, write_bundles, PackParams};

#[derive(Parser)]
#[command(
    name = "nodepack",
    about = "Pack an instance-catalog sensor listing into per-node job bundles",
    version
)]
struct Cli {
    /// JSON document mapping each job id to its list of sensor ids
    input: PathBuf,
    /// Output path prefix; each bundle lands at <prefix><index>.json
    prefix: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nodepack=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let params = PackParams::default();

    let mut jobs = load_catalog(&cli.input)
        .with_context(|| format!("loading catalog {}", cli.input.display()))?;
    let total_sensors: usize = jobs.iter().map(|j| j.remaining()).sum();
    tracing::info!(jobs = jobs.len(), sensors = total_sensors, "catalog loaded");

    let mut bundles = split_oversized(&mut jobs, params);
    tracing::info!(dedicated = bundles.len(), "oversized jobs split");

    pack_remainders(&mut jobs, params, &mut bundles);
    tracing::info!(total = bundles.len(), "remainders packed");

    let written = write_bundles(&bundles, &cli.prefix)
        .with_context(|| format!("writing bundles under prefix {}", cli.prefix))?;
    tracing::info!(files = written.len(), "bundle files written");

    Ok(())
}
