//! 2D Ising temperature scan with single-spin-flip Metropolis updates.
//!
//!   ising_scan --size 100 --sweeps 100000 --beta-range 0.1,1.5,0.1
//!   RUST_LOG=debug ising_scan --size 16 --sweeps 1000 --seed 42

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use ising_scan::beta_range::BetaRange;
use ising_scan::config::ScanConfig;
use ising_scan::scan::run_scan;

#[derive(Parser)]
#[command(about = "Metropolis Monte Carlo scan of the 2D Ising model")]
struct Cli {
    /// Lattice size N (N×N sites)
    #[arg(long, short, default_value = "100")]
    size: usize,

    /// Sweeps per temperature point (one sweep = N² trial flips)
    #[arg(long, default_value = "100000")]
    sweeps: usize,

    /// Beta range (min,max,step), both ends inclusive
    #[arg(long, default_value = "0.1,1.5,0.1", value_delimiter = ',')]
    beta_range: Vec<f64>,

    /// Explicit beta values; overrides --beta-range
    #[arg(long, value_delimiter = ',', conflicts_with = "beta_range")]
    betas: Option<Vec<f64>>,

    /// Master RNG seed (drawn from OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Export the lattice every this many sweeps
    #[arg(long, default_value = "100")]
    snapshot_every: usize,

    /// Snapshot file shared by all temperature points
    #[arg(long, default_value = "ising_spins.txt")]
    snapshots: PathBuf,

    /// Skip snapshot export entirely
    #[arg(long)]
    no_snapshots: bool,

    /// Average observables over all sweeps after this one instead of
    /// reporting the final configuration
    #[arg(long)]
    measure_after: Option<usize>,

    /// Result CSV
    #[arg(long, short, default_value = "ising_results.csv")]
    output: PathBuf,

    /// Run temperature points on all cores (snapshots of every point are
    /// held in memory until the scan finishes)
    #[arg(long)]
    parallel: bool,
}

impl Cli {
    fn into_config(self) -> Result<ScanConfig> {
        let betas = match self.betas {
            Some(betas) => betas,
            None => {
                let [min, max, step] = self.beta_range[..] else {
                    bail!("--beta-range expects min,max,step, got {:?}", self.beta_range);
                };
                BetaRange::new(min, max, step)?.values()
            }
        };
        let cfg = ScanConfig {
            size:           self.size,
            sweeps:         self.sweeps,
            betas,
            seed:           self.seed,
            snapshot_every: self.snapshot_every,
            measure_after:  self.measure_after,
            snapshot_path:  (!self.no_snapshots).then_some(self.snapshots),
            results_path:   self.output,
            parallel:       self.parallel,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Cli::parse().into_config().context("invalid configuration")?;
    log::debug!("Configuration:\n{cfg:#?}");

    let records = run_scan(&cfg).context("scan failed")?;
    log::info!("Completed {} temperature points", records.len());
    Ok(())
}
