//! Run-time configuration for a temperature scan (single source of truth).

use std::path::PathBuf;

use crate::beta_range::BetaRange;
use crate::error::{IsingError, IsingResult};
use crate::simulation::{RunSettings, DEFAULT_SNAPSHOT_EVERY};

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Linear lattice size N.
    pub size:           usize,
    /// Sweeps per temperature point.
    pub sweeps:         usize,
    pub betas:          Vec<f64>,
    /// Master seed; `None` draws one from OS entropy.
    pub seed:           Option<u64>,
    pub snapshot_every: usize,
    pub measure_after:  Option<usize>,
    /// Shared snapshot artifact; `None` disables snapshot export.
    pub snapshot_path:  Option<PathBuf>,
    pub results_path:   PathBuf,
    /// Run temperature points on the rayon pool. Each point keeps its whole
    /// snapshot text in memory until every point has finished, up to
    /// `(3N² + 4) · (sweeps / snapshot_every + 1)` bytes per beta (about
    /// 25 MB per point with the defaults); pair with a coarser
    /// `snapshot_every` or no snapshots for large scans.
    pub parallel:       bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            size:           100,
            sweeps:         100_000,
            betas:          BetaRange { min: 0.1, max: 1.5, step: 0.1 }.values(),
            seed:           None,
            snapshot_every: DEFAULT_SNAPSHOT_EVERY,
            measure_after:  None,
            snapshot_path:  Some(PathBuf::from("ising_spins.txt")),
            results_path:   PathBuf::from("ising_results.csv"),
            parallel:       false,
        }
    }
}

impl ScanConfig {
    /// Reject configurations that would produce an undefined lattice.
    pub fn validate(&self) -> IsingResult<()> {
        if self.size == 0 {
            return Err(IsingError::InvalidSize(self.size));
        }
        if self.betas.is_empty() {
            return Err(IsingError::EmptyScan);
        }
        if let Some(&beta) = self.betas.iter().find(|b| !(b.is_finite() && **b > 0.0)) {
            return Err(IsingError::InvalidBeta(beta));
        }
        Ok(())
    }

    pub fn run_settings(&self) -> RunSettings {
        RunSettings {
            snapshot_every: if self.snapshot_path.is_some() { self.snapshot_every } else { 0 },
            measure_after:  self.measure_after,
        }
    }
}
