//! Simulation driver: a fixed number of sweeps with periodic snapshots.

use std::io::Write;

use log::{debug, trace};
use rand::Rng;

use crate::error::IsingResult;
use crate::lattice::Lattice;
use crate::metropolis::{self, AcceptanceTable, SweepInfo};
use crate::observables::{Observables, OnlineStats};
use crate::snapshot::SnapshotWriter;

/// Default snapshot cadence in sweeps.
pub const DEFAULT_SNAPSHOT_EVERY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    /// Export the lattice before the first sweep and after every sweep
    /// whose index is a multiple of this value. 0 disables snapshots.
    pub snapshot_every: usize,
    /// When set, observables are averaged over every sweep after this one
    /// instead of being read off the final configuration.
    pub measure_after: Option<usize>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            snapshot_every: DEFAULT_SNAPSHOT_EVERY,
            measure_after: None,
        }
    }
}

/// Outcome of one run at a single temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub beta: f64,
    pub energy: f64,
    pub magnetization: f64,
    pub abs_magnetization: f64,
    pub acceptance_rate: f64,
    /// Measurements averaged into the values above (1 for final-state).
    pub samples: u64,
    pub snapshots: usize,
}

pub struct Simulation {
    lattice: Lattice,
    table: AcceptanceTable,
    settings: RunSettings,
    sweeps_done: usize,
    stats: SweepInfo,
}

impl Simulation {
    pub fn new(lattice: Lattice, settings: RunSettings) -> Self {
        let table = AcceptanceTable::for_lattice(&lattice);
        Self {
            lattice,
            table,
            settings,
            sweeps_done: 0,
            stats: SweepInfo::default(),
        }
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn into_lattice(self) -> Lattice {
        self.lattice
    }

    pub fn sweeps_done(&self) -> usize {
        self.sweeps_done
    }

    /// Acceptance counters accumulated over all sweeps so far.
    pub fn stats(&self) -> SweepInfo {
        self.stats
    }

    fn is_snapshot_step(&self, step: usize) -> bool {
        self.settings.snapshot_every > 0 && step % self.settings.snapshot_every == 0
    }

    /// Run `steps` sweeps, exporting snapshots into `sink`.
    ///
    /// Sweep indices count from 1; the configuration at index 0 (before any
    /// sweep) is exported too, so a run writes `steps / every + 1` blocks.
    pub fn simulate<W: Write>(
        &mut self,
        steps: usize,
        rng: &mut impl Rng,
        sink: &mut SnapshotWriter<W>,
    ) -> IsingResult<RunSummary> {
        let mut snapshots = 0;
        let mut energy_stats = OnlineStats::default();
        let mut mag_stats = OnlineStats::default();
        let mut abs_mag_stats = OnlineStats::default();

        if self.is_snapshot_step(0) {
            debug!("Step 0: saving spin configuration");
            sink.write_lattice(&self.lattice)?;
            snapshots += 1;
        }

        for step in 1..=steps {
            let info = metropolis::sweep(&mut self.lattice, &self.table, rng);
            self.stats.merge(info);
            self.sweeps_done += 1;

            if self.is_snapshot_step(step) {
                debug!("Step {step}: saving spin configuration");
                sink.write_lattice(&self.lattice)?;
                snapshots += 1;
            }

            if matches!(self.settings.measure_after, Some(after) if step > after) {
                let obs = Observables::measure(&self.lattice);
                energy_stats.push(obs.energy);
                mag_stats.push(obs.magnetization);
                abs_mag_stats.push(obs.abs_magnetization());
            }
        }

        trace!(
            "beta {}: {} sweeps, acceptance rate {:.4}",
            self.lattice.beta(),
            steps,
            self.stats.acceptance_rate()
        );

        // Fall back to the final configuration when nothing was sampled.
        let summary = if energy_stats.count() > 0 {
            RunSummary {
                beta: self.lattice.beta(),
                energy: energy_stats.mean(),
                magnetization: mag_stats.mean(),
                abs_magnetization: abs_mag_stats.mean(),
                acceptance_rate: self.stats.acceptance_rate(),
                samples: energy_stats.count(),
                snapshots,
            }
        } else {
            let obs = Observables::measure(&self.lattice);
            RunSummary {
                beta: self.lattice.beta(),
                energy: obs.energy,
                magnetization: obs.magnetization,
                abs_magnetization: obs.abs_magnetization(),
                acceptance_rate: self.stats.acceptance_rate(),
                samples: 1,
                snapshots,
            }
        };
        Ok(summary)
    }
}
