//! Temperature scan: one fresh lattice per beta, shared snapshot artifact,
//! one CSV row per beta.

use std::io::Write;

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, log_enabled, Level};
use rayon::prelude::*;

use crate::config::ScanConfig;
use crate::error::IsingResult;
use crate::lattice::Lattice;
use crate::results::{ResultRecord, ResultWriter};
use crate::simulation::{RunSummary, Simulation};
use crate::snapshot::SnapshotWriter;
use crate::utils::rng::{entropy_seed, point_rng};

/// Run a single temperature point on its own RNG stream.
pub fn run_point<W: Write>(
    cfg: &ScanConfig,
    point: usize,
    beta: f64,
    master_seed: u64,
    sink: &mut SnapshotWriter<W>,
) -> IsingResult<RunSummary> {
    let mut rng = point_rng(master_seed, point);
    let lattice = Lattice::random(cfg.size, beta, &mut rng)?;
    let mut sim = Simulation::new(lattice, cfg.run_settings());
    sim.simulate(cfg.sweeps, &mut rng, sink)
}

fn progress_bar(len: usize) -> ProgressBar {
    // Per-snapshot debug lines would fight with the bar.
    if log_enabled!(Level::Debug) {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template(" {bar:40.cyan/blue} {pos}/{len} β [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}

fn report(bar: &ProgressBar, summary: &RunSummary) {
    bar.suspend(|| {
        info!(
            "Beta: {} | Final Energy: {} | Final Magnetization: {}",
            summary.beta, summary.energy, summary.abs_magnetization
        )
    });
}

/// Run the whole scan described by `cfg`.
///
/// The snapshot file and the CSV are created (truncated) once, before the
/// first temperature point; every point then appends to them in beta order.
pub fn run_scan(cfg: &ScanConfig) -> IsingResult<Vec<ResultRecord>> {
    cfg.validate()?;

    let master_seed = cfg.seed.unwrap_or_else(entropy_seed);
    info!(
        "Scanning {} beta values on a {}x{} lattice, {} sweeps each (seed {master_seed})",
        cfg.betas.len(),
        cfg.size,
        cfg.size,
        cfg.sweeps
    );

    let mut snapshots = match &cfg.snapshot_path {
        Some(path) => Some(SnapshotWriter::create(path)?),
        None => None,
    };
    let mut results = ResultWriter::create(&cfg.results_path)?;
    let bar = progress_bar(cfg.betas.len());
    let mut records = Vec::with_capacity(cfg.betas.len());

    if cfg.parallel {
        // Each point renders its snapshots into memory; merge in beta order.
        // Peak memory is the sum of all rendered buffers, see `ScanConfig::parallel`.
        let runs = cfg
            .betas
            .par_iter()
            .enumerate()
            .map(|(point, &beta)| -> IsingResult<_> {
                let mut buf = SnapshotWriter::buffer();
                let summary = run_point(cfg, point, beta, master_seed, &mut buf)?;
                bar.inc(1);
                Ok((summary, buf))
            })
            .collect::<IsingResult<Vec<_>>>()?;

        for (summary, buf) in runs {
            if let Some(out) = snapshots.as_mut() {
                out.append_rendered(buf)?;
            }
            report(&bar, &summary);
            let record = ResultRecord::from(&summary);
            results.write(&record)?;
            records.push(record);
        }
    } else {
        for (point, &beta) in cfg.betas.iter().enumerate() {
            let summary = match snapshots.as_mut() {
                Some(out) => run_point(cfg, point, beta, master_seed, out)?,
                None => run_point(cfg, point, beta, master_seed, &mut SnapshotWriter::sink())?,
            };
            report(&bar, &summary);
            let record = ResultRecord::from(&summary);
            results.write(&record)?;
            records.push(record);
            bar.inc(1);
        }
    }
    bar.finish_and_clear();

    if let Some(mut out) = snapshots {
        out.flush()?;
        info!("Saved {} spin configurations to '{}'", out.blocks(), out.label().display());
    }
    results.finish()?;
    info!("Simulation results saved to '{}'", cfg.results_path.display());

    Ok(records)
}
