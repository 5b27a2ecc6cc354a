//! Single-spin-flip Metropolis updates.
//!
//! A sweep is N² trials, each at a uniformly random site, so a site may be
//! visited several times or not at all within one sweep.

use rand::Rng;

use crate::lattice::Lattice;

/// Cached Boltzmann factors exp(-ΔE·β).
///
/// On a square lattice the only positive energy changes of a single flip
/// are 4 and 8, so those two factors cover every trial.
#[derive(Debug, Clone, Copy)]
pub struct AcceptanceTable {
    beta: f64,
    w4: f64,
    w8: f64,
}

impl AcceptanceTable {
    pub fn new(beta: f64) -> Self {
        Self {
            beta,
            w4: (-4.0 * beta).exp(),
            w8: (-8.0 * beta).exp(),
        }
    }

    pub fn for_lattice(lattice: &Lattice) -> Self {
        Self::new(lattice.beta())
    }

    /// exp(-ΔE·β) for the given energy change.
    #[inline(always)]
    pub fn weight(&self, delta_e: i32) -> f64 {
        match delta_e {
            4 => self.w4,
            8 => self.w8,
            _ => (-(delta_e as f64) * self.beta).exp(),
        }
    }

    /// Metropolis criterion: always accept a downhill move, otherwise accept
    /// iff the Boltzmann factor exceeds `draw` ∈ [0, 1).
    #[inline(always)]
    pub fn accepts(&self, delta_e: i32, draw: f64) -> bool {
        self.accepts_with(delta_e, || draw)
    }

    /// As `accepts`, but the draw is only taken for uphill or flat moves.
    #[inline(always)]
    pub fn accepts_with(&self, delta_e: i32, draw: impl FnOnce() -> f64) -> bool {
        delta_e < 0 || self.weight(delta_e) > draw()
    }
}

/// Result of one trial flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    pub accepted: bool,
    pub delta_e:  i32,
}

/// Returned by `sweep`, lets the driver keep acceptance statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepInfo {
    pub attempted: usize,
    pub accepted:  usize,
}

impl SweepInfo {
    pub fn acceptance_rate(&self) -> f64 {
        if self.attempted == 0 { 0.0 } else { self.accepted as f64 / self.attempted as f64 }
    }

    pub fn merge(&mut self, other: SweepInfo) {
        self.attempted += other.attempted;
        self.accepted  += other.accepted;
    }
}

/// Energy change from flipping the spin at `(row, col)`: 2·s·Σ neighbours.
#[inline(always)]
pub fn delta_energy(lattice: &Lattice, row: usize, col: usize) -> i32 {
    2 * lattice.spin(row, col) as i32 * lattice.neighbour_sum(row, col)
}

/// Trial flip at a chosen site with a given uniform draw in [0, 1).
pub fn trial_at(
    lattice: &mut Lattice,
    table: &AcceptanceTable,
    row: usize,
    col: usize,
    draw: f64,
) -> TrialOutcome {
    attempt(lattice, table, row, col, || draw)
}

fn attempt(
    lattice: &mut Lattice,
    table: &AcceptanceTable,
    row: usize,
    col: usize,
    draw: impl FnOnce() -> f64,
) -> TrialOutcome {
    let delta_e = delta_energy(lattice, row, col);
    let accepted = table.accepts_with(delta_e, draw);
    if accepted {
        lattice.flip(row, col);
    }
    TrialOutcome { accepted, delta_e }
}

/// Trial flip at a uniformly random site.
///
/// The uniform draw is only taken for uphill or flat moves.
pub fn trial(lattice: &mut Lattice, table: &AcceptanceTable, rng: &mut impl Rng) -> TrialOutcome {
    let n = lattice.size();
    let row = rng.gen_range(0..n);
    let col = rng.gen_range(0..n);
    attempt(lattice, table, row, col, || rng.gen::<f64>())
}

/// One Monte Carlo sweep: N² random-site trials.
pub fn sweep(lattice: &mut Lattice, table: &AcceptanceTable, rng: &mut impl Rng) -> SweepInfo {
    let attempted = lattice.sites();
    let mut accepted = 0;
    for _ in 0..attempted {
        if trial(lattice, table, rng).accepted {
            accepted += 1;
        }
    }
    SweepInfo { attempted, accepted }
}
