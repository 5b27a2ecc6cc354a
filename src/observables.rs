//! Energy and magnetization per site.

use crate::lattice::Lattice;

/// Energy per site, E/N² with J = 1 and no external field.
///
/// Each bond is counted once, through the site on its left / upper end.
pub fn energy(lattice: &Lattice) -> f64 {
    let n = lattice.size();
    let mut sum: i64 = 0;
    for row in 0..n {
        let down = (row + 1) % n;
        for col in 0..n {
            let right = (col + 1) % n;
            let s = lattice.spin(row, col) as i64;
            sum -= s * (lattice.spin(row, right) as i64 + lattice.spin(down, col) as i64);
        }
    }
    sum as f64 / lattice.sites() as f64
}

/// Magnetization per site, M/N², in [-1, 1].
pub fn magnetization(lattice: &Lattice) -> f64 {
    let sum: i64 = lattice.spins().iter().map(|&s| s as i64).sum();
    sum as f64 / lattice.sites() as f64
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Observables {
    pub energy: f64,
    pub magnetization: f64,
}

impl Observables {
    /// Measure both observables on the current configuration.
    pub fn measure(lattice: &Lattice) -> Self {
        Self {
            energy: energy(lattice),
            magnetization: magnetization(lattice),
        }
    }

    /// Order parameter |m|; the sign of m is arbitrary by symmetry.
    pub fn abs_magnetization(&self) -> f64 {
        self.magnetization.abs()
    }
}

/// Welford online mean / variance.
#[derive(Debug, Default, Clone)]
pub struct OnlineStats {
    n:    u64,
    mean: f64,
    m2:   f64,
}

impl OnlineStats {
    pub fn push(&mut self, x: f64) {
        self.n += 1;
        let delta  = x - self.mean;
        self.mean += delta / self.n as f64;
        let delta2 = x - self.mean;
        self.m2   += delta * delta2;
    }
    pub fn count(&self) -> u64 { self.n }
    pub fn mean(&self) -> f64 { self.mean }
    pub fn var(&self)  -> f64 { if self.n > 1 { self.m2 / (self.n - 1) as f64 } else { 0.0 } }
    pub fn std(&self)  -> f64 { self.var().sqrt() }
}
