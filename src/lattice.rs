//! Square Ising lattice with periodic boundaries.

use rand::Rng;

use crate::error::{IsingError, IsingResult};

/// Spin value on a site, always +1 or -1.
pub type Spin = i8;

/// An N×N spin lattice at a fixed inverse temperature.
///
/// Spins live in one row-major buffer: site `(row, col)` is at
/// `row * size + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    size: usize,
    beta: f64,
    spins: Vec<Spin>,
}

fn check_params(size: usize, beta: f64) -> IsingResult<()> {
    if size == 0 {
        return Err(IsingError::InvalidSize(size));
    }
    if !(beta.is_finite() && beta > 0.0) {
        return Err(IsingError::InvalidBeta(beta));
    }
    Ok(())
}

impl Lattice {
    /// Hot start: every site is +1 or -1 with probability ½, drawn from the
    /// caller-supplied RNG.
    pub fn random(size: usize, beta: f64, rng: &mut impl Rng) -> IsingResult<Self> {
        check_params(size, beta)?;
        let spins = (0..size * size)
            .map(|_| if rng.gen_bool(0.5) { 1 } else { -1 })
            .collect();
        Ok(Self { size, beta, spins })
    }

    /// Cold start: every site set to `spin`.
    pub fn uniform(size: usize, beta: f64, spin: Spin) -> IsingResult<Self> {
        check_params(size, beta)?;
        if spin != 1 && spin != -1 {
            return Err(IsingError::InvalidSpin { index: 0, value: spin });
        }
        Ok(Self { size, beta, spins: vec![spin; size * size] })
    }

    /// Build a lattice from an explicit row-major spin buffer.
    pub fn from_spins(size: usize, beta: f64, spins: Vec<Spin>) -> IsingResult<Self> {
        check_params(size, beta)?;
        if spins.len() != size * size {
            return Err(IsingError::ShapeMismatch {
                expected: size * size,
                actual: spins.len(),
            });
        }
        if let Some((index, &value)) = spins.iter().enumerate().find(|&(_, &s)| s != 1 && s != -1) {
            return Err(IsingError::InvalidSpin { index, value });
        }
        Ok(Self { size, beta, spins })
    }

    /// Linear size N.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of sites, N².
    #[inline(always)]
    pub fn sites(&self) -> usize {
        self.spins.len()
    }

    #[inline(always)]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline(always)]
    pub fn spin(&self, row: usize, col: usize) -> Spin {
        self.spins[self.offset(row, col)]
    }

    /// Flat row-major view of all spins.
    pub fn spins(&self) -> &[Spin] {
        &self.spins
    }

    /// Iterate over the lattice one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Spin]> + '_ {
        self.spins.chunks_exact(self.size)
    }

    /// Negate the spin at `(row, col)`.
    #[inline(always)]
    pub fn flip(&mut self, row: usize, col: usize) {
        let idx = self.offset(row, col);
        self.spins[idx] = -self.spins[idx];
    }

    /// Sum of the four nearest neighbours (up, down, left, right) with
    /// periodic wrap. For N = 1 every neighbour is the site itself.
    #[inline(always)]
    pub fn neighbour_sum(&self, row: usize, col: usize) -> i32 {
        let n = self.size;
        let up = (row + n - 1) % n;
        let down = (row + 1) % n;
        let left = (col + n - 1) % n;
        let right = (col + 1) % n;
        self.spin(up, col) as i32
            + self.spin(down, col) as i32
            + self.spin(row, left) as i32
            + self.spin(row, right) as i32
    }
}
