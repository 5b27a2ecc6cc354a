//! Inverse-temperature grids for a scan.

use crate::error::{IsingError, IsingResult};

/// Relative tolerance when deciding whether `max` lies on the grid.
const GRID_TOL: f64 = 1e-9;

/// Upper bound on the number of grid points in one range.
pub const MAX_POINTS: usize = 1_000_000;

/// Inclusive range `min..=max` in steps of `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl BetaRange {
    pub fn new(min: f64, max: f64, step: f64) -> IsingResult<Self> {
        let range = Self { min, max, step };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> IsingResult<()> {
        let err = |reason| IsingError::InvalidBetaRange {
            min: self.min,
            max: self.max,
            step: self.step,
            reason,
        };
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(err("bounds and step must be finite"));
        }
        if self.min <= 0.0 {
            return Err(err("min must be positive"));
        }
        if self.step <= 0.0 {
            return Err(err("step must be positive"));
        }
        if self.max < self.min {
            return Err(err("max must not be below min"));
        }
        if self.point_count().is_none() {
            return Err(err("too many grid points"));
        }
        Ok(())
    }

    /// Number of grid points. Computed from an integer step count, so a
    /// `max` that sits on the grid is included exactly once.
    /// Zero for a range that fails `validate`.
    pub fn len(&self) -> usize {
        self.point_count().unwrap_or(0)
    }

    fn point_count(&self) -> Option<usize> {
        let steps = (self.max - self.min) / self.step;
        let steps = (steps + GRID_TOL * steps.max(1.0)).floor();
        if !(steps.is_finite() && steps >= 0.0 && steps < MAX_POINTS as f64) {
            return None;
        }
        (steps as usize).checked_add(1)
    }

    /// The grid values `min + i·step`, never accumulated.
    pub fn values(&self) -> Vec<f64> {
        (0..self.len())
            .map(|i| clean(self.min + i as f64 * self.step, self.step))
            .collect()
    }
}

/// Strip representation noise such as 0.30000000000000004.
///
/// Rounds to 12 significant digits of `x`, but never coarser than a
/// millionth of `step`, so neighbouring grid points stay distinct.
fn clean(x: f64, step: f64) -> f64 {
    let by_value = 10f64.powi(11 - x.abs().log10().floor() as i32);
    let by_step = 10f64.powi(6 - step.log10().floor() as i32);
    let scale = by_value.max(by_step);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / scale
}
