//! The Maxwell speed density and its sampled velocity grid.
//!
//! A one-dimensional Maxwell–Boltzmann marginal at temperature `T` is used
//! as the weighting kernel for the estimators in [`crate::summation`]:
//!
//! ```text
//! pdf(v) = (1/√(T·π)) · exp(−v²/T)
//! ```
//!
//! The analytic mean of the absolute speed under this kernel, √(T/π), is
//! the known result every estimator is compared against.
//!
//! # Design Notes
//!
//! Sampled grids deliberately store `f32` values: the point of the crate is
//! to study single-precision error accumulation, so the dataset itself is
//! single precision while the grid coordinate is tracked in `f64` during
//! generation (matching the reference arithmetic exactly).

use std::f64::consts::PI;

/// Error type for invalid distribution parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    InvalidParameters(String),
}

impl std::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionError::InvalidParameters(msg) => {
                write!(f, "invalid distribution parameters: {msg}")
            }
        }
    }
}

impl std::error::Error for DistributionError {}

/// Maxwell speed distribution (1-D Maxwell–Boltzmann marginal) at
/// temperature `T`.
///
/// # Mathematical Definition
/// - PDF: f(v) = (1/√(T·π)) · exp(−v²/T)
/// - Mean of |v|: √(T/π)
/// - Variance of v: T/2
#[derive(Debug, Clone, PartialEq)]
pub struct MaxwellSpeed {
    temperature: f64,
}

impl MaxwellSpeed {
    /// Creates a Maxwell speed distribution at temperature `T`.
    ///
    /// # Errors
    /// Returns `Err` if `T` is not finite or not strictly positive: the
    /// density formula divides by √(T·π), so a non-positive `T` would
    /// silently poison every downstream mean with NaN.
    ///
    /// # Examples
    /// ```
    /// use maxwell_mean::maxwell::MaxwellSpeed;
    /// assert!(MaxwellSpeed::new(1.0).is_ok());
    /// assert!(MaxwellSpeed::new(-1.0).is_err());
    /// ```
    pub fn new(temperature: f64) -> Result<Self, DistributionError> {
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "MaxwellSpeed requires T > 0, got T={temperature}"
            )));
        }
        Ok(Self { temperature })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// PDF: f(v) = (1/√(T·π)) · exp(−v²/T).
    ///
    /// The square `v²` is computed in `f32` and only then widened, matching
    /// the reference arithmetic the estimators are calibrated against; the
    /// normalization and exponential are evaluated in `f64` and the result
    /// rounded back to `f32`.
    pub fn pdf(&self, v: f32) -> f32 {
        let norm = 1.0 / (self.temperature * PI).sqrt();
        (norm * (f64::from(-(v * v)) / self.temperature).exp()) as f32
    }

    /// Analytic mean of the absolute speed, √(T/π).
    ///
    /// # Examples
    /// ```
    /// use maxwell_mean::maxwell::MaxwellSpeed;
    /// let dist = MaxwellSpeed::new(1.0).unwrap();
    /// assert!((dist.mean_abs_speed() - 0.5641895835).abs() < 1e-9);
    /// ```
    pub fn mean_abs_speed(&self) -> f64 {
        (self.temperature / PI).sqrt()
    }

    /// Samples the density on a grid of `size` points with spacing `dv`,
    /// symmetric about zero.
    ///
    /// The grid coordinate starts at `−(size/2)·dv` and advances by `dv`,
    /// both tracked in `f64`; each point is rounded to `f32` before the
    /// density is evaluated, so the stored speeds, absolute speeds, and
    /// densities are exactly the values the single-precision estimators
    /// will consume.
    pub fn sample(&self, size: usize, dv: f32) -> SpeedGrid {
        let mut speeds = Vec::with_capacity(size);
        let mut abs_speeds = Vec::with_capacity(size);
        let mut densities = Vec::with_capacity(size);

        let step = f64::from(dv);
        let mut v = -(size as f64 / 2.0) * step;
        for _ in 0..size {
            let vf = v as f32;
            speeds.push(vf);
            abs_speeds.push(vf.abs());
            densities.push(self.pdf(vf));
            v += step;
        }

        SpeedGrid {
            speeds,
            abs_speeds,
            densities,
            dv,
        }
    }
}

/// A velocity grid with the Maxwell density evaluated at every point.
///
/// Immutable once built: the same three arrays are handed (read-only) to
/// every estimator so results stay comparable.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedGrid {
    speeds: Vec<f32>,
    abs_speeds: Vec<f32>,
    densities: Vec<f32>,
    dv: f32,
}

impl SpeedGrid {
    /// Signed velocity at each grid point.
    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }

    /// Absolute velocity at each grid point.
    pub fn abs_speeds(&self) -> &[f32] {
        &self.abs_speeds
    }

    /// Probability density at each grid point.
    pub fn densities(&self) -> &[f32] {
        &self.densities
    }

    /// Grid spacing.
    pub fn dv(&self) -> f32 {
        self.dv
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
