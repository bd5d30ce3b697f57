//! Configuration types for the cloth solver.

use crate::error::ClothError;
use crate::float::Float;
use alloc::vec::Vec as AllocVec;

/// Which particles are fixed when the cloth is built.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinPattern<F: Float> {
    /// Nothing pinned; the whole cloth falls freely.
    None,
    /// Every particle of row 0.
    TopRow,
    /// The `count` leftmost and `count` rightmost particles of row 0.
    ///
    /// Each is nudged `inset` toward the horizontal center before pinning,
    /// which makes the cloth hang with a slight sag between the corners.
    TopCorners { count: usize, inset: F },
    /// Explicit `(x, y)` grid coordinates.
    Points(AllocVec<(usize, usize)>),
}

impl<F: Float> Default for PinPattern<F> {
    fn default() -> Self {
        PinPattern::TopCorners { count: 3, inset: F::half() }
    }
}

/// Tuning for a single cloth instance.
///
/// # Builder Pattern
/// ```
/// use drape::config::{ClothConfig, PinPattern};
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_iterations(8)
///     .with_damping(0.02)
///     .with_time_step(1.0 / 60.0)
///     .with_pin_pattern(PinPattern::TopRow);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClothConfig<F: Float> {
    /// Constraint relaxation passes per `advance`. Default: 15.
    pub iterations: usize,
    /// Fraction of implicit velocity removed each step, in [0, 1]. Default: 0.01.
    pub damping: F,
    /// Squared time step applied to accumulated acceleration. Default: 0.25.
    pub time_step_sq: F,
    /// Mass of every particle. Default: 1.
    pub particle_mass: F,
    /// Particles pinned at construction. Default: three at each top corner.
    pub pin_pattern: PinPattern<F>,
}

impl<F: Float> ClothConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        ClothConfig {
            iterations: 15,
            damping: F::from_f32(0.01),
            time_step_sq: F::from_f32(0.5 * 0.5),
            particle_mass: F::one(),
            pin_pattern: PinPattern::default(),
        }
    }

    /// Set the number of relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the damping coefficient.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the step size; stored squared.
    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step_sq = time_step * time_step;
        self
    }

    /// Set the squared step size directly.
    pub fn with_time_step_sq(mut self, time_step_sq: F) -> Self {
        self.time_step_sq = time_step_sq;
        self
    }

    pub fn with_particle_mass(mut self, mass: F) -> Self {
        self.particle_mass = mass;
        self
    }

    pub fn with_pin_pattern(mut self, pattern: PinPattern<F>) -> Self {
        self.pin_pattern = pattern;
        self
    }

    /// Reject values the integrator cannot use. Nothing is clamped.
    pub fn validate(&self) -> Result<(), ClothError> {
        if !self.particle_mass.is_finite() || self.particle_mass <= F::zero() {
            return Err(ClothError::InvalidMass);
        }
        if !self.damping.is_finite() || self.damping < F::zero() || self.damping > F::one() {
            return Err(ClothError::InvalidDamping);
        }
        if !self.time_step_sq.is_finite() || self.time_step_sq < F::zero() {
            return Err(ClothError::InvalidTimeStep);
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
