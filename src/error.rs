//! Error types for cloth construction and configuration.

use core::fmt;

/// Errors reported while building or configuring a cloth.
///
/// Per-frame operations never fail; degenerate geometry is handled as a no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Grid must have at least one particle in each axis.
    InvalidGridDimensions { columns: usize, rows: usize },
    /// Mass must be positive and finite.
    InvalidMass,
    /// Damping must be finite and in [0, 1].
    InvalidDamping,
    /// Squared time step must be finite and non-negative.
    InvalidTimeStep,
    /// Grid coordinate is outside the particle grid.
    ParticleOutOfBounds { x: usize, y: usize, columns: usize, rows: usize },
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { columns, rows } => {
                write!(f, "grid must be at least 1x1 (got {}x{})", columns, rows)
            }
            ClothError::InvalidMass => write!(f, "mass must be positive and finite"),
            ClothError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            ClothError::InvalidTimeStep => {
                write!(f, "squared time step must be finite and non-negative")
            }
            ClothError::ParticleOutOfBounds { x, y, columns, rows } => write!(
                f,
                "particle ({}, {}) out of bounds (grid: {}x{})",
                x, y, columns, rows
            ),
        }
    }
}
