//! Distance constraints between two particles of a cloth grid.

use crate::float::Float;
use crate::particle::Particle;

/// Role of a constraint in the grid topology.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Horizontal or vertical neighbor at distance 1.
    Structural,
    /// Diagonal neighbor within one grid cell.
    Shear,
    /// Distance-2 neighbor (axis-aligned or diagonal).
    Bend,
}

/// Keeps two particles at the distance they had when the constraint was made.
///
/// Endpoints are indices into the owning cloth's particle storage. Neither
/// the endpoints nor the rest length can change after construction.
#[derive(Clone, Debug)]
pub struct Constraint<F: Float> {
    a: usize,
    b: usize,
    rest_length: F,
    kind: ConstraintKind,
}

impl<F: Float> Constraint<F> {
    /// Connect `particles[a]` and `particles[b]` at their current separation.
    ///
    /// Panics if either index is out of range for `particles`.
    pub fn new(a: usize, b: usize, particles: &[Particle<F>], kind: ConstraintKind) -> Self {
        let rest_length = particles[a].position().distance(particles[b].position());
        Constraint { a, b, rest_length, kind }
    }

    /// One relaxation step: move both endpoints half of the way toward the
    /// rest length.
    ///
    /// Pinned endpoints ignore their half of the correction, so a single call
    /// does not fully satisfy the constraint in that case. Coincident
    /// endpoints have no direction to push along and are left alone.
    ///
    /// Panics if either endpoint is out of range for `particles`.
    pub fn satisfy(&self, particles: &mut [Particle<F>]) {
        let delta = particles[self.b].position() - particles[self.a].position();
        let len = delta.length();
        if len == F::zero() {
            return;
        }
        let diff = (len - self.rest_length) / len;
        let correction = delta * (diff * F::half());
        particles[self.a].offset_position(correction);
        particles[self.b].offset_position(-correction);
    }

    pub fn endpoints(&self) -> (usize, usize) { (self.a, self.b) }
    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn kind(&self) -> ConstraintKind { self.kind }

    pub fn current_length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].position().distance(particles[self.b].position())
    }

    /// Signed stretch: positive when the pair is further apart than at rest.
    pub fn error(&self, particles: &[Particle<F>]) -> F {
        self.current_length(particles) - self.rest_length
    }
}
