//! Verlet particles with position-based dynamics.

use crate::error::ClothError;
use crate::float::Float;
use crate::vec::Vec3;

/// A Verlet particle: position-based dynamics with implicit velocity.
///
/// Position only changes through [`Particle::integrate`] and
/// [`Particle::offset_position`], and both refuse to move a pinned particle.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pos: Vec3<F>,
    prev_pos: Vec3<F>,
    acceleration: Vec3<F>,
    mass: F,
    movable: bool,
}

impl<F: Float> Particle<F> {
    /// Movable particle of unit mass at rest at `pos`.
    pub fn new(pos: Vec3<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec3::zero(),
            mass: F::one(),
            movable: true,
        }
    }

    /// Movable particle at rest at `pos` with the given positive, finite mass.
    pub fn with_mass(pos: Vec3<F>, mass: F) -> Result<Self, ClothError> {
        if !mass.is_finite() || mass <= F::zero() {
            return Err(ClothError::InvalidMass);
        }
        Ok(Particle { mass, ..Particle::new(pos) })
    }

    /// Accumulate `force / mass` into the acceleration for the next step.
    pub fn add_force(&mut self, force: Vec3<F>) {
        self.acceleration += force / self.mass;
    }

    /// Advance one Verlet step with squared step `time_step_sq` and damping
    /// coefficient `damping`, then clear the accumulator.
    ///
    /// A pinned particle keeps its position but still drops its accumulated
    /// acceleration.
    pub fn integrate(&mut self, time_step_sq: F, damping: F) {
        if self.movable {
            let velocity = (self.pos - self.prev_pos) * (F::one() - damping);
            let new_pos = self.pos + velocity + self.acceleration * time_step_sq;
            self.prev_pos = self.pos;
            self.pos = new_pos;
        }
        self.reset_acceleration();
    }

    /// Move by `delta` unless pinned.
    pub fn offset_position(&mut self, delta: Vec3<F>) {
        if self.movable {
            self.pos += delta;
        }
    }

    /// Fix the particle in place for the rest of its life.
    pub fn pin(&mut self) {
        self.movable = false;
    }

    /// Drop any force accumulated since the last step.
    pub fn reset_acceleration(&mut self) {
        self.acceleration = Vec3::zero();
    }

    pub fn position(&self) -> Vec3<F> { self.pos }
    pub fn previous_position(&self) -> Vec3<F> { self.prev_pos }
    pub fn acceleration(&self) -> Vec3<F> { self.acceleration }
    pub fn mass(&self) -> F { self.mass }
    pub fn is_movable(&self) -> bool { self.movable }

    /// Displacement over the last step (velocity times step size).
    pub fn velocity_raw(&self) -> Vec3<F> {
        self.pos - self.prev_pos
    }
}
