//! Rectangular cloth: a particle grid held together by distance constraints.

use crate::config::{ClothConfig, PinPattern};
use crate::constraint::{Constraint, ConstraintKind};
use crate::error::ClothError;
use crate::float::Float;
use crate::force::{sphere_push_out, triangle_normal, wind_force};
use crate::observer::{FrameObserver, NoOpFrameObserver};
use crate::particle::Particle;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A cloth mesh built from a grid of Verlet particles.
///
/// Particle `(x, y)` lives at index `y * columns + x`. The grid never changes
/// size, so constraint indices stay valid for the cloth's lifetime.
///
/// A frame is driven from outside in this order:
/// 1. [`Cloth::add_force`] / [`Cloth::wind_force`], any number of times
/// 2. [`Cloth::advance`], exactly once
/// 3. [`Cloth::resolve_sphere_collision`], optionally
pub struct Cloth<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<Constraint<F>>,
    columns: usize,
    rows: usize,
    config: ClothConfig<F>,
}

impl<F: Float> Cloth<F> {
    /// Build a cloth with default tuning.
    pub fn new(width: F, height: F, columns: usize, rows: usize) -> Result<Self, ClothError> {
        Self::with_config(width, height, columns, rows, ClothConfig::default())
    }

    /// Build a `columns x rows` particle grid spanning `width x height`.
    ///
    /// Particles are laid out in the z = 0 plane, growing along +x and -y from
    /// the origin, with spacing `width / columns` and `height / rows`.
    ///
    /// Creates 3 types of constraints, all at their initial distance:
    /// - Structural: right and down neighbors
    /// - Shear: both diagonals of each cell
    /// - Bend: the distance-2 analogues of the above, in a second pass
    ///
    /// The pin pattern from `config` is applied last.
    pub fn with_config(
        width: F,
        height: F,
        columns: usize,
        rows: usize,
        config: ClothConfig<F>,
    ) -> Result<Self, ClothError> {
        if columns < 1 || rows < 1 {
            return Err(ClothError::InvalidGridDimensions { columns, rows });
        }
        config.validate()?;

        let mut particles = AllocVec::with_capacity(columns * rows);
        for y in 0..rows {
            for x in 0..columns {
                let pos = Vec3::new(
                    width * (F::from_usize(x) / F::from_usize(columns)),
                    -height * (F::from_usize(y) / F::from_usize(rows)),
                    F::zero(),
                );
                particles.push(Particle::with_mass(pos, config.particle_mass)?);
            }
        }

        let constraints = build_constraints(&particles, columns, rows);

        let mut cloth = Cloth { particles, constraints, columns, rows, config };
        cloth.apply_pin_pattern()?;
        Ok(cloth)
    }

    fn apply_pin_pattern(&mut self) -> Result<(), ClothError> {
        match self.config.pin_pattern.clone() {
            PinPattern::None => {}
            PinPattern::TopRow => {
                for x in 0..self.columns {
                    self.pin(x, 0)?;
                }
            }
            PinPattern::TopCorners { count, inset } => {
                let count = count.min(self.columns);
                let nudge = Vec3::new(inset, F::zero(), F::zero());
                // Nudge everything first so overlapping corners on narrow
                // grids cancel out instead of depending on pin order.
                for i in 0..count {
                    let left = self.index(i, 0);
                    let right = self.index(self.columns - 1 - i, 0);
                    self.particles[left].offset_position(nudge);
                    self.particles[right].offset_position(-nudge);
                }
                for i in 0..count {
                    self.pin(i, 0)?;
                    self.pin(self.columns - 1 - i, 0)?;
                }
            }
            PinPattern::Points(points) => {
                for (x, y) in points {
                    self.pin(x, y)?;
                }
            }
        }
        Ok(())
    }

    /// Row-major storage index of `(x, y)`. Not bounds-checked.
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, ClothError> {
        if x < self.columns && y < self.rows {
            Ok(self.index(x, y))
        } else {
            Err(ClothError::ParticleOutOfBounds { x, y, columns: self.columns, rows: self.rows })
        }
    }

    /// Permanently fix particle `(x, y)` where it currently is.
    pub fn pin(&mut self, x: usize, y: usize) -> Result<(), ClothError> {
        let idx = self.checked_index(x, y)?;
        self.particles[idx].pin();
        Ok(())
    }

    /// Add `force` to every particle (e.g. gravity).
    pub fn add_force(&mut self, force: Vec3<F>) {
        for p in self.particles.iter_mut() {
            p.add_force(force);
        }
    }

    /// Add wind blowing along `direction` to every triangle of the grid.
    ///
    /// Each cell is split into triangles `(x+1,y) (x,y) (x,y+1)` and
    /// `(x+1,y+1) (x+1,y) (x,y+1)`. Every triangle pushes its full force onto
    /// each of its three particles; contributions are summed, not averaged,
    /// so interior particles shared by six triangles catch more wind than
    /// edge particles.
    pub fn wind_force(&mut self, direction: Vec3<F>) {
        for x in 0..self.columns - 1 {
            for y in 0..self.rows - 1 {
                let tl = self.index(x, y);
                let tr = self.index(x + 1, y);
                let bl = self.index(x, y + 1);
                let br = self.index(x + 1, y + 1);
                self.add_wind_for_triangle(tr, tl, bl, direction);
                self.add_wind_for_triangle(br, tr, bl, direction);
            }
        }
    }

    fn add_wind_for_triangle(&mut self, a: usize, b: usize, c: usize, direction: Vec3<F>) {
        let normal = triangle_normal(
            self.particles[a].position(),
            self.particles[b].position(),
            self.particles[c].position(),
        );
        let force = wind_force(normal, direction);
        self.particles[a].add_force(force);
        self.particles[b].add_force(force);
        self.particles[c].add_force(force);
    }

    /// Advance one fixed time step.
    pub fn advance(&mut self) {
        self.advance_observed(&mut NoOpFrameObserver);
    }

    /// Advance one fixed time step, reporting progress to `observer`.
    ///
    /// Runs `config.iterations` full passes over the constraints in build
    /// order, then integrates every particle once.
    pub fn advance_observed<O: FrameObserver>(&mut self, observer: &mut O) {
        for i in 0..self.config.iterations {
            for c in self.constraints.iter() {
                c.satisfy(&mut self.particles);
            }
            observer.on_constraint_iteration(i);
        }

        let time_step_sq = self.config.time_step_sq;
        let damping = self.config.damping;
        for p in self.particles.iter_mut() {
            p.integrate(time_step_sq, damping);
        }
        observer.on_integrate();

        observer.on_frame_complete();
    }

    /// Push every particle inside the sphere out onto its surface.
    ///
    /// Only particles are tested, so a sphere smaller than the grid spacing
    /// can slip between them. Returns how many particles were moved.
    pub fn resolve_sphere_collision(&mut self, center: Vec3<F>, radius: F) -> usize {
        self.resolve_sphere_collision_observed(center, radius, &mut NoOpFrameObserver)
    }

    /// Same as [`Cloth::resolve_sphere_collision`], reporting the number of
    /// moved particles to `observer`.
    pub fn resolve_sphere_collision_observed<O: FrameObserver>(
        &mut self,
        center: Vec3<F>,
        radius: F,
        observer: &mut O,
    ) -> usize {
        let mut corrected = 0;
        for p in self.particles.iter_mut() {
            if !p.is_movable() {
                continue;
            }
            if let Some(offset) = sphere_push_out(p.position(), center, radius) {
                p.offset_position(offset);
                corrected += 1;
            }
        }
        observer.on_collision(corrected);
        corrected
    }

    /// Particle at grid coordinate `(x, y)`, if inside the grid.
    pub fn particle(&self, x: usize, y: usize) -> Option<&Particle<F>> {
        if x < self.columns && y < self.rows {
            self.particles.get(self.index(x, y))
        } else {
            None
        }
    }

    pub fn position_at(&self, x: usize, y: usize) -> Option<Vec3<F>> {
        self.particle(x, y).map(|p| p.position())
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.particles.iter().map(|p| p.position()).collect()
    }

    /// All particles in row-major order.
    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    /// All constraints in relaxation order.
    pub fn constraints(&self) -> &[Constraint<F>] { &self.constraints }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn columns(&self) -> usize { self.columns }
    pub fn rows(&self) -> usize { self.rows }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }

    /// Number of constraints of one topological role.
    pub fn constraint_count_of(&self, kind: ConstraintKind) -> usize {
        self.constraints.iter().filter(|c| c.kind() == kind).count()
    }
}

/// Constraint list in relaxation order: a structural/shear pass over every
/// cell, then a bend pass. Both scan columns in the outer loop.
fn build_constraints<F: Float>(
    particles: &[Particle<F>],
    columns: usize,
    rows: usize,
) -> AllocVec<Constraint<F>> {
    let idx = |x: usize, y: usize| y * columns + x;
    let mut constraints = AllocVec::new();

    for x in 0..columns {
        for y in 0..rows {
            let right = x + 1 < columns;
            let down = y + 1 < rows;
            if right {
                constraints.push(Constraint::new(idx(x, y), idx(x + 1, y), particles, ConstraintKind::Structural));
            }
            if down {
                constraints.push(Constraint::new(idx(x, y), idx(x, y + 1), particles, ConstraintKind::Structural));
            }
            if right && down {
                constraints.push(Constraint::new(idx(x, y), idx(x + 1, y + 1), particles, ConstraintKind::Shear));
                constraints.push(Constraint::new(idx(x + 1, y), idx(x, y + 1), particles, ConstraintKind::Shear));
            }
        }
    }

    for x in 0..columns {
        for y in 0..rows {
            let right = x + 2 < columns;
            let down = y + 2 < rows;
            if right {
                constraints.push(Constraint::new(idx(x, y), idx(x + 2, y), particles, ConstraintKind::Bend));
            }
            if down {
                constraints.push(Constraint::new(idx(x, y), idx(x, y + 2), particles, ConstraintKind::Bend));
            }
            if right && down {
                constraints.push(Constraint::new(idx(x, y), idx(x + 2, y + 2), particles, ConstraintKind::Bend));
                constraints.push(Constraint::new(idx(x + 2, y), idx(x, y + 2), particles, ConstraintKind::Bend));
            }
        }
    }

    constraints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_config() -> ClothConfig<f32> {
        ClothConfig::new().with_pin_pattern(PinPattern::None)
    }

    #[test]
    fn correct_particle_count() {
        let cloth = Cloth::with_config(4.0f32, 3.0, 4, 3, free_config()).unwrap();
        assert_eq!(cloth.particle_count(), 12); // 4 * 3
    }

    #[test]
    fn constraint_count_4x3() {
        let cloth = Cloth::with_config(4.0f32, 3.0, 4, 3, free_config()).unwrap();
        // Right: 3 * 3 = 9, down: 4 * 2 = 8
        assert_eq!(cloth.constraint_count_of(ConstraintKind::Structural), 17);
        // 2 per cell: 3 * 2 * 2 = 12
        assert_eq!(cloth.constraint_count_of(ConstraintKind::Shear), 12);
        // Right: 2 * 3 = 6, down: 4 * 1 = 4, diagonals: 2 * 1 * 2 = 4
        assert_eq!(cloth.constraint_count_of(ConstraintKind::Bend), 14);
        assert_eq!(cloth.constraint_count(), 43);
    }

    #[test]
    fn first_cell_constraint_order() {
        let cloth = Cloth::with_config(2.0f32, 2.0, 2, 2, free_config()).unwrap();
        let ends: AllocVec<(usize, usize)> = cloth.constraints().iter().map(|c| c.endpoints()).collect();
        // Cell (0,0): right, down, two diagonals; then column 0 row 1: right;
        // then column 1 row 0: down.
        assert_eq!(ends, [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3), (1, 3)]);
    }

    #[test]
    fn grid_positions_follow_spacing() {
        let cloth = Cloth::with_config(10.0f32, 8.0, 5, 4, free_config()).unwrap();
        let p = cloth.position_at(2, 3).unwrap();
        assert!((p.x - 4.0).abs() < 1e-6);
        assert!((p.y + 6.0).abs() < 1e-6);
        assert_eq!(p.z, 0.0);
        assert!(cloth.position_at(5, 0).is_none());
    }

    #[test]
    fn out_of_bounds_pin_is_an_error() {
        let mut cloth = Cloth::with_config(1.0f32, 1.0, 2, 2, free_config()).unwrap();
        assert_eq!(
            cloth.pin(2, 0),
            Err(ClothError::ParticleOutOfBounds { x: 2, y: 0, columns: 2, rows: 2 })
        );
    }
}
