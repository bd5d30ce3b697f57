//! Read-only triangle mesh view of a cloth, for renderers.
//!
//! Nothing here mutates the simulation; shading normals are computed on the
//! side from current particle positions.

use crate::cloth::Cloth;
use crate::float::Float;
use crate::force::triangle_normal;
use crate::vec::Vec3;
use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Triangle indices for a `columns x rows` grid, two per cell.
///
/// Same winding and order as the wind force: `(x+1,y) (x,y) (x,y+1)` then
/// `(x+1,y+1) (x+1,y) (x,y+1)`, columns in the outer loop.
pub fn triangles(columns: usize, rows: usize) -> AllocVec<[usize; 3]> {
    let idx = |x: usize, y: usize| y * columns + x;
    let mut tris = AllocVec::with_capacity(2 * columns.saturating_sub(1) * rows.saturating_sub(1));
    for x in 0..columns.saturating_sub(1) {
        for y in 0..rows.saturating_sub(1) {
            tris.push([idx(x + 1, y), idx(x, y), idx(x, y + 1)]);
            tris.push([idx(x + 1, y + 1), idx(x + 1, y), idx(x, y + 1)]);
        }
    }
    tris
}

/// Unnormalized normal of every triangle, in [`triangles`] order.
pub fn face_normals<F: Float>(cloth: &Cloth<F>) -> AllocVec<Vec3<F>> {
    let particles = cloth.particles();
    triangles(cloth.columns(), cloth.rows())
        .iter()
        .map(|&[a, b, c]| {
            triangle_normal(particles[a].position(), particles[b].position(), particles[c].position())
        })
        .collect()
}

/// Smooth per-particle normals: the normalized sum of the unit normals of
/// every adjacent triangle. A particle with no triangles gets a zero normal.
pub fn vertex_normals<F: Float>(cloth: &Cloth<F>) -> AllocVec<Vec3<F>> {
    let mut normals = vec![Vec3::zero(); cloth.particle_count()];
    let tris = triangles(cloth.columns(), cloth.rows());
    for (tri, face) in tris.iter().zip(face_normals(cloth)) {
        let unit = face.normalized();
        for &i in tri {
            normals[i] += unit;
        }
    }
    normals.into_iter().map(|n| n.normalized()).collect()
}
