//! Per-triangle wind and per-point sphere collision helpers.

use crate::float::Float;
use crate::vec::Vec3;

/// Normal of the triangle `(p1, p2, p3)`: `(p2 - p1) × (p3 - p1)`.
///
/// Not normalized; its length is twice the triangle's area.
pub fn triangle_normal<F: Float>(p1: Vec3<F>, p2: Vec3<F>, p3: Vec3<F>) -> Vec3<F> {
    (p2 - p1).cross(p3 - p1)
}

/// Wind force a triangle with (unnormalized) `normal` receives from `direction`.
///
/// The force points along the normal and scales with the facet area and with
/// how squarely the facet faces the wind. A facet edge-on to the wind gets
/// nothing; a degenerate facet gets nothing.
pub fn wind_force<F: Float>(normal: Vec3<F>, direction: Vec3<F>) -> Vec3<F> {
    normal * normal.normalized().dot(direction)
}

/// Offset that moves `position` onto the surface of the sphere, or `None` if
/// it is already outside or on it.
///
/// A point exactly at the center has no outward direction and also gets
/// `None`.
pub fn sphere_push_out<F: Float>(position: Vec3<F>, center: Vec3<F>, radius: F) -> Option<Vec3<F>> {
    let v = position - center;
    let distance = v.length();
    if distance >= radius {
        return None;
    }
    let outward = v.normalized();
    if outward == Vec3::zero() {
        return None;
    }
    Some(outward * (radius - distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_length_is_twice_area() {
        let n = triangle_normal(
            Vec3::new(0.0f32, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
        );
        // Area 2, normal along +z.
        assert!((n.length() - 4.0).abs() < 1e-6);
        assert!(n.z > 0.0);
    }

    #[test]
    fn push_out_lands_on_surface() {
        let center = Vec3::new(1.0f64, 1.0, 1.0);
        let p = Vec3::new(1.5, 1.0, 1.0);
        let offset = sphere_push_out(p, center, 2.0).unwrap();
        assert!(((p + offset).distance(center) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn push_out_none_at_center() {
        let center = Vec3::new(1.0f32, 2.0, 3.0);
        assert!(sphere_push_out(center, center, 2.0).is_none());
    }

    #[test]
    fn push_out_none_on_surface() {
        let center = Vec3::new(0.0f32, 0.0, 0.0);
        assert!(sphere_push_out(Vec3::new(2.0, 0.0, 0.0), center, 2.0).is_none());
        assert!(sphere_push_out(Vec3::new(3.0, 0.0, 0.0), center, 2.0).is_none());
    }
}
