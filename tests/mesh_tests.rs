use drape::mesh::{face_normals, triangles, vertex_normals};
use drape::{Cloth, ClothConfig, PinPattern, Vec3};

#[test]
fn flat_cloth_normals_face_plus_z() {
    let cloth: Cloth<f32> = Cloth::with_config(4.0, 4.0, 5, 5, ClothConfig::new().with_pin_pattern(PinPattern::None)).unwrap();
    for n in vertex_normals(&cloth) {
        assert!((n - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6, "normal {:?}", n);
    }
    assert_eq!(face_normals(&cloth).len(), triangles(5, 5).len());
}

#[test]
fn face_normal_length_tracks_cell_area() {
    let cloth: Cloth<f64> = Cloth::with_config(4.0, 2.0, 2, 2, ClothConfig::new().with_pin_pattern(PinPattern::None)).unwrap();
    // Cell is 2 x 1, each triangle has area 1.
    for n in face_normals(&cloth) {
        assert!((n.length() - 2.0).abs() < 1e-12);
    }
}

#[test]
fn mesh_queries_do_not_touch_state() {
    let mut cloth: Cloth<f32> = Cloth::new(14.0, 10.0, 12, 10).unwrap();
    for _ in 0..5 {
        cloth.add_force(Vec3::new(0.0, -0.05, 0.0));
        cloth.wind_force(Vec3::new(0.1, 0.0, 0.2));
        cloth.advance();
    }
    let before = cloth.positions();
    let _ = vertex_normals(&cloth);
    let _ = face_normals(&cloth);
    assert_eq!(cloth.positions(), before);
}

#[test]
fn single_column_has_no_triangles() {
    let cloth: Cloth<f32> = Cloth::new(1.0, 5.0, 1, 5).unwrap();
    assert!(face_normals(&cloth).is_empty());
    assert!(vertex_normals(&cloth).iter().all(|n| *n == Vec3::zero()));
}
