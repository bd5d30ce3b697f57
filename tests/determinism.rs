use drape::{Cloth, Vec3};

fn simulate() -> Vec<Vec3<f32>> {
    let mut cloth: Cloth<f32> = Cloth::new(14.0, 10.0, 24, 18).unwrap();
    for frame in 0..60 {
        cloth.add_force(Vec3::new(0.0, -0.05, 0.0));
        cloth.wind_force(Vec3::new(0.125, 0.0, 0.05));
        cloth.advance();
        let z = (frame as f32 / 50.0).cos() * 7.0;
        cloth.resolve_sphere_collision(Vec3::new(7.0, -5.0, z), 2.0);
    }
    cloth.positions()
}

#[test]
fn cloth_deterministic() {
    let results: Vec<_> = (0..3).map(|_| simulate()).collect();
    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
            assert_eq!(a.z.to_bits(), b.z.to_bits());
        }
    }
}
