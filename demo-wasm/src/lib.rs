use drape::mesh::{triangles, vertex_normals};
use drape::{Cloth, ClothConfig, Vec3};
use wasm_bindgen::prelude::*;

// ---- Draped Cloth Demo ----

/// A cloth hanging from its top corners, blown by wind, with a ball swinging
/// through it.
#[wasm_bindgen]
pub struct ClothDemo {
    cloth: Cloth<f32>,
    gravity: Vec3<f32>,
    wind: Vec3<f32>,
    ball_center: Vec3<f32>,
    ball_radius: f32,
    ball_time: f32,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, columns: usize, rows: usize) -> Result<ClothDemo, JsValue> {
        let config = ClothConfig::new();
        let time_step_sq = config.time_step_sq;
        let cloth = Cloth::with_config(width, height, columns, rows, config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(ClothDemo {
            cloth,
            gravity: Vec3::new(0.0, -0.2, 0.0) * time_step_sq,
            wind: Vec3::new(0.5, 0.0, 0.2) * time_step_sq,
            ball_center: Vec3::new(width * 0.5, -height * 0.7, 0.0),
            ball_radius: 2.0,
            ball_time: 0.0,
        })
    }

    pub fn set_wind(&mut self, x: f32, y: f32, z: f32) {
        self.wind = Vec3::new(x, y, z) * self.cloth.config().time_step_sq;
    }

    /// Advance one frame: forces, relaxation + integration, ball collision.
    pub fn update(&mut self) {
        self.ball_time += 1.0;
        self.ball_center.z = (self.ball_time / 50.0).cos() * 7.0;

        self.cloth.add_force(self.gravity);
        self.cloth.wind_force(self.wind);
        self.cloth.advance();
        self.cloth.resolve_sphere_collision(self.ball_center, self.ball_radius);
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.cloth.positions();
        let mut out = Vec::with_capacity(pos.len() * 3);
        for p in &pos {
            out.extend_from_slice(&[p.x, p.y, p.z]);
        }
        out
    }

    /// Smooth shading normals, same layout as `positions`.
    pub fn normals(&self) -> Vec<f32> {
        let normals = vertex_normals(&self.cloth);
        let mut out = Vec::with_capacity(normals.len() * 3);
        for n in &normals {
            out.extend_from_slice(&[n.x, n.y, n.z]);
        }
        out
    }

    /// Triangle list indices into `positions`.
    pub fn indices(&self) -> Vec<u32> {
        triangles(self.cloth.columns(), self.cloth.rows())
            .iter()
            .flat_map(|t| t.iter().map(|&i| i as u32))
            .collect()
    }

    /// Returns [x, y, z, radius]
    pub fn ball(&self) -> Vec<f32> {
        vec![self.ball_center.x, self.ball_center.y, self.ball_center.z, self.ball_radius]
    }

    pub fn columns(&self) -> usize {
        self.cloth.columns()
    }
    pub fn rows(&self) -> usize {
        self.cloth.rows()
    }
}
