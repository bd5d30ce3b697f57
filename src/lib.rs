//! Verlet cloth simulation for real-time graphics.
//!
//! `drape` models a rectangular piece of cloth as a grid of point masses held
//! together by distance constraints. Each frame, forces are accumulated, the
//! constraints are relaxed a fixed number of times, and every particle takes
//! one explicit Verlet step. Particles can then be pushed out of a sphere.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Constraint relaxation**: Structural, shear and bend distance constraints
//! - **Wind**: Per-triangle pressure from facet orientation and area
//! - **Sphere collision**: Per-particle projection onto the sphere surface
//! - **Pinning**: Permanent, honoured by every position update
//! - **Mesh view**: Triangle indices and smooth normals for renderers
//! - **Observable**: Monitor frames via the `FrameObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use drape::{Cloth, Vec3};
//!
//! let mut cloth: Cloth<f32> = Cloth::new(14.0, 10.0, 55, 45).unwrap();
//! for _ in 0..10 {
//!     cloth.add_force(Vec3::new(0.0, -0.05, 0.0));
//!     cloth.wind_force(Vec3::new(0.125, 0.0, 0.05));
//!     cloth.advance();
//!     cloth.resolve_sphere_collision(Vec3::new(7.0, -5.0, 0.0), 2.0);
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod force;
pub mod cloth;
pub mod mesh;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::Particle;
pub use constraint::{Constraint, ConstraintKind};
pub use cloth::Cloth;
pub use config::{ClothConfig, PinPattern};
pub use observer::{FrameObserver, NoOpFrameObserver};
pub use error::ClothError;
