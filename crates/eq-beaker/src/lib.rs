//! Beaker scene model for the simulator view.
//!
//! Turns an equilibrium result into what the beaker shows: a number of
//! moving ion particles proportional to the dissolved cation concentration,
//! and a precipitate layer proportional to the undissolved moles. Drawing is
//! left to the frontend; this crate only owns the geometry and motion.

pub mod geometry;
pub mod particle;
pub mod scene;

pub use geometry::BeakerGeometry;
pub use particle::IonParticle;
pub use scene::{BeakerScene, LegendEntry, particle_count, precipitate_height};
