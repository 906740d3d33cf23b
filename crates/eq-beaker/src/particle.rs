//! Ion particles.

use crate::geometry::BeakerGeometry;
use eq_salts::IonRole;
use nalgebra::Vector2;

#[derive(Debug, Clone, PartialEq)]
pub struct IonParticle {
    pub position: Vector2<f64>,
    /// Pixels per frame.
    pub velocity: Vector2<f64>,
    pub radius: f64,
    pub species: IonRole,
}

impl IonParticle {
    /// Advance one frame, bouncing off the liquid boundary.
    pub fn step(&mut self, geometry: &BeakerGeometry) {
        self.position += self.velocity;

        for axis in 0..2 {
            let lo = geometry.liquid_min[axis];
            let hi = geometry.liquid_max[axis];
            if self.position[axis] < lo {
                self.position[axis] = lo + (lo - self.position[axis]);
                self.velocity[axis] = -self.velocity[axis];
            } else if self.position[axis] > hi {
                self.position[axis] = hi - (self.position[axis] - hi);
                self.velocity[axis] = -self.velocity[axis];
            }
            // Velocities larger than the box could still overshoot
            self.position[axis] = self.position[axis].clamp(lo, hi);
        }
    }
}
