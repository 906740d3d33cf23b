//! Beaker geometry in canvas pixels.

use nalgebra::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeakerGeometry {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Liquid region, inside the glass walls.
    pub liquid_min: Vector2<f64>,
    pub liquid_max: Vector2<f64>,
    /// Tallest precipitate layer drawn at the bottom of the liquid.
    pub max_precipitate_height: f64,
}

impl Default for BeakerGeometry {
    fn default() -> Self {
        Self {
            canvas_width: 300.0,
            canvas_height: 300.0,
            liquid_min: Vector2::new(42.0, 60.0),
            liquid_max: Vector2::new(258.0, 248.0),
            max_precipitate_height: 30.0,
        }
    }
}

impl BeakerGeometry {
    pub fn liquid_width(&self) -> f64 {
        self.liquid_max.x - self.liquid_min.x
    }

    pub fn liquid_height(&self) -> f64 {
        self.liquid_max.y - self.liquid_min.y
    }

    pub fn contains(&self, p: &Vector2<f64>) -> bool {
        p.x >= self.liquid_min.x
            && p.x <= self.liquid_max.x
            && p.y >= self.liquid_min.y
            && p.y <= self.liquid_max.y
    }
}
