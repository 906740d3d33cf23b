//! Beaker scene built from an equilibrium result.

use crate::geometry::BeakerGeometry;
use crate::particle::IonParticle;
use eq_salts::{IonRole, SaltDescriptor};
use eq_solver::EquilibriumResult;
use nalgebra::Vector2;
use rand::Rng;

/// Particles drawn per mol/L of cation.
pub const PARTICLES_PER_MOLAR: f64 = 2.0e7;
pub const MIN_PARTICLES: usize = 5;
pub const MAX_PARTICLES: usize = 100;
/// Precipitate layer height in pixels per mole.
pub const PRECIPITATE_PX_PER_MOL: f64 = 5.0e4;

/// `min(floor([cation] · 2e7) + 5, 100)`
pub fn particle_count(cation_molarity: f64) -> usize {
    let scaled = (cation_molarity.max(0.0) * PARTICLES_PER_MOLAR).floor();
    if !scaled.is_finite() || scaled >= MAX_PARTICLES as f64 {
        return MAX_PARTICLES;
    }
    (scaled as usize + MIN_PARTICLES).min(MAX_PARTICLES)
}

/// `min(precipitated · 5e4, max)` pixels, zero without precipitate.
pub fn precipitate_height(precipitated_moles: f64, geometry: &BeakerGeometry) -> f64 {
    if precipitated_moles <= 0.0 {
        return 0.0;
    }
    (precipitated_moles * PRECIPITATE_PX_PER_MOL).min(geometry.max_precipitate_height)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone)]
pub struct BeakerScene {
    pub geometry: BeakerGeometry,
    pub particles: Vec<IonParticle>,
    pub precipitate_height: f64,
    pub precipitate_color: String,
    legend: Vec<LegendEntry>,
}

impl BeakerScene {
    pub const CATION_COLOR: &'static str = "#3b82f6";
    pub const ANION_COLOR: &'static str = "#ef4444";

    pub fn from_result<R: Rng + ?Sized>(
        salt: &SaltDescriptor,
        result: &EquilibriumResult,
        rng: &mut R,
    ) -> Self {
        Self::with_geometry(BeakerGeometry::default(), salt, result, rng)
    }

    pub fn with_geometry<R: Rng + ?Sized>(
        geometry: BeakerGeometry,
        salt: &SaltDescriptor,
        result: &EquilibriumResult,
        rng: &mut R,
    ) -> Self {
        let count = particle_count(result.cation_molarity());
        let particles = (0..count)
            .map(|i| {
                let species = if i % 2 == 0 {
                    IonRole::Cation
                } else {
                    IonRole::Anion
                };
                IonParticle {
                    position: Vector2::new(
                        rng.random_range(geometry.liquid_min.x..=geometry.liquid_max.x),
                        rng.random_range(geometry.liquid_min.y..=geometry.liquid_max.y),
                    ),
                    velocity: Vector2::new(
                        rng.random_range(-1.0..1.0),
                        rng.random_range(-1.0..1.0),
                    ),
                    radius: rng.random_range(2.0..4.0),
                    species,
                }
            })
            .collect();

        let precipitate_height = precipitate_height(result.precipitated_moles(), &geometry);

        let mut legend = vec![
            LegendEntry {
                label: salt.cation.label.clone(),
                color: Self::CATION_COLOR.to_string(),
            },
            LegendEntry {
                label: salt.anion.label.clone(),
                color: Self::ANION_COLOR.to_string(),
            },
        ];
        if result.has_precipitate() {
            legend.push(LegendEntry {
                label: format!("Precipitate ({})", salt.formula),
                color: salt.color.clone(),
            });
        }

        tracing::trace!(
            formula = %salt.formula,
            particles = count,
            precipitate_height,
            "beaker scene built"
        );

        Self {
            geometry,
            particles,
            precipitate_height,
            precipitate_color: salt.color.clone(),
            legend,
        }
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let geometry = self.geometry;
        for p in &mut self.particles {
            p.step(&geometry);
        }
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn count_of(&self, species: IonRole) -> usize {
        self.particles.iter().filter(|p| p.species == species).count()
    }
}
