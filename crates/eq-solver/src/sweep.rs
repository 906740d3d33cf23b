//! Added-mass sweeps.
//!
//! Re-evaluates one input across a range of added masses, e.g. to plot Qsp
//! against mass or locate the saturation onset. Points are independent, so
//! they are evaluated in parallel.

use crate::error::{SolverError, SolverResult};
use crate::evaluate::evaluate_with_policy;
use crate::input::SimulationInput;
use crate::result::EquilibriumResult;
use crate::solubility::CommonIonPolicy;
use eq_core::units::mg;
use rayon::prelude::*;
use std::fmt;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

/// Range of added masses in milligrams.
///
/// Only built through `new`, so at least two points and, for logarithmic
/// sweeps, positive bounds are guaranteed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassSweep {
    start_mg: f64,
    end_mg: f64,
    num_points: usize,
    sweep_type: SweepType,
}

impl MassSweep {
    pub fn new(
        start_mg: f64,
        end_mg: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> SolverResult<Self> {
        let invalid = |what: &str| SolverError::Sweep {
            what: what.to_string(),
        };

        if !start_mg.is_finite() || !end_mg.is_finite() {
            return Err(invalid("sweep bounds must be finite"));
        }
        if start_mg < 0.0 || end_mg < 0.0 {
            return Err(invalid("sweep masses must be non-negative"));
        }
        if num_points < 2 {
            return Err(invalid("sweep must have at least 2 points"));
        }
        if (start_mg - end_mg).abs() < 1e-12 {
            return Err(invalid("start and end masses must be different"));
        }
        if sweep_type == SweepType::Logarithmic && (start_mg <= 0.0 || end_mg <= 0.0) {
            return Err(invalid("logarithmic sweep needs positive bounds"));
        }

        Ok(Self {
            start_mg,
            end_mg,
            num_points,
            sweep_type,
        })
    }

    pub fn start_mg(&self) -> f64 {
        self.start_mg
    }

    pub fn end_mg(&self) -> f64 {
        self.end_mg
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    pub fn sweep_type(&self) -> SweepType {
        self.sweep_type
    }

    /// Generate all masses in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        let n = self.num_points;
        let last = (n - 1) as f64;

        let mut points: Vec<f64> = match self.sweep_type {
            SweepType::Linear => {
                let delta = (self.end_mg - self.start_mg) / last;
                (0..n).map(|i| self.start_mg + i as f64 * delta).collect()
            }
            SweepType::Logarithmic => {
                let log_start = self.start_mg.ln();
                let log_delta = (self.end_mg.ln() - log_start) / last;
                (0..n).map(|i| (log_start + i as f64 * log_delta).exp()).collect()
            }
        };

        // Ensure exact endpoints
        points[0] = self.start_mg;
        points[n - 1] = self.end_mg;
        points
    }
}

impl fmt::Display for MassSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mass sweep from {} mg to {} mg ({} points, {})",
            self.start_mg, self.end_mg, self.num_points, self.sweep_type
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub added_mass_mg: f64,
    pub result: EquilibriumResult,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MassSweepResult {
    /// Points in sweep order.
    pub points: Vec<SweepPoint>,
    /// First swept mass whose solution is saturated.
    pub saturation_onset_mg: Option<f64>,
}

/// Evaluate `input` at every mass of `sweep`, replacing its added mass.
pub fn sweep_added_mass(
    input: &SimulationInput,
    sweep: &MassSweep,
    policy: &CommonIonPolicy,
) -> SolverResult<MassSweepResult> {
    let masses = sweep.generate_points();

    let points = masses
        .par_iter()
        .map(|&m| -> SolverResult<SweepPoint> {
            let at_mass = input.with_added_mass(mg(m))?;
            Ok(SweepPoint {
                added_mass_mg: m,
                result: evaluate_with_policy(&at_mass, policy)?,
            })
        })
        .collect::<SolverResult<Vec<_>>>()?;

    let saturation_onset_mg = points
        .iter()
        .find(|p| p.result.is_saturated)
        .map(|p| p.added_mass_mg);

    tracing::debug!(
        formula = %input.salt().formula,
        points = points.len(),
        ?saturation_onset_mg,
        "mass sweep complete"
    );

    Ok(MassSweepResult {
        points,
        saturation_onset_mg,
    })
}
