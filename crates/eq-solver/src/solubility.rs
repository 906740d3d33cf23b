//! Molar solubility of a binary salt in a common-ion background.
//!
//! The molar solubility `s` (mol/L) satisfies
//!
//! ```text
//! (a·s + c1)^a · (b·s + c2)^b = Ksp
//! ```
//!
//! where `a`, `b` are the cation/anion coefficients and `c1`, `c2` the
//! background concentrations of those ions.
//!
//! - 1:1 salts reduce to a quadratic and are solved exactly.
//! - Other stoichiometries use the zero-common-ion closed form
//!   `s = (Ksp / (a^a · b^b))^(1/(a+b))`. With common ions present this is an
//!   approximation (it ignores the background). `CommonIonPolicy::Newton`
//!   solves the full polynomial instead.

use crate::error::{SolverError, SolverResult, finite};
use crate::newton::{NewtonConfig, newton_bracketed};
use eq_core::numeric::ipow;
use eq_salts::{SaltDescriptor, Stoichiometry};

/// How non-1:1 salts are treated when common ions are present.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CommonIonPolicy {
    /// Reuse the zero-common-ion closed form.
    #[default]
    ZeroCommonIonApproximation,
    /// Solve the full equilibrium polynomial numerically.
    Newton(NewtonConfig),
}

impl CommonIonPolicy {
    pub fn newton() -> Self {
        CommonIonPolicy::Newton(NewtonConfig::default())
    }
}

/// Molar solubility `s` in mol/L.
///
/// `common_cation` and `common_anion` are in mol/L and must already be
/// validated as finite and non-negative.
pub fn molar_solubility(
    salt: &SaltDescriptor,
    common_cation: f64,
    common_anion: f64,
    policy: &CommonIonPolicy,
) -> SolverResult<f64> {
    let stoich = salt.stoichiometry;

    if stoich.is_one_to_one() {
        return one_to_one(salt.ksp, common_cation, common_anion);
    }

    let has_common = common_cation > 0.0 || common_anion > 0.0;
    match policy {
        CommonIonPolicy::Newton(config) if has_common => {
            common_ion_newton(salt.ksp, stoich, common_cation, common_anion, config)
        }
        _ => {
            if has_common {
                tracing::debug!(
                    formula = %salt.formula,
                    common_cation,
                    common_anion,
                    "non-1:1 salt with common ions, using zero-common-ion approximation"
                );
            }
            zero_common_ion(salt.ksp, stoich)
        }
    }
}

/// Positive root of `s² + (c1+c2)·s + (c1·c2 − Ksp) = 0`, clamped at zero.
///
/// Uses `s = −2c / (b + √(b² − 4c))`, the same root as `(−b + √(b² − 4c))/2`
/// without the cancellation when `b² ≫ Ksp`.
fn one_to_one(ksp: f64, c1: f64, c2: f64) -> SolverResult<f64> {
    let b = c1 + c2;
    let c = c1 * c2 - ksp;
    let disc = finite(b * b - 4.0 * c, "quadratic discriminant")?;
    if disc < 0.0 {
        return Err(SolverError::ComputationDegenerate {
            what: format!("negative quadratic discriminant {disc}"),
        });
    }

    let denom = b + disc.sqrt();
    if denom <= 0.0 {
        return Err(SolverError::ComputationDegenerate {
            what: format!("quadratic root denominator {denom}"),
        });
    }

    let s = finite(-2.0 * c / denom, "molar solubility")?;
    if s < 0.0 {
        // Background ions alone exceed Ksp; nothing more dissolves.
        tracing::warn!(c1, c2, ksp, root = s, "common ions exceed Ksp, clamping solubility to zero");
        return Ok(0.0);
    }
    Ok(s)
}

fn zero_common_ion(ksp: f64, stoich: Stoichiometry) -> SolverResult<f64> {
    let a = stoich.cation;
    let b = stoich.anion;
    let scale = ipow(a as f64, a) * ipow(b as f64, b);
    let s = (ksp / scale).powf(1.0 / stoich.total() as f64);
    finite(s, "molar solubility")
}

/// Solve `a·ln(a·s + c1) + b·ln(b·s + c2) = ln Ksp` on `[0, s0]`.
///
/// The log form is increasing and concave in `s` and keeps the residual well
/// scaled for Ksp values many orders of magnitude below one. `s0`, the
/// zero-common-ion solubility, always bounds the root from above.
fn common_ion_newton(
    ksp: f64,
    stoich: Stoichiometry,
    c1: f64,
    c2: f64,
    config: &NewtonConfig,
) -> SolverResult<f64> {
    let a = stoich.cation as f64;
    let b = stoich.anion as f64;

    if c1 > 0.0 && c2 > 0.0 {
        let q0 = ipow(c1, stoich.cation) * ipow(c2, stoich.anion);
        if q0 >= ksp {
            tracing::warn!(c1, c2, ksp, q0, "common ions exceed Ksp, solubility is zero");
            return Ok(0.0);
        }
    }

    let upper = zero_common_ion(ksp, stoich)?;
    let ln_ksp = ksp.ln();

    let result = newton_bracketed(
        0.0,
        upper,
        |s| a * (a * s + c1).ln() + b * (b * s + c2).ln() - ln_ksp,
        |s| a * a / (a * s + c1) + b * b / (b * s + c2),
        config,
    )?;

    tracing::debug!(
        s = result.x,
        upper,
        iterations = result.iterations,
        residual = result.residual,
        "common-ion Newton solve converged"
    );

    finite(result.x, "molar solubility")
}
