//! Equilibrium evaluation.

use crate::error::{SolverResult, finite};
use crate::input::SimulationInput;
use crate::result::EquilibriumResult;
use crate::solubility::{CommonIonPolicy, molar_solubility};
use eq_core::numeric::ipow;
use eq_core::units::{Mass, as_g_per_mol, as_liters, as_mg, as_molar, mg, mol, molar};
use eq_salts::SaltDescriptor;

/// Qsp within 1% below Ksp counts as saturated.
pub const SATURATION_TOLERANCE: f64 = 0.99;

/// Evaluate with the default common-ion policy.
pub fn evaluate(input: &SimulationInput) -> SolverResult<EquilibriumResult> {
    evaluate_with_policy(input, &CommonIonPolicy::default())
}

/// Flat entry point in laboratory units (L, mg, mol/L).
pub fn evaluate_with(
    salt: &SaltDescriptor,
    volume_l: f64,
    added_mass_mg: f64,
    common_cation_m: f64,
    common_anion_m: f64,
) -> SolverResult<EquilibriumResult> {
    let input = SimulationInput::from_lab_units(
        salt.clone(),
        volume_l,
        added_mass_mg,
        common_cation_m,
        common_anion_m,
    )?;
    evaluate(&input)
}

pub fn evaluate_with_policy(
    input: &SimulationInput,
    policy: &CommonIonPolicy,
) -> SolverResult<EquilibriumResult> {
    let salt = input.salt();
    let a = salt.stoichiometry.cation;
    let b = salt.stoichiometry.anion;
    let volume = as_liters(input.volume());
    let c1 = as_molar(input.common_cation());
    let c2 = as_molar(input.common_anion());

    let s = molar_solubility(salt, c1, c2, policy)?;

    let max_dissolvable = finite(s * volume, "maximum dissolvable moles")?;
    let total = finite(
        (as_mg(input.added_mass()) / 1000.0) / as_g_per_mol(salt.molar_mass),
        "total moles added",
    )?;

    let dissolved = total.min(max_dissolvable);
    let precipitated = (total - max_dissolvable).max(0.0);

    let cation = finite(dissolved * a as f64 / volume + c1, "cation concentration")?;
    let anion = finite(dissolved * b as f64 / volume + c2, "anion concentration")?;
    let qsp = finite(ipow(cation, a) * ipow(anion, b), "reaction quotient")?;
    let is_saturated = qsp >= SATURATION_TOLERANCE * salt.ksp;

    tracing::debug!(
        formula = %salt.formula,
        volume_l = volume,
        s,
        total,
        dissolved,
        precipitated,
        qsp,
        is_saturated,
        "equilibrium evaluated"
    );

    Ok(EquilibriumResult {
        molar_solubility: molar(s),
        total_added: mol(total),
        dissolved: mol(dissolved),
        precipitated: mol(precipitated),
        cation_concentration: molar(cation),
        anion_concentration: molar(anion),
        reaction_quotient: qsp,
        ksp: salt.ksp,
        is_saturated,
    })
}

/// Added mass at which precipitate first appears (`s · V · M`).
pub fn saturation_mass(input: &SimulationInput, policy: &CommonIonPolicy) -> SolverResult<Mass> {
    let salt = input.salt();
    let s = molar_solubility(
        salt,
        as_molar(input.common_cation()),
        as_molar(input.common_anion()),
        policy,
    )?;
    let grams = s * as_liters(input.volume()) * as_g_per_mol(salt.molar_mass);
    Ok(mg(finite(grams * 1000.0, "saturation mass")?))
}
