//! Equilibrium result representation.

use eq_core::units::{Amount, Mass, MolarMass, Molarity, as_mol, as_molar};

/// Outcome of one equilibrium evaluation.
///
/// Derived data only: recompute from a fresh input instead of mutating it.
#[derive(Debug, Clone, PartialEq)]
pub struct EquilibriumResult {
    /// Solubility `s` of the salt in this background.
    pub molar_solubility: Molarity,
    /// Moles of salt represented by the added mass.
    pub total_added: Amount,
    pub dissolved: Amount,
    pub precipitated: Amount,
    /// Total cation concentration, dissolved salt plus background.
    pub cation_concentration: Molarity,
    /// Total anion concentration, dissolved salt plus background.
    pub anion_concentration: Molarity,
    /// Qsp at the final concentrations.
    pub reaction_quotient: f64,
    /// Ksp of the salt, carried for ratio readouts.
    pub ksp: f64,
    pub is_saturated: bool,
}

impl EquilibriumResult {
    pub fn total_moles_added(&self) -> f64 {
        as_mol(self.total_added)
    }

    pub fn dissolved_moles(&self) -> f64 {
        as_mol(self.dissolved)
    }

    pub fn precipitated_moles(&self) -> f64 {
        as_mol(self.precipitated)
    }

    pub fn cation_molarity(&self) -> f64 {
        as_molar(self.cation_concentration)
    }

    pub fn anion_molarity(&self) -> f64 {
        as_molar(self.anion_concentration)
    }

    pub fn molar_solubility_molar(&self) -> f64 {
        as_molar(self.molar_solubility)
    }

    /// Qsp / Ksp; 1.0 at equilibrium.
    pub fn saturation_ratio(&self) -> f64 {
        self.reaction_quotient / self.ksp
    }

    pub fn has_precipitate(&self) -> bool {
        self.precipitated_moles() > 0.0
    }

    /// Mass of undissolved solid.
    pub fn precipitate_mass(&self, molar_mass: MolarMass) -> Mass {
        self.precipitated * molar_mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eq_core::units::{as_mg, g_per_mol, mol, molar};

    fn sample() -> EquilibriumResult {
        EquilibriumResult {
            molar_solubility: molar(1.33e-5),
            total_added: mol(6.98e-5),
            dissolved: mol(1.33e-5),
            precipitated: mol(5.65e-5),
            cation_concentration: molar(1.33e-5),
            anion_concentration: molar(1.33e-5),
            reaction_quotient: 1.7689e-10,
            ksp: 1.77e-10,
            is_saturated: true,
        }
    }

    #[test]
    fn readouts_in_lab_units() {
        let r = sample();
        assert!((r.dissolved_moles() - 1.33e-5).abs() < 1e-18);
        assert!((r.cation_molarity() - 1.33e-5).abs() < 1e-18);
        assert!(r.has_precipitate());
        assert!((r.saturation_ratio() - 1.7689e-10 / 1.77e-10).abs() < 1e-12);
    }

    #[test]
    fn precipitate_mass_uses_molar_mass() {
        let r = sample();
        let m = r.precipitate_mass(g_per_mol(143.32));
        assert!((as_mg(m) - 5.65e-5 * 143.32 * 1000.0).abs() < 1e-9);
    }
}
