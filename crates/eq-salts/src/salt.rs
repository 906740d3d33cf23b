//! Salt descriptors and dissolution stoichiometry.

use crate::error::{SaltError, SaltResult};
use crate::ion::Ion;
use eq_core::units::{MolarMass, as_g_per_mol};

/// Coefficients of `Salt(s) ⇌ a·Cation + b·Anion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stoichiometry {
    pub cation: u32,
    pub anion: u32,
}

impl Stoichiometry {
    pub const fn new(cation: u32, anion: u32) -> Self {
        Self { cation, anion }
    }

    pub fn is_one_to_one(&self) -> bool {
        self.cation == 1 && self.anion == 1
    }

    /// Total ions released per formula unit (`a + b`).
    pub fn total(&self) -> u32 {
        self.cation + self.anion
    }
}

/// Immutable chemical description of a sparingly soluble binary salt.
#[derive(Debug, Clone, PartialEq)]
pub struct SaltDescriptor {
    pub id: String,
    pub name: String,
    pub formula: String,
    /// Solubility product constant (dimensionless in mol/L-based units).
    pub ksp: f64,
    pub stoichiometry: Stoichiometry,
    pub molar_mass: MolarMass,
    pub cation: Ion,
    pub anion: Ion,
    /// Display color, `#RRGGBB`.
    pub color: String,
}

impl SaltDescriptor {
    /// Check the descriptor is chemically and numerically usable.
    ///
    /// Requires positive finite Ksp and molar mass, non-zero coefficients,
    /// a cation and an anion, and an electrically neutral formula unit.
    pub fn validate(&self) -> SaltResult<()> {
        let invalid = |what| SaltError::Invalid {
            formula: self.formula.clone(),
            what,
        };

        if self.formula.trim().is_empty() {
            return Err(invalid("formula must not be empty"));
        }
        if !self.ksp.is_finite() || self.ksp <= 0.0 {
            return Err(invalid("ksp must be positive and finite"));
        }
        let mm = as_g_per_mol(self.molar_mass);
        if !mm.is_finite() || mm <= 0.0 {
            return Err(invalid("molar mass must be positive and finite"));
        }
        if self.stoichiometry.cation == 0 || self.stoichiometry.anion == 0 {
            return Err(invalid("stoichiometric coefficients must be positive"));
        }
        if self.cation.charge <= 0 {
            return Err(invalid("cation charge must be positive"));
        }
        if self.anion.charge >= 0 {
            return Err(invalid("anion charge must be negative"));
        }

        let net = self.stoichiometry.cation as i64 * self.cation.charge as i64
            + self.stoichiometry.anion as i64 * self.anion.charge as i64;
        if net != 0 {
            return Err(invalid("formula unit is not charge balanced"));
        }

        Ok(())
    }

    /// e.g. `PbI2(s) ⇌ Pb2+(aq) + 2I-(aq)`
    pub fn dissolution_equation(&self) -> String {
        format!(
            "{}(s) ⇌ {}{}(aq) + {}{}(aq)",
            self.formula,
            coefficient_prefix(self.stoichiometry.cation),
            self.cation.label,
            coefficient_prefix(self.stoichiometry.anion),
            self.anion.label,
        )
    }

    /// e.g. `Ksp = [Pb2+][I-]^2`
    pub fn ksp_expression(&self) -> String {
        format!(
            "Ksp = [{}]{}[{}]{}",
            self.cation.label,
            exponent_suffix(self.stoichiometry.cation),
            self.anion.label,
            exponent_suffix(self.stoichiometry.anion),
        )
    }
}

fn coefficient_prefix(n: u32) -> String {
    if n > 1 { n.to_string() } else { String::new() }
}

fn exponent_suffix(n: u32) -> String {
    if n > 1 { format!("^{n}") } else { String::new() }
}
