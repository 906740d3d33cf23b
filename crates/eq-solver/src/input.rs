//! Validated solver input.

use crate::error::SolverResult;
use eq_core::numeric::{ensure_non_negative, ensure_positive};
use eq_core::units::{Mass, Molarity, Volume, as_liters, as_mg, as_molar, liters, mg, molar};
use eq_salts::SaltDescriptor;

/// Everything one evaluation needs.
///
/// Values are checked on construction and never mutated afterwards; the
/// `with_*` methods build a fresh, re-validated input.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationInput {
    salt: SaltDescriptor,
    volume: Volume,
    added_mass: Mass,
    common_cation: Molarity,
    common_anion: Molarity,
}

impl SimulationInput {
    /// Create an input, rejecting non-positive volume, negative mass or
    /// negative common-ion molarity, and invalid salts.
    pub fn new(
        salt: SaltDescriptor,
        volume: Volume,
        added_mass: Mass,
        common_cation: Molarity,
        common_anion: Molarity,
    ) -> SolverResult<Self> {
        salt.validate()?;
        ensure_positive(as_liters(volume), "volume")?;
        ensure_non_negative(as_mg(added_mass), "added mass")?;
        ensure_non_negative(as_molar(common_cation), "common cation molarity")?;
        ensure_non_negative(as_molar(common_anion), "common anion molarity")?;

        Ok(Self {
            salt,
            volume,
            added_mass,
            common_cation,
            common_anion,
        })
    }

    /// Liters, milligrams and mol/L, the units the simulator is driven in.
    pub fn from_lab_units(
        salt: SaltDescriptor,
        volume_l: f64,
        added_mass_mg: f64,
        common_cation_m: f64,
        common_anion_m: f64,
    ) -> SolverResult<Self> {
        Self::new(
            salt,
            liters(volume_l),
            mg(added_mass_mg),
            molar(common_cation_m),
            molar(common_anion_m),
        )
    }

    pub fn salt(&self) -> &SaltDescriptor {
        &self.salt
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn added_mass(&self) -> Mass {
        self.added_mass
    }

    pub fn common_cation(&self) -> Molarity {
        self.common_cation
    }

    pub fn common_anion(&self) -> Molarity {
        self.common_anion
    }

    pub fn has_common_ions(&self) -> bool {
        as_molar(self.common_cation) > 0.0 || as_molar(self.common_anion) > 0.0
    }

    pub fn with_salt(&self, salt: SaltDescriptor) -> SolverResult<Self> {
        Self::new(
            salt,
            self.volume,
            self.added_mass,
            self.common_cation,
            self.common_anion,
        )
    }

    pub fn with_volume(&self, volume: Volume) -> SolverResult<Self> {
        Self::new(
            self.salt.clone(),
            volume,
            self.added_mass,
            self.common_cation,
            self.common_anion,
        )
    }

    pub fn with_added_mass(&self, added_mass: Mass) -> SolverResult<Self> {
        Self::new(
            self.salt.clone(),
            self.volume,
            added_mass,
            self.common_cation,
            self.common_anion,
        )
    }

    pub fn with_common_ions(&self, cation: Molarity, anion: Molarity) -> SolverResult<Self> {
        Self::new(self.salt.clone(), self.volume, self.added_mass, cation, anion)
    }
}
