//! Scenario file schema definitions.

use eq_core::units::g_per_mol;
use eq_salts::{Ion, SaltDescriptor, Stoichiometry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    /// Salts beyond the built-in catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub salts: Vec<SaltDef>,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IonDef {
    pub label: String,
    pub charge: i32,
    #[serde(default = "default_coefficient")]
    pub coefficient: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaltDef {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub ksp: f64,
    pub molar_mass_g_per_mol: f64,
    pub cation: IonDef,
    pub anion: IonDef,
    #[serde(default = "default_salt_color")]
    pub color: String,
}

impl SaltDef {
    pub fn to_descriptor(&self) -> SaltDescriptor {
        SaltDescriptor {
            id: self.id.clone(),
            name: self.name.clone(),
            formula: self.formula.clone(),
            ksp: self.ksp,
            stoichiometry: Stoichiometry::new(self.cation.coefficient, self.anion.coefficient),
            molar_mass: g_per_mol(self.molar_mass_g_per_mol),
            cation: Ion::new(self.cation.label.clone(), self.cation.charge),
            anion: Ion::new(self.anion.label.clone(), self.anion.charge),
            color: self.color.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioDef {
    pub id: String,
    pub name: String,
    /// Catalog id/formula or the id of an entry in `salts`.
    pub salt: String,
    pub volume_l: f64,
    #[serde(default)]
    pub added_mass_mg: f64,
    #[serde(default)]
    pub common_cation_m: f64,
    #[serde(default)]
    pub common_anion_m: f64,
    #[serde(default)]
    pub policy: PolicyDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PolicyDef {
    #[default]
    Approximation,
    Newton,
}

fn default_coefficient() -> u32 {
    1
}

fn default_salt_color() -> String {
    "#E2E8F0".to_string()
}
