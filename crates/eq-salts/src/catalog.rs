use crate::error::{SaltError, SaltResult};
use crate::ion::Ion;
use crate::salt::{SaltDescriptor, Stoichiometry};
use eq_core::units::{MolarMass, g_per_mol};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaltCatalogEntry {
    pub id: &'static str,
    pub formula: &'static str,
    pub display_name: &'static str,
    pub ksp: f64,
    pub stoichiometry: Stoichiometry,
    pub cation: (&'static str, i32),
    pub anion: (&'static str, i32),
    pub color: &'static str,
    pub aliases: &'static [&'static str],
}

impl SaltCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.to_ascii_lowercase().contains(&query)
            || self.formula.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }

    fn matches_exact(&self, key: &str) -> bool {
        let key = key.trim();
        self.id.eq_ignore_ascii_case(key)
            || self.formula.eq_ignore_ascii_case(key)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(key))
    }

    pub fn molar_mass(&self) -> SaltResult<MolarMass> {
        molar_mass_for_formula(self.formula)
    }

    /// Owned descriptor for the solver.
    pub fn descriptor(&self) -> SaltResult<SaltDescriptor> {
        Ok(SaltDescriptor {
            id: self.id.to_string(),
            name: self.display_name.to_string(),
            formula: self.formula.to_string(),
            ksp: self.ksp,
            stoichiometry: self.stoichiometry,
            molar_mass: self.molar_mass()?,
            cation: Ion::new(self.cation.0, self.cation.1),
            anion: Ion::new(self.anion.0, self.anion.1),
            color: self.color.to_string(),
        })
    }
}

const SALT_CATALOG: [SaltCatalogEntry; 5] = [
    SaltCatalogEntry {
        id: "agcl",
        formula: "AgCl",
        display_name: "Silver Chloride",
        ksp: 1.77e-10,
        stoichiometry: Stoichiometry::new(1, 1),
        cation: ("Ag+", 1),
        anion: ("Cl-", -1),
        color: "#E2E8F0",
        aliases: &["silver chloride"],
    },
    SaltCatalogEntry {
        id: "pbi2",
        formula: "PbI2",
        display_name: "Lead(II) Iodide",
        ksp: 7.1e-9,
        stoichiometry: Stoichiometry::new(1, 2),
        cation: ("Pb2+", 2),
        anion: ("I-", -1),
        color: "#FDE047",
        aliases: &["lead iodide", "lead(ii) iodide"],
    },
    SaltCatalogEntry {
        id: "baso4",
        formula: "BaSO4",
        display_name: "Barium Sulfate",
        ksp: 1.1e-10,
        stoichiometry: Stoichiometry::new(1, 1),
        cation: ("Ba2+", 2),
        anion: ("SO4 2-", -2),
        color: "#F1F5F9",
        aliases: &["barium sulfate", "barite"],
    },
    SaltCatalogEntry {
        id: "caco3",
        formula: "CaCO3",
        display_name: "Calcium Carbonate",
        ksp: 3.3e-9,
        stoichiometry: Stoichiometry::new(1, 1),
        cation: ("Ca2+", 2),
        anion: ("CO3 2-", -2),
        color: "#CBD5E1",
        aliases: &["calcium carbonate", "calcite"],
    },
    SaltCatalogEntry {
        id: "mgf2",
        formula: "MgF2",
        display_name: "Magnesium Fluoride",
        ksp: 5.2e-11,
        stoichiometry: Stoichiometry::new(1, 2),
        cation: ("Mg2+", 2),
        anion: ("F-", -1),
        color: "#F8FAFC",
        aliases: &["magnesium fluoride"],
    },
];

// g/mol, keyed by formula
const MOLAR_MASSES: [(&str, f64); 5] = [
    ("AgCl", 143.32),
    ("PbI2", 461.01),
    ("BaSO4", 233.39),
    ("CaCO3", 100.09),
    ("MgF2", 62.30),
];

pub fn salt_catalog() -> &'static [SaltCatalogEntry] {
    &SALT_CATALOG
}

pub fn filter_salt_catalog(query: &str) -> Vec<SaltCatalogEntry> {
    salt_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// Look up a catalog entry by id, formula, or alias (case-insensitive).
pub fn find_salt_entry(key: &str) -> SaltResult<&'static SaltCatalogEntry> {
    salt_catalog()
        .iter()
        .find(|entry| entry.matches_exact(key))
        .ok_or_else(|| SaltError::UnknownSalt {
            id: key.to_string(),
        })
}

pub fn find_salt(key: &str) -> SaltResult<SaltDescriptor> {
    find_salt_entry(key)?.descriptor()
}

pub fn molar_mass_for_formula(formula: &str) -> SaltResult<MolarMass> {
    MOLAR_MASSES
        .iter()
        .find(|(f, _)| *f == formula)
        .map(|(_, mm)| g_per_mol(*mm))
        .ok_or_else(|| SaltError::UnknownSalt {
            id: formula.to_string(),
        })
}
