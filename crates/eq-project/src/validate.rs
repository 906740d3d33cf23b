//! Project validation logic.

use crate::schema::{Project, SaltDef, ScenarioDef};
use eq_salts::{SaltDescriptor, find_salt, find_salt_entry};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut salt_ids = HashSet::new();
    for salt in &project.salts {
        require_id(&salt.id, "salts")?;
        if !salt_ids.insert(salt.id.to_ascii_lowercase()) || find_salt_entry(&salt.id).is_ok() {
            return Err(ValidationError::DuplicateId {
                id: salt.id.clone(),
                context: "salts".to_string(),
            });
        }
        validate_salt(salt)?;
    }

    let mut scenario_ids = HashSet::new();
    for scenario in &project.scenarios {
        require_id(&scenario.id, "scenarios")?;
        if !scenario_ids.insert(&scenario.id) {
            return Err(ValidationError::DuplicateId {
                id: scenario.id.clone(),
                context: "scenarios".to_string(),
            });
        }
        validate_scenario(project, scenario)?;
    }

    Ok(())
}

/// Look a salt up among the project's own salts, then the built-in catalog.
pub fn resolve_salt(project: &Project, key: &str) -> Result<SaltDescriptor, ValidationError> {
    if let Some(def) = project
        .salts
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(key))
    {
        return Ok(def.to_descriptor());
    }
    find_salt(key).map_err(|_| ValidationError::MissingReference {
        id: key.to_string(),
        context: "scenario salt".to_string(),
    })
}

fn require_id(id: &str, context: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("{context}.id"),
            value: id.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn validate_salt(salt: &SaltDef) -> Result<(), ValidationError> {
    salt.to_descriptor()
        .validate()
        .map_err(|e| ValidationError::InvalidValue {
            field: format!("salts.{}", salt.id),
            value: salt.formula.clone(),
            reason: e.to_string(),
        })
}

fn validate_scenario(project: &Project, scenario: &ScenarioDef) -> Result<(), ValidationError> {
    resolve_salt(project, &scenario.salt)?;

    let field = |name: &str| format!("scenarios.{}.{}", scenario.id, name);

    if !scenario.volume_l.is_finite() || scenario.volume_l <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field("volume_l"),
            value: scenario.volume_l.to_string(),
            reason: "must be positive".to_string(),
        });
    }

    for (name, value) in [
        ("added_mass_mg", scenario.added_mass_mg),
        ("common_cation_m", scenario.common_cation_m),
        ("common_anion_m", scenario.common_anion_m),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: field(name),
                value: value.to_string(),
                reason: "must be non-negative".to_string(),
            });
        }
    }

    Ok(())
}
