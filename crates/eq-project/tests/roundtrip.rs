use eq_project::schema::*;
use eq_project::{
    ProjectError, ValidationError, load_any, load_json, load_yaml, save_json, save_yaml,
    validate_project,
};

fn lab_project() -> Project {
    Project {
        version: 1,
        name: "Common Ion Lab".to_string(),
        salts: vec![],
        scenarios: vec![
            ScenarioDef {
                id: "agcl_pure".to_string(),
                name: "AgCl in pure water".to_string(),
                salt: "AgCl".to_string(),
                volume_l: 1.0,
                added_mass_mg: 10.0,
                common_cation_m: 0.0,
                common_anion_m: 0.0,
                policy: PolicyDef::Approximation,
            },
            ScenarioDef {
                id: "pbi2_iodide".to_string(),
                name: "PbI2 with 0.05 M iodide".to_string(),
                salt: "PbI2".to_string(),
                volume_l: 0.5,
                added_mass_mg: 50.0,
                common_cation_m: 0.0,
                common_anion_m: 0.05,
                policy: PolicyDef::Newton,
            },
        ],
    }
}

#[test]
fn roundtrip_yaml_empty_project() {
    let project = Project {
        version: 1,
        name: "Empty Project".to_string(),
        salts: vec![],
        scenarios: vec![],
    };

    validate_project(&project).unwrap();

    let path = std::env::temp_dir().join("eq_project_roundtrip_empty.yaml");
    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_yaml_scenarios() {
    let project = lab_project();
    let path = std::env::temp_dir().join("eq_project_roundtrip_lab.yaml");

    save_yaml(&path, &project).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(project, loaded);
}

#[test]
fn roundtrip_json_scenarios() {
    let project = lab_project();
    let path = std::env::temp_dir().join("eq_project_roundtrip_lab.json");

    save_json(&path, &project).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(project, loaded);

    let by_extension = load_any(&path).unwrap();
    assert_eq!(project, by_extension);
}

#[test]
fn optional_fields_default() {
    let yaml = r#"
version: 1
name: Minimal
scenarios:
  - id: s1
    name: Barium sulfate
    salt: BaSO4
    volume_l: 2.0
"#;
    let project: Project = serde_yaml::from_str(yaml).unwrap();
    validate_project(&project).unwrap();

    let s = &project.scenarios[0];
    assert_eq!(s.added_mass_mg, 0.0);
    assert_eq!(s.common_cation_m, 0.0);
    assert_eq!(s.common_anion_m, 0.0);
    assert_eq!(s.policy, PolicyDef::Approximation);
    assert!(project.salts.is_empty());
}

#[test]
fn custom_salt_from_yaml() {
    let yaml = r#"
version: 1
name: Custom
salts:
  - id: caf2
    name: Calcium Fluoride
    formula: CaF2
    ksp: 3.9e-11
    molar_mass_g_per_mol: 78.07
    cation: { label: "Ca2+", charge: 2 }
    anion: { label: "F-", charge: -1, coefficient: 2 }
scenarios:
  - id: s1
    name: Fluorite
    salt: CaF2
    volume_l: 1.0
    added_mass_mg: 100.0
    policy: newton
"#;
    let project: Project = serde_yaml::from_str(yaml).unwrap();
    validate_project(&project).unwrap();

    let salt = &project.salts[0];
    assert_eq!(salt.cation.coefficient, 1);
    assert_eq!(salt.anion.coefficient, 2);
    assert_eq!(salt.color, "#E2E8F0");

    let descriptor = eq_project::resolve_salt(&project, "caf2").unwrap();
    assert_eq!(descriptor.stoichiometry.anion, 2);
    assert_eq!(project.scenarios[0].policy, PolicyDef::Newton);
}

#[test]
fn invalid_file_fails_to_load() {
    let mut project = lab_project();
    project.scenarios[1].salt = "Unobtainium".to_string();

    let path = std::env::temp_dir().join("eq_project_invalid.json");
    std::fs::write(&path, serde_json::to_string(&project).unwrap()).unwrap();

    let err = load_json(&path).unwrap_err();
    assert!(matches!(
        err,
        ProjectError::Validation(ValidationError::MissingReference { .. })
    ));
}

#[test]
fn save_refuses_invalid_project() {
    let mut project = lab_project();
    project.scenarios[0].volume_l = -1.0;

    let path = std::env::temp_dir().join("eq_project_refused.yaml");
    assert!(save_yaml(&path, &project).is_err());
}

#[test]
fn malformed_yaml_is_a_yaml_error() {
    let path = std::env::temp_dir().join("eq_project_malformed.yaml");
    std::fs::write(&path, "version: [1\nname: broken").unwrap();
    assert!(matches!(load_yaml(&path), Err(ProjectError::Yaml(_))));
}
