use eq_app::{
    AppError, evaluate_project, evaluate_scenario, list_scenarios, load_project,
};
use eq_project::schema::PolicyDef;
use std::path::{Path, PathBuf};

fn demo(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos").join(name)
}

#[test]
fn lab_project_evaluates_in_order() {
    let project = load_project(&demo("common_ion_lab.yaml")).unwrap();
    let summaries = list_scenarios(&project);
    assert_eq!(summaries.len(), 4);
    assert_eq!(summaries[3].policy, PolicyDef::Newton);

    let outcomes = evaluate_project(&project).unwrap();
    let ids: Vec<_> = outcomes.iter().map(|o| o.scenario_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["agcl-pure", "agcl-trace", "agcl-silver-nitrate", "pbi2-iodide"]
    );

    // 10 mg AgCl in 1 L
    let pure = &outcomes[0];
    assert!(pure.result.is_saturated);
    assert!((pure.result.dissolved_moles() - 1.330e-5).abs() < 1e-8);
    assert!((pure.result.precipitated_moles() - 5.649e-5).abs() < 1e-8);

    assert!(!outcomes[1].result.is_saturated);

    // Common ion: 0.1 M Ag+ drives s down to Ksp / 0.1
    let common = &outcomes[2];
    assert!(common.result.molar_solubility_molar() < 1e-8);
    assert!(common.result.dissolved_moles() < pure.result.dissolved_moles());

    let lead = &outcomes[3];
    assert!(lead.result.is_saturated);
    assert_eq!(lead.readout.formula, "PbI2");
}

#[test]
fn custom_salt_project_evaluates() {
    let project = load_project(&demo("fluorite.json")).unwrap();
    let outcome = evaluate_scenario(&project, "caf2-pure").unwrap();
    assert_eq!(outcome.readout.formula, "CaF2");
    // (3.9e-11 / 4)^(1/3) ≈ 2.136e-4 M
    assert!((outcome.result.molar_solubility_molar() - 2.136e-4).abs() < 1e-6);
    assert!(outcome.result.is_saturated);
}

#[test]
fn unknown_scenario_is_reported() {
    let project = load_project(&demo("common_ion_lab.yaml")).unwrap();
    assert!(matches!(
        evaluate_scenario(&project, "nope"),
        Err(AppError::ScenarioNotFound(_))
    ));
}

#[test]
fn missing_file_is_read_error() {
    let err = load_project(Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(matches!(err, AppError::ProjectFileRead { .. }));
}
