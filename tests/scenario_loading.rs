//! Integration tests for scenario loading and execution.

use signal_hub::prelude::*;
use signal_hub::scenario::ScenarioFormat;
use std::fs;
use tempfile::TempDir;

const ORIGINAL_YAML: &str = r#"
name: original-script
observers:
  - name: obs1
    initial: 1
  - name: obs2
    initial: 19
signals: [INC]
balls: [football, basketball]
objects: [Bob, Alice, Franck]
remove_objects: [Alice]
"#;

#[test]
fn test_load_and_run_yaml_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scenario.yaml");
    fs::write(&path, ORIGINAL_YAML).unwrap();

    let scenario = ScenarioLoader::new().with_file(&path).load().unwrap();
    assert_eq!(scenario.name, "original-script");

    let report = scenario.run().unwrap();
    assert_eq!(report.state_of("obs1"), Some(2));
    assert_eq!(report.state_of("obs2"), Some(20));
    assert_eq!(
        report.rolls,
        vec!["The football is rolling.", "The basketball is rolling."]
    );
    assert_eq!(report.objects, vec!["Bob", "Franck"]);
}

#[test]
fn test_yaml_file_matches_built_in_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scenario.yml");
    fs::write(&path, ORIGINAL_YAML).unwrap();

    let loaded = ScenarioLoader::new().with_file(&path).load().unwrap();
    let built_in = Scenario::original();

    assert_eq!(loaded.observers, built_in.observers);
    assert_eq!(loaded.parsed_signals(), built_in.parsed_signals());
    assert_eq!(
        loaded.run().unwrap().observers,
        built_in.run().unwrap().observers
    );
}

#[test]
fn test_load_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scenario.json");
    fs::write(
        &path,
        r#"{
  "observers": [{ "name": "solo", "initial": -2 }],
  "signals": ["DECREMENT", "DECREMENT", "RESET", "INCREMENT"]
}"#,
    )
    .unwrap();

    let scenario = ScenarioLoader::new().with_file(&path).load().unwrap();
    assert_eq!(scenario.name, "scenario");

    let report = scenario.run().unwrap();
    assert_eq!(report.state_of("solo"), Some(-1));
    assert_eq!(report.deliveries, 4);
    assert!(report.rolls.is_empty());
}

#[test]
fn test_second_file_overrides_first() {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("base.yaml");
    let overlay = temp_dir.path().join("overlay.toml");
    fs::write(&base, ORIGINAL_YAML).unwrap();
    fs::write(&overlay, "signals = [\"DEC\", \"DEC\"]\n").unwrap();

    let report = ScenarioLoader::new()
        .with_file(&base)
        .with_file(&overlay)
        .load()
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(report.state_of("obs1"), Some(-1));
    assert_eq!(report.state_of("obs2"), Some(17));
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("scenario.ini");
    fs::write(&path, "name = x").unwrap();

    let result = ScenarioLoader::new().with_file(&path).load();
    assert!(matches!(result, Err(HubError::LoadError(_))));
}

#[test]
fn test_unknown_ball_tag_fails_run() {
    let scenario = ScenarioLoader::new()
        .with_str("balls: [basketball, volleyball]", ScenarioFormat::Yaml)
        .load()
        .unwrap();

    match scenario.run() {
        Err(HubError::InvalidArgument(msg)) => assert!(msg.contains("volleyball")),
        other => panic!("expected invalid argument, got {:?}", other),
    }
}

#[cfg(feature = "validation")]
#[test]
fn test_validation_rejects_blank_observer_name() {
    let result = ScenarioLoader::new()
        .with_str(
            r#"{ "observers": [{ "name": "", "initial": 0 }] }"#,
            ScenarioFormat::Json,
        )
        .load();

    match result {
        Err(HubError::ValidationError(msg)) => assert!(msg.contains("observers[0].name")),
        other => panic!("expected validation error, got {:?}", other),
    }
}
