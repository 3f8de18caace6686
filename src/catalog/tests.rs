use super::*;

const CUSTOM: &str = r#"
sensors:
  - key: TEMPERATURE
    display_name: "Temp"
    units: "C"
    graph_type: VERTICAL_BAR
    color_key: SIDEBAR_TEMP
    category: environment
  - key: CLOCK
    display_name: "Clock"
    graph_type: NONE
    color_key: SIDEBAR_ALL
    category: time
  - key: LIGHT_LEVEL
    display_name: "Lux"
    units: "lx"
    graph_type: LINE
    color_key: SIDEBAR_ALL
    category: environment
schematics:
  - model: probe
    name: "Class 1 Probe"
"#;

#[test]
fn builtin_catalog_is_valid() {
    let catalog = Catalog::builtin();
    assert!(catalog.validate().is_ok());
    assert_eq!(catalog.sensors.len(), 9);
    assert_eq!(
        catalog.sensor("PRESSURE").map(|s| s.display_name.as_str()),
        Some("Atmos")
    );
}

#[test]
fn dashboard_keys_skip_clock_and_ungraphable() {
    let keys = Catalog::builtin().dashboard_keys();
    assert!(!keys.iter().any(|key| key == CLOCK_KEY));
    assert_eq!(keys.first().map(String::as_str), Some("TEMPERATURE"));
    assert!(keys.iter().any(|key| key == "CPU_USAGE"));
    assert_eq!(keys.len(), 8);
}

#[test]
fn browsable_sensors_exclude_system_and_clock() {
    let catalog = Catalog::builtin();
    let browsable: Vec<&str> = catalog
        .sensors
        .iter()
        .filter(|s| s.is_browsable())
        .map(|s| s.key.as_str())
        .collect();
    assert_eq!(
        browsable,
        ["TEMPERATURE", "HUMIDITY", "PRESSURE", "ORIENTATION", "ACCELERATION"]
    );
}

#[test]
fn yaml_catalog_parses_with_defaults() {
    let catalog = Catalog::from_yaml_str(CUSTOM).expect("custom catalog");
    assert_eq!(catalog.sensors.len(), 3);
    assert_eq!(catalog.sensor("CLOCK").map(|s| s.units.as_str()), Some(""));
    assert_eq!(catalog.dashboard_keys(), ["TEMPERATURE", "LIGHT_LEVEL"]);
    let probe = catalog.schematic("probe").expect("probe schematic");
    assert!(probe.visible);
    assert!(probe.description.is_empty());
}

#[test]
fn invalid_sensor_key_is_rejected() {
    let raw = CUSTOM.replace("LIGHT_LEVEL", "light-level");
    let err = Catalog::from_yaml_str(&raw).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidKey(ref key) if key == "light-level"));
}

#[test]
fn duplicate_sensor_key_is_rejected() {
    let raw = CUSTOM.replace("LIGHT_LEVEL", "TEMPERATURE");
    let err = Catalog::from_yaml_str(&raw).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateKey(_)));
}

#[test]
fn empty_sensor_list_is_rejected() {
    let err = Catalog::from_yaml_str("sensors: []\n").unwrap_err();
    assert!(matches!(err, CatalogError::NoSensors));
    assert!(Catalog::from_yaml_str("sensors: [").is_err());
}

#[test]
fn load_without_path_uses_builtin() {
    let catalog = Catalog::load(None).expect("builtin");
    assert_eq!(catalog, Catalog::builtin());
}

#[test]
fn load_reports_missing_file() {
    let path = std::env::temp_dir().join("tricorder-missing-catalog.yaml");
    let _ = std::fs::remove_file(&path);
    let err = Catalog::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("failed to read catalog"));
}

#[test]
fn json_dump_contains_keys() {
    let json = Catalog::builtin().to_json_pretty().expect("json");
    assert!(json.contains("\"TEMPERATURE\""));
    assert!(json.contains("\"VERTICAL_BAR\""));
    assert!(json.contains("\"environment\""));
}
