use std::process::Command;

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn tricorder_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_tricorder").expect("tricorder test binary not built")
}

#[test]
fn tricorder_help_mentions_name() {
    let output = Command::new(tricorder_bin())
        .arg("--help")
        .output()
        .expect("run tricorder --help");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.to_lowercase().contains("tricorder"));
    assert!(combined.contains("--secret-combo-secs"));
}

#[test]
fn tricorder_dump_catalog_prints_builtin_sensors() {
    let output = Command::new(tricorder_bin())
        .arg("--dump-catalog")
        .output()
        .expect("run tricorder --dump-catalog");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("catalog is JSON");
    let keys: Vec<&str> = parsed["sensors"]
        .as_array()
        .expect("sensors array")
        .iter()
        .filter_map(|sensor| sensor["key"].as_str())
        .collect();
    assert!(keys.contains(&"TEMPERATURE"));
    assert!(keys.contains(&"CLOCK"));
}

#[test]
fn tricorder_rejects_unknown_combo_duration() {
    let output = Command::new(tricorder_bin())
        .args(["--secret-combo-secs", "4", "--dump-catalog"])
        .output()
        .expect("run tricorder with a bad combo duration");
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("2, 3, 5, 7, 10"));
}

#[test]
fn tricorder_reports_missing_catalog_file() {
    let output = Command::new(tricorder_bin())
        .args(["--catalog", "/definitely/missing/catalog.yaml", "--dump-catalog"])
        .output()
        .expect("run tricorder with a missing catalog");
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("catalog"));
}
