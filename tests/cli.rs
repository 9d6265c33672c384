//! CLI integration tests.

use std::fs;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_u-fleet"))
}

#[test]
fn plan_writes_result_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.json");
    let output = dir.path().join("output.json");
    fs::write(
        &input,
        r#"{
            "machineCount": 2,
            "fields": [
                {"x": 0, "y": 0, "width": 10, "height": 30},
                {"x": 100, "y": 50, "width": 40, "height": 60},
                {"x": 20, "y": 200, "width": 30, "height": 30}
            ]
        }"#,
    )
    .unwrap();

    let status = bin()
        .arg("plan")
        .arg(&input)
        .arg(&output)
        .status()
        .expect("failed to run u-fleet");
    assert!(status.success(), "plan exited with {status:?}");

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let machines = v["machines"].as_array().unwrap();
    assert_eq!(machines.len(), 2);
    assert_eq!(machines[0]["machineId"], 1);
    assert_eq!(machines[0]["color"], "#3b82f6");
    assert!(v["totalTime"].as_f64().unwrap() > 0.0);
    let efficiency = v["efficiency"].as_f64().unwrap();
    assert!((0.6..=0.95).contains(&efficiency));
    assert!(v.get("error").is_none());
}

#[test]
fn plan_failure_writes_fallback_and_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    let output = dir.path().join("output.json");
    fs::write(&input, "not json").unwrap();

    let status = bin()
        .arg("plan")
        .arg(&input)
        .arg(&output)
        .status()
        .expect("failed to run u-fleet");
    assert!(!status.success());

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(v["machines"].as_array().unwrap().len(), 0);
    assert_eq!(v["totalTime"], 0.0);
    assert_eq!(v["efficiency"], 0.0);
    assert!(v["error"].as_str().unwrap().contains("broken.json"));
}

#[test]
fn plan_rejects_zero_machines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.json");
    let output = dir.path().join("output.json");
    fs::write(
        &input,
        r#"{"machineCount": 0, "fields": [{"x": 0, "y": 0, "width": 1, "height": 1}]}"#,
    )
    .unwrap();

    let status = bin().arg("plan").arg(&input).arg(&output).status().unwrap();
    assert!(!status.success());

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert!(v["error"].as_str().unwrap().contains("invalid request"));
}

#[test]
fn generate_then_plan() {
    let dir = tempfile::tempdir().unwrap();
    let request = dir.path().join("request.json");
    let output = dir.path().join("output.json");

    let status = bin()
        .args(["generate", "--fields", "12", "--machines", "3", "--seed", "7", "--output"])
        .arg(&request)
        .status()
        .unwrap();
    assert!(status.success());

    let status = bin().arg("plan").arg(&request).arg(&output).status().unwrap();
    assert!(status.success());

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let machines = v["machines"].as_array().unwrap();
    assert!(!machines.is_empty() && machines.len() <= 3);
}

#[test]
fn generate_to_stdout_is_valid_request() {
    let out = bin()
        .args(["generate", "--fields", "4", "--machines", "2"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["machineCount"], 2);
    assert_eq!(v["fields"].as_array().unwrap().len(), 4);
}
