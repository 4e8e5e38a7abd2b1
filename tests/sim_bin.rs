use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "--rows", "4", "--cols", "5"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["first"], "Computer");
    assert_eq!(v["status"], "PlayerLost");
    assert_eq!(v["winner"], "Computer");
    assert_eq!(v["moves"].as_array().map(Vec::len), Some(8));
    assert_eq!(v["final_size"], serde_json::json!([1, 1]));
}

#[test]
fn sim_binary_rejects_bad_config() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "--rows", "2", "--cols", "2", "--spoiled-row", "3"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
