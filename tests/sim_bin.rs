use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "10"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 10);
    assert_eq!(v["random_wins"], 0);
    assert_eq!(
        v["ai_wins"].as_u64().unwrap() + v["draws"].as_u64().unwrap(),
        10
    );
}

#[test]
fn sim_library_is_reproducible() {
    let a = tictactoe::simulate(7, 6).unwrap();
    let b = tictactoe::simulate(7, 6).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.games, 6);
    assert_eq!(a.random_wins, 0);
}

#[test]
fn sim_binary_rejects_missing_args() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
