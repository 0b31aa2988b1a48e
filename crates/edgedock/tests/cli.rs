use std::process::Command;

#[test]
fn help_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_edgedock"));
    cmd.arg("--help");

    // Act
    let output = cmd.output().expect("failed to execute edgedock");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("auto-hide panel"));
}

#[test]
fn version_exits_successfully() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_edgedock"));
    cmd.arg("--version");

    // Act
    let output = cmd.output().expect("failed to execute edgedock");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("edgedock"));
}

#[test]
fn run_rejects_unknown_edge() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_edgedock"));
    cmd.args(["run", "--edge", "middle"]);

    // Act
    let output = cmd.output().expect("failed to execute edgedock");

    // Assert
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown edge 'middle'"));
}

#[test]
fn init_help_mentions_force() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_edgedock"));
    cmd.args(["init", "--help"]);

    // Act
    let output = cmd.output().expect("failed to execute edgedock");

    // Assert
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--force"));
}

#[test]
fn debug_pointer_rejects_non_numeric_count() {
    // Arrange
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_edgedock"));
    cmd.args(["debug", "pointer", "--samples", "lots"]);

    // Act
    let output = cmd.output().expect("failed to execute edgedock");

    // Assert
    assert!(!output.status.success());
}
