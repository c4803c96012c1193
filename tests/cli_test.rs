#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn run_bin(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_default_run_exits_zero() {
    let output = run_bin(env!("CARGO_BIN_EXE_solid-lld"), &[]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().filter(|line| line.starts_with("== ")).count(), 5);
    assert!(stdout.contains("Connecting to Postgres Database..."));
    assert!(!stderr_of(&output).contains('❌'));
}

#[test]
fn test_legacy_lsp_exits_one_after_sparrow() {
    let output = run_bin(env!("CARGO_BIN_EXE_lsp"), &["--legacy"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        "== LSP: Liskov Substitution Principle (legacy) ==\nsparrow: I can fly!\n"
    );
    assert!(stderr_of(&output)
        .contains("❌ Ostrich was asked to fly but cannot: I cannot fly!"));
}

#[test]
fn test_fixed_lsp_exits_zero() {
    let output = run_bin(env!("CARGO_BIN_EXE_lsp"), &[]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output)
        .ends_with("ostrich: I cannot fly, but I can run!\nsparrow: I can fly!\n"));
}

#[test]
fn test_legacy_isp_exits_one_after_dog_runs() {
    let output = run_bin(env!("CARGO_BIN_EXE_isp"), &["--legacy"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        "== ISP: Interface Segregation Principle (legacy) ==\nDog runs\n"
    );
    assert!(stderr_of(&output).contains("❌ Dog was asked to fly but cannot"));
}

#[test]
fn test_invalid_price_exits_two() {
    let output = run_bin(env!("CARGO_BIN_EXE_solid-lld"), &["--price=-1"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output)
        .contains("❌ Setting 'ocp.total_price' has invalid value '-1'"));
}

#[test]
fn test_missing_config_file_exits_two() {
    let output = run_bin(
        env!("CARGO_BIN_EXE_dip"),
        &["--config", "/definitely/not/here.toml"],
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("❌ Configuration problem"));
}

#[test]
fn test_each_principle_binary_runs_its_own_demo() {
    let cases = [
        (env!("CARGO_BIN_EXE_srp"), "== SRP: Single Responsibility Principle (fixed) =="),
        (env!("CARGO_BIN_EXE_ocp"), "== OCP: Open/Closed Principle (fixed) =="),
        (env!("CARGO_BIN_EXE_isp"), "== ISP: Interface Segregation Principle (fixed) =="),
        (env!("CARGO_BIN_EXE_dip"), "== DIP: Dependency Inversion Principle (fixed) =="),
    ];
    for (bin, header) in cases {
        let output = run_bin(bin, &[]);
        assert_eq!(output.status.code(), Some(0), "{}", bin);
        let stdout = stdout_of(&output);
        assert_eq!(stdout.lines().next(), Some(header));
        assert_eq!(stdout.lines().filter(|line| line.starts_with("== ")).count(), 1);
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_stdout_exits_three() {
    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_ocp"))
        .env_remove("RUST_LOG")
        .stdout(full)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_of(&output).contains("❌ Could not write demonstration output"));
}
