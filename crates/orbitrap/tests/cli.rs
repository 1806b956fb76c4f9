use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn orbitrap(config_dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_orbitrap"))
        .env("ORBITRAP_CONFIG_DIR", config_dir.path())
        .env_remove("ORBITRAP_CONFIG")
        .env_remove("ORBITRAP_SHADER_DIR")
        .env("RUST_LOG", "error")
        .args(args)
        .output()
        .expect("failed to run orbitrap")
}

#[test]
fn help_lists_shader_options() {
    let root = TempDir::new().unwrap();
    let output = orbitrap(&root, &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--shader-dir"));
    assert!(stdout.contains("--time-scale"));
}

#[test]
fn missing_shader_directory_exits_with_setup_code() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("no-such-shaders");

    let output = orbitrap(&root, &["--shader-dir", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_fragment_shader_exits_with_setup_code() {
    let root = TempDir::new().unwrap();
    let shaders = root.path().join("shaders");
    fs::create_dir_all(&shaders).unwrap();
    fs::write(shaders.join("vert.glsl"), "#version 140\nvoid main() {}\n").unwrap();

    let output = orbitrap(&root, &["--shader-dir", shaders.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn malformed_default_config_exits_with_setup_code() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("config.toml"), "[window\nwidth = 3").unwrap();

    let output = orbitrap(&root, &[]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn invalid_time_scale_exits_with_setup_code() {
    let root = TempDir::new().unwrap();

    let output = orbitrap(&root, &["--time-scale", "-2"]);

    assert_eq!(output.status.code(), Some(1));
}
