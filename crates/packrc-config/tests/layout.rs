//! Tests for layout loading from packrc.toml and PACKRC_* variables.

use std::fs;
use std::path::PathBuf;

use packrc_config::{BuildMode, ConfigError, ProjectLayout, build_configuration_with};
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    unsafe {
        std::env::remove_var("PACKRC_DEV_PORT");
        std::env::remove_var("PACKRC_OUTPUT_DIR");
    }
}

#[test]
#[serial]
fn defaults_without_layout_file() {
    clear_env();
    let dir = TempDir::new().expect("tempdir");

    let layout = ProjectLayout::load(dir.path()).expect("load layout");

    assert_eq!(layout.root, dir.path());
    assert_eq!(layout.source_dir, PathBuf::from("src"));
    assert_eq!(layout.output_dir, PathBuf::from("dist"));
    assert_eq!(layout.dev_port, 3030);
    assert_eq!(layout.entries, vec!["@babel/polyfill", "./scripts/index.js"]);
}

#[test]
#[serial]
fn layout_file_overrides_defaults() {
    clear_env();
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("packrc.toml"),
        r#"
source_dir = "app"
output_dir = "public"
entries = ["./main.js"]
dev_port = 4000
"#,
    )
    .expect("write layout");

    let layout = ProjectLayout::load(dir.path()).expect("load layout");
    assert_eq!(layout.context_dir(), dir.path().join("app"));
    assert_eq!(layout.output_path(), dir.path().join("public"));
    assert_eq!(layout.entries, vec!["./main.js"]);
    assert_eq!(layout.dev_port, 4000);
    // Untouched keys keep their defaults
    assert_eq!(layout.html_template, "./index.html");

    let config = build_configuration_with(BuildMode::Development, &layout);
    assert_eq!(config.entry, vec!["./main.js"]);
    assert_eq!(config.dev_server.port, 4000);
}

#[test]
#[serial]
fn environment_overrides_layout_file() {
    clear_env();
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("packrc.toml"), "dev_port = 4000\n").expect("write layout");

    unsafe {
        std::env::set_var("PACKRC_DEV_PORT", "5050");
        std::env::set_var("PACKRC_OUTPUT_DIR", "out");
    }
    let layout = ProjectLayout::load(dir.path());
    clear_env();

    let layout = layout.expect("load layout");
    assert_eq!(layout.dev_port, 5050);
    assert_eq!(layout.output_dir, PathBuf::from("out"));
}

#[test]
#[serial]
fn malformed_layout_file_is_a_load_error() {
    clear_env();
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("packrc.toml"), "dev_port = \"not a port\"\n")
        .expect("write layout");

    let err = ProjectLayout::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Load(_)));
    assert!(err.hint().is_some());
}
