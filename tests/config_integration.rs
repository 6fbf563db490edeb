//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::path::PathBuf;

use serial_test::serial;
use voxray::config::AppConfig;
use voxray_core::UniverseKind;
use voxray_render::PassKind;

fn scratch_config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("voxray-config-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("VOXRAY_VIEWPORT__WIDTH", "320");
    std::env::set_var("VOXRAY_DEBUG__DEPTH_VIEW", "true");
    let config = AppConfig::load();
    std::env::remove_var("VOXRAY_VIEWPORT__WIDTH");
    std::env::remove_var("VOXRAY_DEBUG__DEPTH_VIEW");

    let config = config.unwrap();
    assert_eq!(config.viewport.width, 320);
    assert_eq!(config.debug.depth_view, Some(true));
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let from_file = AppConfig::load().unwrap();
    let builtin = AppConfig::default();
    assert_eq!(from_file.viewport.width, builtin.viewport.width);
    assert_eq!(from_file.camera.position, builtin.camera.position);
    assert_eq!(from_file.scene.universe, builtin.scene.universe);
    assert_eq!(from_file.rendering.passes, builtin.rendering.passes);
    assert_eq!(from_file.rendering.atlas_path, None);
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = scratch_config_dir("layering");
    std::fs::write(
        dir.join("default.toml"),
        "[viewport]\nwidth = 100\nheight = 50\n\n[scene]\nuniverse = \"sphere\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("user.toml"),
        "[viewport]\nheight = 80\n\n[scene]\nuniverse = \"empty\"\n\n[[rendering.passes]]\nkind = \"cube\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).ok();

    let config = config.unwrap();
    assert_eq!(config.viewport.width, 100);
    assert_eq!(config.viewport.height, 80);
    assert_eq!(config.scene.universe, UniverseKind::Empty);
    assert_eq!(config.rendering.passes.len(), 1);
    assert_eq!(config.rendering.passes[0].kind, PassKind::Cube);
    assert!(!config.rendering.passes[0].skip);
}

#[test]
#[serial]
fn test_invalid_values_are_reported() {
    let dir = scratch_config_dir("invalid");
    std::fs::write(dir.join("default.toml"), "[camera]\nposition = [0.0, 0.0, 0.0]\nyaw = 0.0\npitch = 0.0\nfov_degrees = 90.0\nnear = 5.0\nfar = 1.0\n").unwrap();

    let result = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).ok();

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_unknown_pass_kind_fails() {
    let dir = scratch_config_dir("bad-pass");
    std::fs::write(dir.join("default.toml"), "[[rendering.passes]]\nkind = \"wireframe\"\n").unwrap();

    let result = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).ok();
    assert!(result.is_err());
}
