//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = HapticsConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_bad_bind_address() {
    let mut config = HapticsConfig::default();
    config.network.bind_address = "not-an-ip".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("network.bind_address"));
}

#[test]
fn accepts_ipv6_bind_address() {
    let mut config = HapticsConfig::default();
    config.network.bind_address = "::".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_remote_port_zero() {
    let mut config = HapticsConfig::default();
    config.network.remote_port = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("network.remote_port"));
}

#[test]
fn local_port_zero_is_allowed() {
    let mut config = HapticsConfig::default();
    config.network.local_port = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_datagrams_per_poll() {
    let mut config = HapticsConfig::default();
    config.network.max_datagrams_per_poll = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("network.max_datagrams_per_poll"));
}

#[test]
fn catches_non_finite_scale() {
    let mut config = HapticsConfig::default();
    config.transform.scale = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("transform.scale"));
}

#[test]
fn catches_empty_title() {
    let mut config = HapticsConfig::default();
    config.window.title = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.title"));
}

#[test]
fn catches_period_out_of_range() {
    let mut config = HapticsConfig::default();
    config.animation.period_ms = 5000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.period_ms"));
}

#[test]
fn catches_far_not_beyond_near() {
    let mut config = HapticsConfig::default();
    config.scene.camera.near = 10.0;
    config.scene.camera.far = 5.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.camera.far"));
}

#[test]
fn catches_color_channel_out_of_range() {
    let mut config = HapticsConfig::default();
    config.scene.marker.color = [1.5, 0.0, 0.0, 1.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.marker.color[0]"));
}

#[test]
fn catches_global_ambient_out_of_range() {
    let mut config = HapticsConfig::default();
    config.scene.lighting.global_ambient = [0.2, -0.1, 0.2];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.lighting.global_ambient[1]"));
}

#[test]
fn catches_empty_floor_grid() {
    let mut config = HapticsConfig::default();
    config.scene.floor.grid_y = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.floor.grid_y"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = HapticsConfig::default();
    config.network.remote_port = 0;
    config.scene.mesh_detail = 1;
    config.scene.lighting.shininess = 500.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("network.remote_port"));
    assert!(err.contains("scene.mesh_detail"));
    assert!(err.contains("scene.lighting.shininess"));
}
