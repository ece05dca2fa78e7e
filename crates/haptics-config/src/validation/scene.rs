//! Scene validation (camera, lighting, solids, floor).

use crate::schema::HapticsConfig;

use super::helpers::{validate_color, validate_range, validate_range_f64};

/// Validate all scene-related constraints.
pub(crate) fn validate_scene(errors: &mut Vec<String>, config: &HapticsConfig) {
    let scene = &config.scene;

    validate_color(errors, "scene.background", &scene.background);
    validate_range(errors, "scene.mesh_detail", scene.mesh_detail, 3, 256);

    // Camera
    let camera = &scene.camera;
    validate_range_f64(
        errors,
        "scene.camera.fov_degrees",
        f64::from(camera.fov_degrees),
        1.0,
        179.0,
    );
    validate_range_f64(
        errors,
        "scene.camera.near",
        f64::from(camera.near),
        0.001,
        1000.0,
    );
    if camera.far.is_nan() || camera.far <= camera.near {
        errors.push(format!(
            "scene.camera.far = {} must be greater than scene.camera.near = {}",
            camera.far, camera.near
        ));
    }
    validate_range_f64(
        errors,
        "scene.camera.distance",
        f64::from(camera.distance),
        0.0,
        1000.0,
    );

    // Lighting
    let light = &scene.lighting;
    validate_color(
        errors,
        "scene.lighting.global_ambient",
        &light.global_ambient,
    );
    validate_color(errors, "scene.lighting.ambient", &light.ambient);
    validate_color(errors, "scene.lighting.diffuse", &light.diffuse);
    validate_color(errors, "scene.lighting.specular", &light.specular);
    validate_color(
        errors,
        "scene.lighting.material_specular",
        &light.material_specular,
    );
    validate_range_f64(
        errors,
        "scene.lighting.shininess",
        f64::from(light.shininess),
        0.0,
        128.0,
    );

    // Solids
    validate_range_f64(
        errors,
        "scene.marker.radius",
        f64::from(scene.marker.radius),
        0.001,
        100.0,
    );
    validate_color(errors, "scene.marker.color", &scene.marker.color);
    validate_range_f64(
        errors,
        "scene.sphere.radius",
        f64::from(scene.sphere.radius),
        0.001,
        100.0,
    );
    validate_color(errors, "scene.sphere.color", &scene.sphere.color);
    validate_range_f64(
        errors,
        "scene.cube.side",
        f64::from(scene.cube.side),
        0.001,
        100.0,
    );
    validate_color(errors, "scene.cube.color", &scene.cube.color);

    // Floor
    let floor = &scene.floor;
    validate_range(errors, "scene.floor.grid_x", floor.grid_x, 1, 256);
    validate_range(errors, "scene.floor.grid_y", floor.grid_y, 1, 256);
    validate_range_f64(
        errors,
        "scene.floor.tile_size",
        f64::from(floor.tile_size),
        0.001,
        100.0,
    );
    validate_color(errors, "scene.floor.tile_color", &floor.tile_color);
    validate_color(errors, "scene.floor.gap_color", &floor.gap_color);
}
