//! Scene composition: what gets drawn, where, and in which order.

use haptics_common::Position;
use haptics_config::schema::SceneConfig;

use super::floor::FloorLayout;
use crate::matrix::{self as mat, Mat4};
use crate::mesh::WHITE;

/// Which GPU mesh a draw uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    /// Unit sphere, shared by the marker and the static sphere.
    Sphere,
    /// Unit cube.
    Cube,
    /// Pre-built floor tiles in world space.
    Floor,
}

/// One draw call: mesh, model transform, and tint.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub label: &'static str,
    pub mesh: MeshKind,
    pub model: Mat4,
    pub color: [f32; 4],
}

/// Upper bound on draws per frame; sizes the per-draw uniform buffer.
pub const MAX_DRAW_ITEMS: usize = 4;

/// Resolved scene geometry and colors.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub marker_radius: f32,
    pub marker_color: [f32; 4],
    pub sphere_center: [f32; 3],
    pub sphere_radius: f32,
    pub sphere_color: [f32; 4],
    pub cube_center: [f32; 3],
    pub cube_side: f32,
    pub cube_color: [f32; 4],
    pub cube_spin: bool,
    pub floor: FloorLayout,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

impl SceneLayout {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            marker_radius: config.marker.radius,
            marker_color: config.marker.color,
            sphere_center: config.sphere.center,
            sphere_radius: config.sphere.radius,
            sphere_color: config.sphere.color,
            cube_center: config.cube.center,
            cube_side: config.cube.side,
            cube_color: config.cube.color,
            cube_spin: config.cube.spin,
            floor: FloorLayout::from_config(&config.floor),
        }
    }

    /// Where the marker is drawn for a given position.
    pub fn marker_translation(position: &Position) -> [f32; 3] {
        position.scene_placement()
    }

    /// Draws for one frame: marker, green sphere, blue cube, floor.
    ///
    /// The opaque marker goes first; the translucent solids are blended over
    /// whatever is already in the framebuffer, without depth sorting.
    pub fn draw_list(&self, position: &Position, angle_degrees: f32) -> Vec<DrawItem> {
        let [mx, my, mz] = Self::marker_translation(position);
        let [sx, sy, sz] = self.sphere_center;
        let [cx, cy, cz] = self.cube_center;

        let cube_rotation = if self.cube_spin {
            mat::rotate_y(angle_degrees.to_radians())
        } else {
            mat::IDENTITY
        };

        vec![
            DrawItem {
                label: "marker",
                mesh: MeshKind::Sphere,
                model: mat::mul(&mat::translate(mx, my, mz), &mat::scale(self.marker_radius)),
                color: self.marker_color,
            },
            DrawItem {
                label: "sphere",
                mesh: MeshKind::Sphere,
                model: mat::mul(&mat::translate(sx, sy, sz), &mat::scale(self.sphere_radius)),
                color: self.sphere_color,
            },
            DrawItem {
                label: "cube",
                mesh: MeshKind::Cube,
                model: mat::mul(
                    &mat::translate(cx, cy, cz),
                    &mat::mul(&cube_rotation, &mat::scale(self.cube_side)),
                ),
                color: self.cube_color,
            },
            DrawItem {
                label: "floor",
                mesh: MeshKind::Floor,
                model: mat::IDENTITY,
                color: WHITE,
            },
        ]
    }
}
