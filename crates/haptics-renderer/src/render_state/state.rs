use std::sync::Arc;
use winit::window::Window;

use haptics_config::schema::SceneConfig;

use crate::gpu::{GpuContext, RendererError, SceneUniforms};
use crate::mesh;
use crate::pipeline::{DepthTexture, GpuMesh, MeshPipeline};
use crate::scene::{Camera, MeshKind, SceneLayout};

use super::helpers::clear_color;

/// GPU meshes for every [`MeshKind`].
pub(super) struct SceneMeshes {
    pub sphere: GpuMesh,
    pub cube: GpuMesh,
    pub floor: GpuMesh,
}

impl SceneMeshes {
    pub fn get(&self, kind: MeshKind) -> &GpuMesh {
        match kind {
            MeshKind::Sphere => &self.sphere,
            MeshKind::Cube => &self.cube,
            MeshKind::Floor => &self.floor,
        }
    }
}

/// Core rendering state: GPU context, mesh pipeline, static meshes and the
/// scene they are arranged into.
pub struct RenderState {
    pub gpu: GpuContext,
    pub(super) pipeline: MeshPipeline,
    pub(super) meshes: SceneMeshes,
    pub(super) depth: DepthTexture,
    pub layout: SceneLayout,
    pub camera: Camera,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>, scene: &SceneConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, scene.vsync).await?;

        let pipeline = MeshPipeline::new(
            &gpu.device,
            gpu.format(),
            gpu.uniform_alignment(),
            &SceneUniforms::from_config(&scene.lighting),
        );

        let layout = SceneLayout::from_config(scene);
        let detail = scene.mesh_detail;
        let meshes = SceneMeshes {
            sphere: GpuMesh::new(
                &gpu.device,
                "sphere mesh",
                &mesh::generate_sphere(detail, detail),
            ),
            cube: GpuMesh::new(&gpu.device, "cube mesh", &mesh::generate_cube()),
            floor: GpuMesh::new(
                &gpu.device,
                "floor mesh",
                &mesh::generate_floor(&layout.floor),
            ),
        };

        let depth = DepthTexture::new(&gpu.device, gpu.size.width, gpu.size.height);

        tracing::debug!(
            sphere_vertices = meshes.sphere.vertex_count,
            floor_vertices = meshes.floor.vertex_count,
            "Scene meshes uploaded"
        );

        Ok(Self {
            gpu,
            pipeline,
            meshes,
            depth,
            layout,
            camera: Camera::from_config(&scene.camera),
            clear_color: clear_color(scene.background),
        })
    }

    /// Handle a window resize by reconfiguring the surface and depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.depth = DepthTexture::new(&self.gpu.device, self.gpu.size.width, self.gpu.size.height);
    }
}
