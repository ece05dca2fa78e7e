//! wgpu render pipeline shared by every mesh in the scene.
//!
//! Bind group 0 carries the light, bind group 1 the per-draw transforms at a
//! dynamic offset. Alpha blending with depth test and depth writes on, no
//! culling and no sorting: translucent solids blend over whatever was drawn
//! before them.

use std::num::NonZeroU64;

use wgpu::util::DeviceExt;

use crate::gpu::{draw_uniform_stride, DrawUniforms, SceneUniforms};
use crate::mesh::MeshVertex;
use crate::scene::MAX_DRAW_ITEMS;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Vertex buffer for one mesh.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub vertex_count: u32,
}

impl GpuMesh {
    pub fn new(device: &wgpu::Device, label: &str, vertices: &[MeshVertex]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self {
            vertex_buffer,
            vertex_count: vertices.len() as u32,
        }
    }
}

/// Depth attachment sized to the surface.
pub struct DepthTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl DepthTexture {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth buffer"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }
}

/// Pipeline, light uniforms and the per-draw uniform slots.
///
/// The light is fixed for the lifetime of the pipeline.
pub struct MeshPipeline {
    pipeline: wgpu::RenderPipeline,
    scene_bind_group: wgpu::BindGroup,
    draw_buffer: wgpu::Buffer,
    draw_bind_group: wgpu::BindGroup,
    draw_stride: u64,
}

impl MeshPipeline {
    /// Create the pipeline for the given surface format.
    ///
    /// `uniform_alignment` is the device's
    /// `min_uniform_buffer_offset_alignment`.
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        uniform_alignment: u64,
        scene: &SceneUniforms,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/mesh.wgsl").into()),
        });

        let scene_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("scene uniforms"),
            contents: bytemuck::bytes_of(scene),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let draw_stride = draw_uniform_stride(uniform_alignment);
        let draw_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("draw uniforms"),
            size: draw_stride * MAX_DRAW_ITEMS as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let scene_layout = uniform_layout::<SceneUniforms>(device, "scene bind group layout", false);
        let draw_layout = uniform_layout::<DrawUniforms>(device, "draw bind group layout", true);

        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene bind group"),
            layout: &scene_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });

        let draw_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("draw bind group"),
            layout: &draw_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &draw_buffer,
                    offset: 0,
                    size: NonZeroU64::new(std::mem::size_of::<DrawUniforms>() as u64),
                }),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh pipeline layout"),
            bind_group_layouts: &[&scene_layout, &draw_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[MeshVertex::LAYOUT],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            scene_bind_group,
            draw_buffer,
            draw_bind_group,
            draw_stride,
        }
    }

    /// Upload the per-draw block for draw slot `index`.
    pub fn update_draw(&self, queue: &wgpu::Queue, index: usize, uniforms: &DrawUniforms) {
        debug_assert!(index < MAX_DRAW_ITEMS);
        queue.write_buffer(
            &self.draw_buffer,
            self.draw_stride * index as u64,
            bytemuck::bytes_of(uniforms),
        );
    }

    /// Bind the pipeline and the light once per pass.
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.scene_bind_group, &[]);
    }

    /// Draw `mesh` with the uniforms in slot `index`.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, index: usize, mesh: &GpuMesh) {
        let offset = (self.draw_stride * index as u64) as u32;
        pass.set_bind_group(1, &self.draw_bind_group, &[offset]);
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.draw(0..mesh.vertex_count, 0..1);
    }
}

fn uniform_layout<T>(device: &wgpu::Device, label: &str, dynamic: bool) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: dynamic,
                min_binding_size: NonZeroU64::new(std::mem::size_of::<T>() as u64),
            },
            count: None,
        }],
    })
}
