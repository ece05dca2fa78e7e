use haptics_common::Position;

use crate::gpu::{DrawUniforms, RendererError};

use super::helpers::{log_first_frame, surface_recovery, SurfaceRecovery};
use super::state::RenderState;

impl RenderState {
    /// Render one frame: clear, draw the scene list in order, present.
    ///
    /// A lost or outdated surface is reconfigured and the frame dropped; a
    /// timeout drops the frame. Anything else is returned as an error.
    pub fn render_scene(
        &mut self,
        position: &Position,
        angle_degrees: f32,
    ) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                return match surface_recovery(&e) {
                    SurfaceRecovery::Reconfigure => {
                        tracing::debug!("Surface {e}, reconfiguring");
                        self.gpu.reconfigure();
                        Ok(())
                    }
                    SurfaceRecovery::Skip => {
                        tracing::warn!("Skipping frame: {e}");
                        Ok(())
                    }
                    SurfaceRecovery::Fatal => {
                        tracing::error!("Failed to get surface texture: {e}");
                        Err(e.into())
                    }
                };
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let camera_view = self.camera.view();
        let projection = self.camera.projection(self.gpu.size.aspect());
        let draws = self.layout.draw_list(position, angle_degrees);

        for (index, item) in draws.iter().enumerate() {
            self.pipeline.update_draw(
                &self.gpu.queue,
                index,
                &DrawUniforms::new(item, &camera_view, &projection),
            );
        }

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("haptics frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("haptics scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.pipeline.bind(&mut pass);
            for (index, item) in draws.iter().enumerate() {
                self.pipeline
                    .draw(&mut pass, index, self.meshes.get(item.mesh));
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
