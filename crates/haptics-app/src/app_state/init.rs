//! Window creation and renderer initialization.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes};

use haptics_config::schema::{StartupMode, WindowConfig};
use haptics_renderer::RenderState;

use super::core::HapticsApp;

impl HapticsApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = window_attributes(&self.config.window);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let render_state = pollster::block_on(RenderState::new(window.clone(), &self.config.scene));

        match render_state {
            Ok(rs) => self.render_state = Some(rs),
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        tracing::info!(
            title = %self.config.window.title,
            mode = ?self.config.window.startup_mode,
            "Window created and renderer initialized"
        );
        window.request_redraw();
        self.window = Some(window);
        true
    }
}

/// Window attributes for the configured title and startup mode.
pub(super) fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(
            f64::from(config.width),
            f64::from(config.height),
        ));

    match config.startup_mode {
        StartupMode::Windowed => attrs,
        StartupMode::Maximized => attrs.with_maximized(true),
        StartupMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
    }
}
