//! Frame rendering.

use super::core::HapticsApp;

impl HapticsApp {
    /// Draw the scene at the current position and angle.
    ///
    /// Returns `false` if the renderer hit an unrecoverable error.
    pub(super) fn render_frame(&mut self) -> bool {
        let Some(ref mut rs) = self.render_state else {
            return true;
        };

        match rs.render_scene(&self.position, self.ticker.angle() as f32) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Render error: {e}");
                false
            }
        }
    }
}
