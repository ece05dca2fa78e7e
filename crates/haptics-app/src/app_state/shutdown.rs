//! Shutdown: release the renderer before the window it draws into.

use super::core::HapticsApp;

impl HapticsApp {
    /// Release GPU resources and the window. Safe to call more than once.
    pub(super) fn shutdown(&mut self) {
        if self.render_state.is_none() && self.window.is_none() {
            return;
        }
        tracing::info!("Releasing renderer and window");

        // The surface holds a handle to the window; drop it first.
        self.render_state = None;
        self.window = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::super::core::test_support::app_with_peer;
    use super::super::core::ExitStatus;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let (mut app, _peer) = app_with_peer();

        app.shutdown();

        assert!(app.render_state.is_none());
        assert!(app.window.is_none());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let (mut app, _peer) = app_with_peer();

        app.shutdown();
        app.shutdown();

        assert!(app.render_state.is_none());
    }

    #[test]
    fn shutdown_leaves_exit_status_alone() {
        let (mut app, _peer) = app_with_peer();
        app.request_exit(ExitStatus::Success);

        app.shutdown();

        assert_eq!(app.exit_status(), Some(ExitStatus::Success));
    }
}
