//! HapticsApp struct definition and constructor.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use haptics_common::Position;
use haptics_config::schema::HapticsConfig;
use haptics_ingress::Ingress;
use haptics_renderer::RenderState;

use crate::ticker::AngleTicker;

/// How the event loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

/// Top-level application state.
pub struct HapticsApp {
    pub(super) config: HapticsConfig,

    // Latest received position and the socket feeding it
    pub(super) position: Position,
    pub(super) ingress: Ingress,

    pub(super) ticker: AngleTicker,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Set once the app has decided to stop
    pub(super) exit: Option<ExitStatus>,
}

impl HapticsApp {
    pub fn new(config: HapticsConfig, ingress: Ingress) -> Self {
        let ticker = AngleTicker::from_config(&config.animation, Instant::now());
        Self {
            config,
            position: Position::ZERO,
            ingress,
            ticker,
            window: None,
            render_state: None,
            exit: None,
        }
    }

    /// Record why the app is stopping. A failure is never downgraded.
    pub(super) fn request_exit(&mut self, status: ExitStatus) {
        self.exit = Some(match self.exit {
            Some(ExitStatus::Failure) => ExitStatus::Failure,
            _ => status,
        });
    }

    pub fn exit_status(&self) -> Option<ExitStatus> {
        self.exit
    }

    /// Process exit code for the recorded status (success if none).
    pub fn exit_code(&self) -> ExitCode {
        match self.exit_status() {
            Some(ExitStatus::Failure) => ExitCode::FAILURE,
            _ => ExitCode::SUCCESS,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::app_with_peer;
    use super::*;

    #[test]
    fn new_app_starts_at_origin_without_window() {
        let (app, _peer) = app_with_peer();
        assert_eq!(app.position, Position::ZERO);
        assert!(app.window.is_none());
        assert!(app.render_state.is_none());
        assert_eq!(app.exit_status(), None);
        assert_eq!(app.ticker.angle(), 0.0);
    }

    #[test]
    fn failure_is_sticky() {
        let (mut app, _peer) = app_with_peer();
        app.request_exit(ExitStatus::Failure);
        app.request_exit(ExitStatus::Success);
        assert_eq!(app.exit_status(), Some(ExitStatus::Failure));
    }

    #[test]
    fn success_can_escalate_to_failure() {
        let (mut app, _peer) = app_with_peer();
        app.request_exit(ExitStatus::Success);
        assert_eq!(app.exit_status(), Some(ExitStatus::Success));
        app.request_exit(ExitStatus::Failure);
        assert_eq!(app.exit_status(), Some(ExitStatus::Failure));
    }
}
