//! Idle work: one ingress poll, then the redraw ticker.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::{ExitStatus, HapticsApp};

impl HapticsApp {
    /// Poll the socket, fire the ticker if due, and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        if !self.poll_ingress() {
            self.shutdown();
            event_loop.exit();
            return;
        }

        if self.ticker.tick(Instant::now()) {
            self.request_redraw();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.ticker.next_due()));
    }

    /// Exactly one ingress poll. Returns `false` after a fatal error.
    pub(super) fn poll_ingress(&mut self) -> bool {
        match self.ingress.poll(&mut self.position) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!("Position ingress failed: {e}");
                self.request_exit(ExitStatus::Failure);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread::sleep;
    use std::time::Duration;

    use haptics_common::Position;
    use haptics_config::schema::{MalformedPolicy, WireByteOrder};
    use haptics_ingress::wire::encode;

    use super::super::core::test_support::app_with_peer;
    use super::super::core::ExitStatus;

    const SETTLE: Duration = Duration::from_millis(30);

    #[test]
    fn poll_applies_received_position() {
        let (mut app, peer) = app_with_peer();
        peer.send(&encode([1.0, -1.0, 2.0], WireByteOrder::Native))
            .unwrap();
        sleep(SETTLE);

        assert!(app.poll_ingress());
        assert_eq!(app.position.components(), [10.0, -10.0, 20.0]);
        assert_eq!(app.exit_status(), None);
    }

    #[test]
    fn idle_poll_keeps_position() {
        let (mut app, _peer) = app_with_peer();
        assert!(app.poll_ingress());
        assert_eq!(app.position, Position::ZERO);
    }

    #[test]
    fn malformed_datagram_is_survivable_by_default() {
        let (mut app, peer) = app_with_peer();
        peer.send(&[0u8; 7]).unwrap();
        sleep(SETTLE);

        assert!(app.poll_ingress());
        assert_eq!(app.exit_status(), None);
    }

    #[test]
    fn fatal_ingress_error_requests_failure_exit() {
        let (mut app, peer) = app_with_peer();
        let mut settings = app.ingress.settings().clone();
        settings.on_malformed = MalformedPolicy::Fatal;
        settings.local_port = 0;
        settings.remote_port = peer.local_addr().unwrap().port();
        app.ingress = haptics_ingress::Ingress::connect(settings).unwrap();
        peer.connect(app.ingress.local_addr().unwrap()).unwrap();

        peer.send(&[0u8; 7]).unwrap();
        sleep(SETTLE);

        assert!(!app.poll_ingress());
        assert_eq!(app.exit_status(), Some(ExitStatus::Failure));
    }
}
