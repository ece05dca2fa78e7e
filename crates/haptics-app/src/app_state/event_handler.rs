//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use super::core::{ExitStatus, HapticsApp};

/// What a key press means to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum KeyAction {
    Exit,
    /// Logged by name and otherwise ignored.
    Ignore(String),
}

pub(super) fn key_action(key: &Key) -> KeyAction {
    match key {
        Key::Named(NamedKey::Escape) => KeyAction::Exit,
        Key::Named(named) => KeyAction::Ignore(format!("{named:?}")),
        Key::Character(c) => KeyAction::Ignore(c.to_string()),
        Key::Dead(Some(c)) => KeyAction::Ignore(format!("dead {c}")),
        Key::Dead(None) => KeyAction::Ignore("dead".to_string()),
        Key::Unidentified(native) => KeyAction::Ignore(format!("{native:?}")),
    }
}

impl ApplicationHandler for HapticsApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            self.request_exit(ExitStatus::Failure);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.request_exit(ExitStatus::Success);
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                    self.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event_loop, event);
            }

            WindowEvent::RedrawRequested => {
                if self.exit.is_some() {
                    event_loop.exit();
                    return;
                }
                if !self.render_frame() {
                    self.request_exit(ExitStatus::Failure);
                    self.shutdown();
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit.is_some() {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl HapticsApp {
    /// Escape quits; every other key press is logged and ignored.
    fn handle_keyboard_input(&mut self, event_loop: &ActiveEventLoop, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }

        match key_action(&event.logical_key) {
            KeyAction::Exit => {
                tracing::info!("Escape pressed, exiting");
                self.request_exit(ExitStatus::Success);
                self.shutdown();
                event_loop.exit();
            }
            KeyAction::Ignore(name) => {
                tracing::info!(key = %name, repeat = event.repeat, "Key pressed");
            }
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
