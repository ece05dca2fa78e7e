//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Ties the position ingress, redraw ticker, window and renderer
//! together.

mod core;
mod event_handler;
mod init;
mod polling;
mod render;
mod shutdown;

pub use self::core::HapticsApp;
