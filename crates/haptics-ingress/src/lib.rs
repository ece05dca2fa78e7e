//! UDP position ingress.
//!
//! One non-blocking UDP socket, polled from the render loop's idle callback.
//! Each datagram carries three doubles; a well-formed one overwrites the
//! current position after the raw-to-scene transform. An empty socket is the
//! normal steady state and is never an error.

pub mod error;
pub mod receiver;
pub mod transform;
pub mod wire;

pub use error::{DecodeError, IngressError};
pub use receiver::{Ingress, IngressSettings, PollReport};
pub use transform::Transform;
pub use wire::DATAGRAM_LEN;
