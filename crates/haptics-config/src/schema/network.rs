//! Network ingress configuration types.

use serde::{Deserialize, Serialize};

/// Byte order of the three doubles in each position datagram.
///
/// `native` matches whatever the receiving machine uses, which is what a
/// sender on the same architecture produces by default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum WireByteOrder {
    #[default]
    Native,
    Little,
    Big,
}

/// How many datagrams a single poll may consume.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum ReceivePolicy {
    /// Exactly one receive attempt per poll.
    Single,
    /// Receive until the socket is empty, keeping only the newest value.
    #[default]
    Drain,
}

/// What to do with a datagram that is not exactly 24 bytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum MalformedPolicy {
    /// Drop it, keep the previous position and keep polling.
    #[default]
    Discard,
    /// Treat it like a socket error and terminate.
    Fatal,
}

/// UDP ingress settings.
///
/// The remote host is not part of the file; it is always given on the
/// command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Local interface to bind (valid: any IPv4/IPv6 literal).
    pub bind_address: String,
    /// Local UDP port. 0 picks an ephemeral port.
    pub local_port: u16,
    /// Remote UDP port of the position sender (valid range: 1-65535).
    pub remote_port: u16,
    pub byte_order: WireByteOrder,
    pub receive_policy: ReceivePolicy,
    /// Upper bound on datagrams consumed per poll in `drain` mode (valid range: 1-4096).
    pub max_datagrams_per_poll: u32,
    pub on_malformed: MalformedPolicy,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".into(),
            local_port: 5556,
            remote_port: 5557,
            byte_order: WireByteOrder::Native,
            receive_policy: ReceivePolicy::Drain,
            max_datagrams_per_poll: 64,
            on_malformed: MalformedPolicy::Discard,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
