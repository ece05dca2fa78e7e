//! Non-blocking datagram receiver.

use std::io;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs, UdpSocket};

use haptics_common::Position;
use haptics_config::schema::{
    MalformedPolicy, NetworkConfig, ReceivePolicy, TransformConfig, WireByteOrder,
};
use tracing::{debug, info, trace, warn};

use crate::error::IngressError;
use crate::transform::Transform;
use crate::wire;


/// Receive buffer size. Larger than a datagram so oversized payloads show
/// up with their real length instead of being cut to 24 bytes.
const RECV_BUF_LEN: usize = 512;

/// Everything needed to open the ingress socket.
#[derive(Debug, Clone)]
pub struct IngressSettings {
    pub bind_address: String,
    pub local_port: u16,
    pub remote_host: String,
    pub remote_port: u16,
    pub byte_order: WireByteOrder,
    pub receive_policy: ReceivePolicy,
    pub max_datagrams_per_poll: u32,
    pub on_malformed: MalformedPolicy,
    pub transform: Transform,
}

impl IngressSettings {
    pub fn from_config(
        network: &NetworkConfig,
        transform: &TransformConfig,
        remote_host: impl Into<String>,
    ) -> Self {
        Self {
            bind_address: network.bind_address.clone(),
            local_port: network.local_port,
            remote_host: remote_host.into(),
            remote_port: network.remote_port,
            byte_order: network.byte_order,
            receive_policy: network.receive_policy,
            max_datagrams_per_poll: network.max_datagrams_per_poll,
            on_malformed: network.on_malformed,
            transform: Transform::from_config(transform),
        }
    }

    fn receive_budget(&self) -> u32 {
        match self.receive_policy {
            ReceivePolicy::Single => 1,
            ReceivePolicy::Drain => self.max_datagrams_per_poll.max(1),
        }
    }
}

/// Outcome of one [`Ingress::poll`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollReport {
    /// Well-formed datagrams applied to the position.
    pub accepted: u32,
    /// Datagrams dropped for having the wrong size.
    pub discarded: u32,
}

impl PollReport {
    /// Whether the position was overwritten during this poll.
    pub fn updated(&self) -> bool {
        self.accepted > 0
    }
}

/// UDP receiver bound to a local port and connected to the position sender.
pub struct Ingress {
    socket: UdpSocket,
    settings: IngressSettings,
    buf: [u8; RECV_BUF_LEN],
}

impl Ingress {
    /// Bind, connect, and switch the socket to non-blocking mode.
    ///
    /// Any failure here is a setup error; the caller is expected to abort.
    pub fn connect(settings: IngressSettings) -> Result<Self, IngressError> {
        let bind_ip: IpAddr = settings.bind_address.parse().map_err(|e| {
            IngressError::setup(
                format!("invalid bind address {:?}", settings.bind_address),
                io::Error::new(io::ErrorKind::InvalidInput, e),
            )
        })?;
        let local = SocketAddr::new(bind_ip, settings.local_port);
        let remote = resolve_remote(&settings.remote_host, settings.remote_port, bind_ip)?;

        let socket = UdpSocket::bind(local)
            .map_err(|e| IngressError::setup(format!("failed to bind {local}"), e))?;
        socket
            .connect(remote)
            .map_err(|e| IngressError::setup(format!("failed to connect to {remote}"), e))?;
        socket
            .set_nonblocking(true)
            .map_err(|e| IngressError::setup("failed to make socket non-blocking", e))?;

        info!(
            local = %socket.local_addr().unwrap_or(local),
            remote = %remote,
            byte_order = ?settings.byte_order,
            policy = ?settings.receive_policy,
            "Position ingress ready"
        );

        Ok(Self {
            socket,
            settings,
            buf: [0u8; RECV_BUF_LEN],
        })
    }

    /// Consume pending datagrams and overwrite `position` with the newest
    /// well-formed one.
    ///
    /// Never blocks. An empty socket returns an empty report. Wrong-sized
    /// datagrams are discarded (or returned as an error under
    /// [`MalformedPolicy::Fatal`]); any other socket error is returned.
    pub fn poll(&mut self, position: &mut Position) -> Result<PollReport, IngressError> {
        let mut report = PollReport::default();

        for _ in 0..self.settings.receive_budget() {
            let len = match self.socket.recv(&mut self.buf) {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(IngressError::Socket(e)),
            };

            match wire::decode(&self.buf[..len], self.settings.byte_order) {
                Ok(raw) => {
                    *position = self.settings.transform.apply(raw);
                    report.accepted += 1;
                    trace!(%position, "Position update");
                }
                Err(e) => match self.settings.on_malformed {
                    MalformedPolicy::Discard => {
                        warn!("Discarding datagram: {e}");
                        report.discarded += 1;
                    }
                    MalformedPolicy::Fatal => return Err(e.into()),
                },
            }
        }

        if report.accepted > 1 {
            debug!(
                accepted = report.accepted,
                "Coalesced queued updates; newest kept"
            );
        }
        Ok(report)
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    pub fn peer_addr(&self) -> io::Result<SocketAddr> {
        self.socket.peer_addr()
    }

    pub fn settings(&self) -> &IngressSettings {
        &self.settings
    }
}

/// Resolve `host:port`, preferring an address of the bind address's family.
fn resolve_remote(host: &str, port: u16, bind_ip: IpAddr) -> Result<SocketAddr, IngressError> {
    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|e| IngressError::setup(format!("failed to resolve {host}:{port}"), e))?
        .collect();

    addrs
        .iter()
        .find(|a| a.is_ipv4() == bind_ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| IngressError::NoAddress(format!("{host}:{port}")))
}
