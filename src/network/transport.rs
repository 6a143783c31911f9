//! Best-effort UDP transport for OSC messages
//!
//! Owns a single IPv4 datagram socket for its whole lifetime. Every failure
//! is logged and degrades the transport instead of reaching the caller.

use bytes::Bytes;
use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use std::net::{Ipv4Addr, SocketAddrV4};
use tracing::{debug, error, info, trace, warn};

use crate::constants::{DEFAULT_OSC_HOST, DEFAULT_OSC_PORT};
use crate::error::NetworkError;
use crate::network::sink::MessageSink;

/// Create the non-blocking UDP socket used for sending
pub fn create_socket() -> Result<Socket, NetworkError> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))
        .map_err(|e| NetworkError::SocketCreate(e.to_string()))?;

    // A full send buffer must drop the datagram, not stall the frame
    socket
        .set_nonblocking(true)
        .map_err(|e| NetworkError::SocketCreate(e.to_string()))?;

    Ok(socket)
}

/// Parse a dotted-quad IPv4 host into a destination address
pub fn resolve_host(host: &str, port: u16) -> Result<SocketAddrV4, NetworkError> {
    let ip: Ipv4Addr = host
        .parse()
        .map_err(|_| NetworkError::InvalidHost(host.to_string()))?;
    Ok(SocketAddrV4::new(ip, port))
}

/// Transport statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportStats {
    pub messages_sent: u64,
    pub bytes_sent: u64,
    pub send_failures: u64,
    /// Sends skipped because output was disabled or the socket is missing
    pub messages_dropped: u64,
}

/// UDP sender for OSC messages
pub struct OscTransport {
    /// `None` if socket creation failed; the transport is then inert
    socket: Option<Socket>,
    enabled: bool,
    host: String,
    port: u16,
    destination: Option<SocketAddrV4>,
    stats: TransportStats,
}

impl OscTransport {
    /// Create a disabled transport with its socket.
    ///
    /// If the socket can't be created the error is logged and the transport
    /// stays inert for the rest of its life.
    pub fn new() -> Self {
        let socket = match create_socket() {
            Ok(socket) => Some(socket),
            Err(e) => {
                error!("Failed to create OSC socket: {}", e);
                None
            }
        };
        Self::with_socket(socket)
    }

    /// A transport without a socket. Every send is dropped.
    pub fn inert() -> Self {
        Self::with_socket(None)
    }

    fn with_socket(socket: Option<Socket>) -> Self {
        Self {
            socket,
            enabled: false,
            host: DEFAULT_OSC_HOST.to_string(),
            port: DEFAULT_OSC_PORT,
            destination: None,
            stats: TransportStats::default(),
        }
    }

    /// Set the enabled flag and destination.
    ///
    /// An unparsable host forces the transport off regardless of `enabled`.
    /// Without a socket only the fields are stored.
    pub fn configure(&mut self, enabled: bool, host: &str, port: u16) {
        self.enabled = enabled;
        self.host = host.to_string();
        self.port = port;

        if self.socket.is_none() {
            return;
        }

        match resolve_host(host, port) {
            Ok(destination) => {
                self.destination = Some(destination);
                if enabled {
                    info!("OSC output enabled: {}", destination);
                } else {
                    debug!("OSC output disabled");
                }
            }
            Err(e) => {
                error!("{}", e);
                self.enabled = false;
                self.destination = None;
            }
        }
    }

    /// Send one message, best effort. Failures are logged and counted.
    pub fn send(&mut self, message: Bytes) {
        if !self.is_active() {
            self.stats.messages_dropped += 1;
            return;
        }

        match self.try_send(&message) {
            Ok(sent) => {
                trace!("Sent {} byte OSC message", sent);
                self.stats.messages_sent += 1;
                self.stats.bytes_sent += sent as u64;
            }
            Err(e) => {
                warn!("Failed to send OSC message: {}", e);
                self.stats.send_failures += 1;
            }
        }
    }

    /// Single `send_to` to the configured destination
    pub fn try_send(&self, message: &[u8]) -> Result<usize, NetworkError> {
        let (socket, destination) = match (&self.socket, self.destination) {
            (Some(socket), Some(destination)) if self.enabled => (socket, destination),
            _ => return Err(NetworkError::Disabled),
        };

        let sent = socket
            .send_to(message, &SockAddr::from(destination))
            .map_err(|e| NetworkError::SendFailed(e.to_string()))?;

        if sent != message.len() {
            return Err(NetworkError::PartialSend {
                sent,
                len: message.len(),
            });
        }

        Ok(sent)
    }

    /// Requested-and-accepted enabled flag
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enabled and able to transmit
    pub fn is_active(&self) -> bool {
        self.enabled && self.socket.is_some() && self.destination.is_some()
    }

    /// False if the socket could not be created
    pub fn has_socket(&self) -> bool {
        self.socket.is_some()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolved destination, if the last `configure` succeeded
    pub fn destination(&self) -> Option<SocketAddrV4> {
        self.destination
    }

    pub fn stats(&self) -> TransportStats {
        self.stats.clone()
    }

    pub fn reset_stats(&mut self) {
        self.stats = TransportStats::default();
    }
}

impl Default for OscTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OscTransport {
    fn drop(&mut self) {
        if self.socket.take().is_some() {
            debug!("Closed OSC socket");
        }
    }
}

impl MessageSink for OscTransport {
    fn accepts_messages(&self) -> bool {
        self.is_active()
    }

    fn send(&mut self, message: Bytes) {
        OscTransport::send(self, message);
    }
}
