//! Network subsystem for UDP OSC transport

pub mod sink;
pub mod transport;

pub use sink::MessageSink;
pub use transport::{create_socket, resolve_host, OscTransport, TransportStats};
