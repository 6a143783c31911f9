//! Destination for encoded OSC messages

use bytes::Bytes;

/// Anything the dispatcher can hand finished messages to.
///
/// Sending is fire-and-forget: implementations report their own failures
/// and never return them.
pub trait MessageSink {
    /// False when every message would be dropped anyway, letting the
    /// dispatcher skip encoding entirely.
    fn accepts_messages(&self) -> bool;

    /// Deliver one encoded message
    fn send(&mut self, message: Bytes);
}

impl<S: MessageSink + ?Sized> MessageSink for &mut S {
    fn accepts_messages(&self) -> bool {
        (**self).accepts_messages()
    }

    fn send(&mut self, message: Bytes) {
        (**self).send(message)
    }
}

/// Collects messages in memory
impl MessageSink for Vec<Bytes> {
    fn accepts_messages(&self) -> bool {
        true
    }

    fn send(&mut self, message: Bytes) {
        self.push(message);
    }
}
