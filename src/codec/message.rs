//! OSC message builder
//!
//! A message is `[address][type tags][arguments]`. Both strings are NUL
//! terminated and zero padded to a 4-byte boundary, arguments are 4-byte
//! big-endian values.

use bytes::{BufMut, Bytes, BytesMut};

use crate::constants::OSC_ALIGNMENT;
use crate::tracking::{Quat, Vec3};

/// Encoded length of a string of `len` bytes: content, one NUL, then
/// zeros up to the next multiple of 4.
#[inline]
pub fn pad_len(len: usize) -> usize {
    (len + OSC_ALIGNMENT) & !(OSC_ALIGNMENT - 1)
}

/// Append `s` as an OSC string (NUL terminated, 4-byte padded).
pub fn write_padded(buf: &mut BytesMut, s: &str) {
    let padded = pad_len(s.len());
    buf.reserve(padded);
    buf.put_slice(s.as_bytes());
    buf.put_bytes(0, padded - s.len());
}

/// Append-only OSC message builder.
///
/// The address is written on construction; each `add_*` call appends one
/// type tag and one argument in lockstep. Arguments are held apart from
/// the address until the tag string is known. [`finish`](Self::finish) consumes
/// the builder, so a finished message can't be appended to or finished
/// twice.
#[derive(Debug)]
pub struct OscMessage {
    buffer: BytesMut,
    arguments: BytesMut,
    type_tags: String,
}

impl OscMessage {
    /// Start a message addressed to `address` (e.g. `/tracking/trackers/head/position`)
    pub fn new(address: &str) -> Self {
        let mut buffer = BytesMut::with_capacity(pad_len(address.len()));
        write_padded(&mut buffer, address);

        let mut type_tags = String::with_capacity(8);
        type_tags.push(',');

        Self {
            buffer,
            // Four floats covers every tracker field
            arguments: BytesMut::with_capacity(16),
            type_tags,
        }
    }

    /// Append a 32-bit float argument (`f`)
    pub fn add_float(&mut self, value: f32) {
        self.type_tags.push('f');
        self.arguments.put_u32(value.to_bits());
    }

    /// Append a 32-bit signed integer argument (`i`)
    pub fn add_int32(&mut self, value: i32) {
        self.type_tags.push('i');
        self.arguments.put_i32(value);
    }

    /// Append several float arguments in order
    pub fn add_floats(&mut self, values: &[f32]) {
        for &value in values {
            self.add_float(value);
        }
    }

    /// Append `x, y, z`
    pub fn add_vec3(&mut self, v: Vec3) {
        self.add_floats(&[v.x, v.y, v.z]);
    }

    /// Append `x, y, z, w` (scalar last)
    pub fn add_quat(&mut self, q: Quat) {
        self.add_floats(&[q.x, q.y, q.z, q.w]);
    }

    /// Type tag string accumulated so far, including the leading `,`
    pub fn type_tags(&self) -> &str {
        &self.type_tags
    }

    /// Number of arguments appended
    pub fn arg_count(&self) -> usize {
        self.type_tags.len() - 1
    }

    /// Append the type tag string and return the encoded message
    pub fn finish(mut self) -> Bytes {
        self.buffer
            .reserve(pad_len(self.type_tags.len()) + self.arguments.len());
        write_padded(&mut self.buffer, &self.type_tags);
        self.buffer.put_slice(&self.arguments);
        self.buffer.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(s: &str) -> Vec<u8> {
        let mut buf = BytesMut::new();
        write_padded(&mut buf, s);
        buf.to_vec()
    }

    #[test]
    fn test_pad_len() {
        assert_eq!(pad_len(0), 4);
        assert_eq!(pad_len(1), 4);
        assert_eq!(pad_len(2), 4);
        assert_eq!(pad_len(3), 4);
        assert_eq!(pad_len(4), 8);
        assert_eq!(pad_len(7), 8);
        assert_eq!(pad_len(8), 12);
    }

    #[test]
    fn test_padding_no_extra_block() {
        // "abc" + NUL is already aligned
        assert_eq!(padded("abc"), b"abc\0");
        assert_eq!(padded("abcd"), b"abcd\0\0\0\0");
        assert_eq!(padded(""), b"\0\0\0\0");
    }

    #[test]
    fn test_empty_message() {
        let bytes = OscMessage::new("/a").finish();
        assert_eq!(&bytes[..], b"/a\0\0,\0\0\0");
    }

    #[test]
    fn test_single_float() {
        let mut msg = OscMessage::new("/x");
        msg.add_float(1.0);
        assert_eq!(msg.type_tags(), ",f");
        let bytes = msg.finish();

        assert_eq!(
            &bytes[..],
            &[b'/', b'x', 0, 0, b',', b'f', 0, 0, 0x3F, 0x80, 0x00, 0x00]
        );
    }

    #[test]
    fn test_int32_big_endian() {
        let mut msg = OscMessage::new("/i");
        msg.add_int32(-2);
        msg.add_int32(0x0102_0304);
        let bytes = msg.finish();

        assert_eq!(&bytes[..8], b"/i\0\0,ii\0");
        assert_eq!(&bytes[8..12], &[0xFF, 0xFF, 0xFF, 0xFE]);
        assert_eq!(&bytes[12..16], &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_mixed_tags_keep_order() {
        let mut msg = OscMessage::new("/mixed");
        msg.add_float(0.5);
        msg.add_int32(7);
        msg.add_float(-1.0);
        assert_eq!(msg.type_tags(), ",fif");
        assert_eq!(msg.arg_count(), 3);

        let bytes = msg.finish();
        // "/mixed" -> 8 bytes, ",fif" -> 8 bytes, 3 args -> 12 bytes
        assert_eq!(bytes.len(), 28);
        assert_eq!(&bytes[8..16], b",fif\0\0\0\0");
        assert_eq!(&bytes[16..20], &0.5f32.to_bits().to_be_bytes());
        assert_eq!(&bytes[20..24], &7i32.to_be_bytes());
        assert_eq!(&bytes[24..28], &(-1.0f32).to_bits().to_be_bytes());
    }

    #[test]
    fn test_quat_is_scalar_last() {
        let mut msg = OscMessage::new("/q");
        msg.add_quat(Quat { x: 1.0, y: 2.0, z: 3.0, w: 4.0 });
        let bytes = msg.finish();

        assert_eq!(&bytes[4..12], b",ffff\0\0\0");
        assert_eq!(&bytes[24..28], &4.0f32.to_bits().to_be_bytes());
    }
}
