//! Minimal OSC reader used as a test oracle.
//!
//! Panics on malformed input; only the float and int32 types the encoder
//! emits are understood.

#![allow(dead_code)]

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Float(f32),
    Int(i32),
}

impl Arg {
    pub fn as_float(&self) -> f32 {
        match self {
            Arg::Float(v) => *v,
            other => panic!("expected float, got {:?}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub address: String,
    pub type_tags: String,
    pub args: Vec<Arg>,
}

impl Decoded {
    pub fn floats(&self) -> Vec<f32> {
        self.args.iter().map(Arg::as_float).collect()
    }
}

/// Read one padded OSC string at `pos`, returning it and the next offset
pub fn read_padded(bytes: &[u8], pos: usize) -> (String, usize) {
    let rest = &bytes[pos..];
    let nul = rest
        .iter()
        .position(|&b| b == 0)
        .expect("unterminated OSC string");
    let s = std::str::from_utf8(&rest[..nul])
        .expect("OSC string is not UTF-8")
        .to_string();

    let padded = (nul + 4) & !3;
    assert!(rest[nul..padded].iter().all(|&b| b == 0), "non-zero padding");
    (s, pos + padded)
}

fn read_u32(bytes: &[u8], pos: usize) -> u32 {
    u32::from_be_bytes(bytes[pos..pos + 4].try_into().unwrap())
}

pub fn decode(bytes: &[u8]) -> Decoded {
    assert_eq!(bytes.len() % 4, 0, "message not 4-byte aligned");

    let (address, pos) = read_padded(bytes, 0);
    let (type_tags, mut pos) = read_padded(bytes, pos);
    assert!(type_tags.starts_with(','), "type tags must start with ','");

    let mut args = Vec::new();
    for tag in type_tags.chars().skip(1) {
        let raw = read_u32(bytes, pos);
        pos += 4;
        args.push(match tag {
            'f' => Arg::Float(f32::from_bits(raw)),
            'i' => Arg::Int(raw as i32),
            other => panic!("unsupported type tag {:?}", other),
        });
    }
    assert_eq!(pos, bytes.len(), "trailing bytes after arguments");

    Decoded {
        address,
        type_tags,
        args,
    }
}
