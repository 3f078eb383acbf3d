//! The (key,value) pair owned by the engine once emitted.

/// An engine-owned (key,value) pair.
///
/// Copies are made at emit time; the caller's borrowed strings may be
/// freed or overwritten as soon as `EmitSink::emit` returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: String, value: String) -> Pair {
        Pair { key: key, value: value }
    }
}
