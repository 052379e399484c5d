//! # Item Identifier Generation
//!
//! Every item stored in the cart receives a version-1 (time-ordered)
//! UUID exactly once, at creation. Generation is abstracted behind the
//! single-method [`UuidSource`] capability so tests can substitute a
//! deterministic source instead of patching global state.
//!
//! ## Why v1 and not v4?
//! Item uuids double as an insertion-time ordering hint for consumers
//! that log or diff snapshots; v1 encodes the creation timestamp while
//! still being unique per item. Merges never mint a new uuid, so the
//! timestamp reflects the first add.

use uuid::Uuid;

/// Capability for minting item identifiers.
///
/// Takes `&mut self` so stateful test doubles (counters, fixed scripts)
/// need no interior mutability.
pub trait UuidSource {
    /// Returns a fresh unique identifier for a newly created item.
    fn generate(&mut self) -> Uuid;
}

/// The production source: RFC 4122 version-1 UUIDs from the system
/// clock and a per-source random node ID.
#[derive(Debug, Clone)]
pub struct TimeUuidSource {
    node_id: [u8; 6],
}

impl TimeUuidSource {
    /// Creates a source with a random node ID.
    ///
    /// The node ID is drawn from random bytes rather than a MAC address;
    /// RFC 4122 §4.5 requires the multicast bit to be set in that case
    /// so the value cannot collide with a real hardware address.
    pub fn new() -> Self {
        let random = *Uuid::new_v4().as_bytes();
        let mut node_id = [0u8; 6];
        node_id.copy_from_slice(&random[..6]);
        node_id[0] |= 0x01; // multicast bit, per RFC 4122 §4.5
        TimeUuidSource { node_id }
    }

    /// Creates a source with a fixed node ID, for hosts that want the
    /// node portion to be stable across carts.
    pub const fn with_node_id(node_id: [u8; 6]) -> Self {
        TimeUuidSource { node_id }
    }
}

impl Default for TimeUuidSource {
    fn default() -> Self {
        TimeUuidSource::new()
    }
}

impl UuidSource for TimeUuidSource {
    fn generate(&mut self) -> Uuid {
        Uuid::now_v1(&self.node_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_version_1() {
        let mut source = TimeUuidSource::new();
        let uuid = source.generate();
        assert_eq!(uuid.get_version_num(), 1);
    }

    #[test]
    fn test_generates_distinct_values() {
        let mut source = TimeUuidSource::new();
        let a = source.generate();
        let b = source.generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_node_id_sets_multicast_bit() {
        let source = TimeUuidSource::new();
        assert_eq!(source.node_id[0] & 0x01, 0x01);
    }

    #[test]
    fn test_fixed_node_id_is_used() {
        let node_id = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab];
        let mut source = TimeUuidSource::with_node_id(node_id);
        let uuid = source.generate();
        assert_eq!(&uuid.as_bytes()[10..], &node_id);
    }
}
