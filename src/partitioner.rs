//! The partitioner component: a pure `(key, R) -> [0, R)` function used to
//! route emitted pairs to partitions.

/// Computes the default partition for `key` among `num_partitions`
/// partitions using djb2 (`h = 5381; h = h*33 + byte`, unsigned 64-bit
/// wraparound), then `h % num_partitions`.
///
/// Deterministic and side-effect free: callable concurrently from any
/// thread, and returns the same result for the same `(key, num_partitions)`
/// across threads and runs.
pub fn default_partition(key: &str, num_partitions: usize) -> usize {
    let mut h: u64 = 5381;
    for b in key.as_bytes() {
        h = h.wrapping_mul(33).wrapping_add(*b as u64);
    }
    (h % num_partitions as u64) as usize
}

/// A pluggable partitioner. Implementations must be deterministic and
/// depend only on `key` and `num_partitions`; the engine may call
/// `partition` concurrently from any mapper thread.
pub trait Partitioner: Sync {
    fn partition(&self, key: &str, num_partitions: usize) -> usize;
}

/// The default djb2-based partitioner.
pub struct DefaultPartitioner;

impl Partitioner for DefaultPartitioner {
    fn partition(&self, key: &str, num_partitions: usize) -> usize {
        default_partition(key, num_partitions)
    }
}

/// A function pointer type usable as a custom partitioner.
pub type PartitionerFn = fn(&str, usize) -> usize;

/// Wraps a plain `fn(&str, usize) -> usize` as a `Partitioner`.
pub struct FnPartitioner(pub PartitionerFn);

impl Partitioner for FnPartitioner {
    fn partition(&self, key: &str, num_partitions: usize) -> usize {
        (self.0)(key, num_partitions)
    }
}
