//! The per-partition, thread-safe, append-only buffer of emitted pairs.

use std::sync::Mutex;

use crate::pair::Pair;

/// Seed capacity for a fresh partition, chosen to amortize growth across
/// large inputs.
const INITIAL_PARTITION_CAPACITY: usize = 1 << 16;

/// One partition's worth of emitted pairs.
///
/// Append-only and mutex-guarded during MapStage; sorted once, in place,
/// by SortStage; consumed into a plain `Vec<Pair>` (dropping the mutex) at
/// the Sort/Reduce boundary, so ReduceStage never has to take a lock.
pub struct PartitionBuffer {
    pairs: Mutex<Vec<Pair>>,
}

impl PartitionBuffer {
    pub fn new() -> PartitionBuffer {
        PartitionBuffer {
            pairs: Mutex::new(Vec::with_capacity(INITIAL_PARTITION_CAPACITY)),
        }
    }

    /// Appends one pair. Takes the partition's mutex, pushes, releases.
    pub fn append(&self, pair: Pair) {
        let mut guard = self.pairs.lock().expect("partition buffer mutex poisoned");
        guard.push(pair);
    }

    /// Sorts the buffer in place, ascending by key, byte-wise. The sort is
    /// stable, so pairs sharing a key keep their append-time relative
    /// order deterministically within this run.
    ///
    /// Callers must guarantee no concurrent `append` is in flight (true
    /// once MapStage has joined).
    pub fn sort(&self) {
        let mut guard = self.pairs.lock().expect("partition buffer mutex poisoned");
        guard.sort_by(|a, b| a.key.as_bytes().cmp(b.key.as_bytes()));
    }

    /// Number of pairs currently held.
    pub fn len(&self) -> usize {
        self.pairs.lock().expect("partition buffer mutex poisoned").len()
    }

    /// Consumes the buffer, yielding its pairs and dropping the mutex.
    pub fn into_inner(self) -> Vec<Pair> {
        self.pairs.into_inner().expect("partition buffer mutex poisoned")
    }
}
