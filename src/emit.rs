//! The per-run sink a mapper uses to publish (key,value) pairs.

use crate::buffer::PartitionBuffer;
use crate::pair::Pair;
use crate::partitioner::Partitioner;

/// Handed to every mapper invocation; reentrant across mapper threads.
///
/// Avoids process-wide mutable statics (a global `MR_Emit`/`tables`/
/// `partition_func` triple) in favor of a per-run value threaded through
/// the call tree.
pub struct EmitSink<'a> {
    partitioner: &'a dyn Partitioner,
    partitions: &'a [PartitionBuffer],
}

impl<'a> EmitSink<'a> {
    pub(crate) fn new(partitioner: &'a dyn Partitioner, partitions: &'a [PartitionBuffer]) -> EmitSink<'a> {
        EmitSink {
            partitioner: partitioner,
            partitions: partitions,
        }
    }

    /// Publishes one (key,value) pair. `key` and `value` are copied into
    /// engine-owned storage; the caller's originals may be freed or
    /// overwritten as soon as this call returns.
    pub fn emit(&self, key: &str, value: &str) {
        let p = self.partitioner.partition(key, self.partitions.len());
        self.partitions[p].append(Pair::new(key.to_owned(), value.to_owned()));
    }
}
