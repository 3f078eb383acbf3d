//! The `MapReduce` trait and the closure-based convenience wrapper.

use crate::emit::EmitSink;
use crate::error::MRError;
use crate::reduce::GetNext;

/// Map() function type. Opens, reads, and tokenizes `path`, then calls
/// `emit` zero or more times. Thread-safe with respect to itself: invoked
/// from many mapper threads, each on a different path.
pub type MapperFn = fn(path: &str, emit: &EmitSink) -> Result<(), MRError>;

/// Reduce() function type. Repeatedly calls `get_next.next(key)` until it
/// returns `None`, performing the user-defined reduction over the drained
/// values. Invoked single-threaded per partition.
pub type ReducerFn = fn(key: &str, get_next: &GetNext, partition: usize) -> Result<(), MRError>;

/// A type supplying the map() and reduce() callbacks for a run.
///
/// One instance is shared (by reference) across all mapper and reducer
/// threads for the duration of a run; implementations only need `Sync`,
/// since nothing here requires per-thread owned state (`scoped_threadpool`
/// lets every worker simply borrow the same `&MR` until its stage joins).
pub trait MapReduce: Sync {
    /// Takes one input path and an emitter. The emitter publishes results
    /// from the map phase.
    fn map(&self, path: &str, emit: &EmitSink) -> Result<(), MRError>;

    /// Takes one key, a `get_next` pull handle over its group of values,
    /// and the partition index it's running in.
    fn reduce(&self, key: &str, get_next: &GetNext, partition: usize) -> Result<(), MRError>;
}

/// Adapts two plain function pointers into a `MapReduce` implementation,
/// for callers who don't need to carry extra state.
pub struct ClosureMapReduce {
    mapper: MapperFn,
    reducer: ReducerFn,
}

impl ClosureMapReduce {
    pub fn new(mapper: MapperFn, reducer: ReducerFn) -> ClosureMapReduce {
        ClosureMapReduce {
            mapper: mapper,
            reducer: reducer,
        }
    }
}

impl MapReduce for ClosureMapReduce {
    fn map(&self, path: &str, emit: &EmitSink) -> Result<(), MRError> {
        (self.mapper)(path, emit)
    }
    fn reduce(&self, key: &str, get_next: &GetNext, partition: usize) -> Result<(), MRError> {
        (self.reducer)(key, get_next, partition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::PartitionBuffer;
    use crate::partitioner::DefaultPartitioner;

    fn map_upper(path: &str, emit: &EmitSink) -> Result<(), MRError> {
        emit.emit(&path.to_uppercase(), "1");
        Ok(())
    }

    fn reduce_count(key: &str, get_next: &GetNext, _partition: usize) -> Result<(), MRError> {
        let mut n = 0;
        while get_next.next(key).is_some() {
            n += 1;
        }
        if n == 0 {
            return Err(MRError::UserCallbackFailure(String::from("empty group")));
        }
        Ok(())
    }

    #[test]
    fn closure_map_reduce_dispatches_to_both_functions() {
        let mr = ClosureMapReduce::new(map_upper, reduce_count);
        let partitioner = DefaultPartitioner;
        let partitions: Vec<PartitionBuffer> = (0..1).map(|_| PartitionBuffer::new()).collect();
        let emit = EmitSink::new(&partitioner, &partitions);

        mr.map("shout", &emit).unwrap();

        let pairs = partitions.into_iter().next().unwrap().into_inner();
        assert_eq!(pairs[0].key, "SHOUT");

        let get_next = crate::reduce::GetNext::new(&pairs);
        mr.reduce("SHOUT", &get_next, 0).unwrap();
    }
}
