//! The SortStage worker pool: one worker per partition, sorting each
//! buffer in place ascending by key before ReduceStage begins.

use scoped_threadpool::Pool;

use crate::buffer::PartitionBuffer;

/// Runs the sort stage: spawns one worker per entry in `partitions` and
/// calls `PartitionBuffer::sort` on it. Joins all workers before
/// returning.
///
/// Callers must guarantee MapStage has already joined; `sort` assumes no
/// concurrent `append` is in flight.
pub(crate) fn run_sort_stage(pool: &mut Pool, partitions: &[PartitionBuffer]) {
    pool.scoped(|scope| {
        for partition in partitions {
            scope.execute(move || {
                partition.sort();
            });
        }
    });
}
