//! The MapStage worker pool: M workers draining the `FileDispatcher` and
//! invoking the user's mapper.

use std::sync::Mutex;

use log::warn;
use scoped_threadpool::Pool;

use crate::buffer::PartitionBuffer;
use crate::dispatcher::FileDispatcher;
use crate::emit::EmitSink;
use crate::error::MRError;
use crate::mapreducer::MapReduce;
use crate::partitioner::Partitioner;

/// Runs the map stage: spawns exactly `pool`'s thread count of workers,
/// each pulling paths from `files` until the dispatcher is exhausted and
/// calling `mapreduce.map(path, &emit)` for each. Joins all workers before
/// returning; the first user callback error observed is surfaced, the
/// rest discarded.
///
/// `pool`'s thread count may exceed `files.len()`; excess workers simply
/// see the dispatcher exhausted immediately and return.
pub(crate) fn run_map_stage<MR: MapReduce>(
    pool: &mut Pool,
    files: &[String],
    mapreduce: &MR,
    partitioner: &dyn Partitioner,
    partitions: &[PartitionBuffer],
) -> Result<(), MRError> {
    let dispatcher = FileDispatcher::new(files);
    let first_error: Mutex<Option<MRError>> = Mutex::new(None);
    let worker_count = pool.thread_count();

    pool.scoped(|scope| {
        for _ in 0..worker_count {
            let dispatcher = &dispatcher;
            let first_error = &first_error;
            let emit = EmitSink::new(partitioner, partitions);
            scope.execute(move || {
                while let Some(path) = dispatcher.next_path() {
                    if let Err(e) = mapreduce.map(path, &emit) {
                        let mut guard = first_error.lock().expect("map error mutex poisoned");
                        if guard.is_none() {
                            *guard = Some(e);
                        } else {
                            warn!("discarding additional map error for path {}", path);
                        }
                    }
                }
            });
        }
    });

    match first_error.into_inner().expect("map error mutex poisoned") {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
