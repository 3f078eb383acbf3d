//! The Coordinator: drives one mapreduce run through its three barriered
//! stages (Map, Sort, Reduce) and returns the first error observed, if any.

use log::{debug, info};
use scoped_threadpool::Pool;

use crate::buffer::PartitionBuffer;
use crate::error::MRError;
use crate::map_stage::run_map_stage;
use crate::mapreducer::MapReduce;
use crate::parameters::MRParameters;
use crate::partitioner::{DefaultPartitioner, Partitioner};
use crate::reduce::run_reduce_stage;
use crate::sort_stage::run_sort_stage;

/// Runs `mapreduce` over `files` with `params`, partitioning emitted pairs
/// with the default djb2 partitioner.
///
/// Equivalent to `run_with_partitioner(mapreduce, params, files,
/// &DefaultPartitioner)`.
pub fn run<MR: MapReduce>(mapreduce: &MR, params: &MRParameters, files: &[String]) -> Result<(), MRError> {
    run_with_partitioner(mapreduce, params, files, &DefaultPartitioner)
}

/// Runs `mapreduce` over `files` with `params`, routing emitted pairs with
/// a caller-supplied `partitioner`.
///
/// Validates `params`, then executes MapStage, SortStage, and ReduceStage
/// in strict sequence: each stage fully joins before the next begins, so a
/// reducer never observes a partition mid-map or mid-sort. The first user
/// callback error observed in a stage aborts that stage's remaining
/// reporting and is returned; later stages do not run once an earlier one
/// has failed.
pub fn run_with_partitioner<MR: MapReduce>(
    mapreduce: &MR,
    params: &MRParameters,
    files: &[String],
    partitioner: &dyn Partitioner,
) -> Result<(), MRError> {
    params.validate()?;

    let partitions: Vec<PartitionBuffer> = (0..params.reducers).map(|_| PartitionBuffer::new()).collect();

    info!(
        "starting mapreduce run: {} files, {} mappers, {} reducers",
        files.len(),
        params.mappers,
        params.reducers
    );

    let mut map_pool = Pool::new(params.mappers as u32);
    debug!("entering map stage");
    run_map_stage(&mut map_pool, files, mapreduce, partitioner, &partitions)?;

    let mut sort_pool = Pool::new(params.reducers as u32);
    debug!("entering sort stage");
    run_sort_stage(&mut sort_pool, &partitions);

    let sorted: Vec<Vec<_>> = partitions.into_iter().map(PartitionBuffer::into_inner).collect();

    let mut reduce_pool = Pool::new(params.reducers as u32);
    debug!("entering reduce stage");
    run_reduce_stage(&mut reduce_pool, mapreduce, sorted)?;

    info!("mapreduce run complete");
    Ok(())
}
