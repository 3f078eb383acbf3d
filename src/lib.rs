//! A single-process, multi-threaded, in-memory MapReduce execution
//! library: bounded worker pools carry a run through Map, Sort, and
//! Reduce stages joined at strict barriers.

mod buffer;
pub mod controller;
mod dispatcher;
mod emit;
pub mod error;
mod map_stage;
pub mod mapreducer;
pub mod pair;
pub mod parameters;
pub mod partitioner;
pub mod reduce;
mod sort_stage;

pub use crate::controller::{run, run_with_partitioner};
pub use crate::emit::EmitSink;
pub use crate::error::MRError;
pub use crate::mapreducer::{ClosureMapReduce, MapReduce, MapperFn, ReducerFn};
pub use crate::pair::Pair;
pub use crate::parameters::MRParameters;
pub use crate::partitioner::{default_partition, DefaultPartitioner, FnPartitioner, Partitioner, PartitionerFn};
pub use crate::reduce::GetNext;
