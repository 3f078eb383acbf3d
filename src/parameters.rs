//! Parameters for a mapreduce run.

use crate::error::MRError;

/// Concurrency configuration for one `run`/`run_with_partitioner` call.
#[derive(Clone, Debug)]
pub struct MRParameters {
    pub mappers: usize,
    pub reducers: usize,
}

impl MRParameters {
    pub fn new() -> MRParameters {
        MRParameters {
            mappers: 4,
            reducers: 4,
        }
    }

    /// How many mapper and reducer workers to use. Mappers and reducers
    /// never run at the same time (reducers wait for the full map output);
    /// the number of reducers also determines the number of partitions.
    ///
    /// Default 4/4.
    pub fn set_concurrency(mut self, mappers: usize, reducers: usize) -> MRParameters {
        self.mappers = mappers;
        self.reducers = reducers;
        self
    }

    /// Checks `mappers >= 1` and `reducers >= 1`.
    pub fn validate(&self) -> Result<(), MRError> {
        if self.mappers < 1 {
            return Err(MRError::InvalidArgument(String::from("mappers must be >= 1")));
        }
        if self.reducers < 1 {
            return Err(MRError::InvalidArgument(String::from("reducers must be >= 1")));
        }
        Ok(())
    }
}

impl Default for MRParameters {
    fn default() -> MRParameters {
        MRParameters::new()
    }
}
