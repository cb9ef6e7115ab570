//! Configuration errors raised during generation.

use thiserror::Error;

/// Fatal configuration errors. Any of these aborts the run before rows are
/// emitted, so a failed run never leaves a partially consistent dataset.
#[derive(Debug, Error)]
pub enum GenError {
    #[error(
        "id space exhausted for prefix {prefix:?}: {requested} rows requested but \
         {width}-digit sequences hold at most {capacity}"
    )]
    IdSpaceExhausted {
        prefix: &'static str,
        width: usize,
        requested: u64,
        capacity: u64,
    },

    #[error("cannot assign rides: no drivers with status other than INACTIVE")]
    NoEligibleDrivers,

    #[error("cannot assign rides: rider pool is empty")]
    EmptyRiderPool,
}
