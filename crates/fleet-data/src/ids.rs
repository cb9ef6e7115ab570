//! Fixed-width sequential identifier allocation.
//!
//! Every entity type gets ids of the form `<PREFIX><zero-padded sequence>`
//! ("R000001", "RIDE000042"). Sequences start at 1 and are owned by a single
//! generator, so ids are unique within an entity type for the run.

use crate::error::GenError;

/// Digits in the zero-padded sequence part of every id.
pub const SEQUENCE_WIDTH: usize = 6;

/// Allocator for one entity type's identifiers.
#[derive(Debug)]
pub struct IdSequence {
    prefix: &'static str,
    next: u64,
    capacity: u64,
}

impl IdSequence {
    /// Creates an allocator for `prefix`, verifying up front that `count` ids
    /// fit in the padding width. Overflow is a configuration error and is
    /// reported before any row is generated.
    pub fn with_capacity(prefix: &'static str, count: usize) -> Result<Self, GenError> {
        let capacity = 10u64.pow(SEQUENCE_WIDTH as u32) - 1;
        if count as u64 > capacity {
            return Err(GenError::IdSpaceExhausted {
                prefix,
                width: SEQUENCE_WIDTH,
                requested: count as u64,
                capacity,
            });
        }
        Ok(Self {
            prefix,
            next: 1,
            capacity,
        })
    }

    /// Returns the next id in the sequence.
    pub fn next_id(&mut self) -> String {
        debug_assert!(self.next <= self.capacity);
        let id = format!("{}{:0width$}", self.prefix, self.next, width = SEQUENCE_WIDTH);
        self.next += 1;
        id
    }
}
