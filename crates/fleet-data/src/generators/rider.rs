//! Rider generation.

use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::error::GenError;
use crate::ids::IdSequence;
use crate::person::{NamePool, RIDER_NAMES};

/// Generated rider data ready for database insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRider {
    pub rider_id: String,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: String,
    pub phone: String,
    pub rating: f64,
    pub created_at: OffsetDateTime,
}

/// Generates riders with cycling names and randomized signup dates.
pub struct RiderGenerator {
    pool: NamePool,
}

impl RiderGenerator {
    pub fn new() -> Self {
        Self { pool: RIDER_NAMES }
    }

    /// Generates `count` riders. Signup timestamps fall within the year
    /// preceding `now`.
    pub fn generate_batch(
        &self,
        count: usize,
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedRider>, GenError> {
        let mut ids = IdSequence::with_capacity("R", count)?;

        Ok((0..count)
            .map(|i| {
                let person = self.pool.person(i, rng);
                GeneratedRider {
                    rider_id: ids.next_id(),
                    first_name: person.first_name,
                    last_name: person.last_name,
                    email: person.email,
                    phone: person.phone,
                    rating: person.rating,
                    created_at: now - Duration::days(rng.gen_range(0..365)),
                }
            })
            .collect())
    }
}

impl Default for RiderGenerator {
    fn default() -> Self {
        Self::new()
    }
}
