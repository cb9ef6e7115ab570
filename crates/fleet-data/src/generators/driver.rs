//! Driver generation with license, vehicle, and availability status.

use rand::Rng;
use time::{Duration, OffsetDateTime};

use crate::error::GenError;
use crate::ids::IdSequence;
use crate::person::{DRIVER_NAMES, NamePool};

/// Driver availability status.
///
/// Only `Active` and `OnTrip` drivers are eligible for ride assignment and
/// location snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    Active,
    Inactive,
    OnTrip,
}

impl DriverStatus {
    /// Round-robin selection by row index.
    pub fn from_index(index: usize) -> Self {
        match index % 3 {
            0 => Self::Active,
            1 => Self::Inactive,
            _ => Self::OnTrip,
        }
    }

    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::OnTrip => "ON_TRIP",
        }
    }

    /// Whether this driver can be assigned a ride.
    pub fn is_eligible(&self) -> bool {
        !matches!(self, Self::Inactive)
    }
}

/// Generated driver data ready for database insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDriver {
    pub driver_id: String,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: String,
    pub phone: String,
    pub rating: f64,
    pub license_number: String,
    pub vehicle_id: String,
    pub status: DriverStatus,
    pub created_at: OffsetDateTime,
}

/// Generates drivers with round-robin statuses.
pub struct DriverGenerator {
    pool: NamePool,
}

impl DriverGenerator {
    pub fn new() -> Self {
        Self { pool: DRIVER_NAMES }
    }

    /// Generates `count` drivers. Statuses rotate ACTIVE, INACTIVE, ON_TRIP
    /// by index so every third driver is unavailable.
    pub fn generate_batch(
        &self,
        count: usize,
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedDriver>, GenError> {
        let mut ids = IdSequence::with_capacity("D", count)?;
        let mut licenses = IdSequence::with_capacity("LIC", count)?;
        let mut vehicles = IdSequence::with_capacity("V", count)?;

        Ok((0..count)
            .map(|i| {
                let person = self.pool.person(i, rng);
                GeneratedDriver {
                    driver_id: ids.next_id(),
                    first_name: person.first_name,
                    last_name: person.last_name,
                    email: person.email,
                    phone: person.phone,
                    rating: person.rating,
                    license_number: licenses.next_id(),
                    vehicle_id: vehicles.next_id(),
                    status: DriverStatus::from_index(i),
                    created_at: now - Duration::days(rng.gen_range(0..365)),
                }
            })
            .collect())
    }
}

impl Default for DriverGenerator {
    fn default() -> Self {
        Self::new()
    }
}
