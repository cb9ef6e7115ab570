//! Ride generation joining riders to eligible drivers.

use rand::Rng;
use time::{Duration, OffsetDateTime};

use super::driver::GeneratedDriver;
use super::rider::GeneratedRider;
use crate::config::Origin;
use crate::error::GenError;
use crate::ids::IdSequence;

/// Ride lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideStatus {
    Completed,
    InProgress,
    Cancelled,
    Scheduled,
}

impl RideStatus {
    /// Round-robin selection by row index.
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Completed,
            1 => Self::InProgress,
            2 => Self::Cancelled,
            _ => Self::Scheduled,
        }
    }

    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "COMPLETED",
            Self::InProgress => "IN_PROGRESS",
            Self::Cancelled => "CANCELLED",
            Self::Scheduled => "SCHEDULED",
        }
    }
}

/// Generated ride data ready for database insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRide {
    pub ride_id: String,
    pub rider_id: String,
    pub driver_id: String,
    pub pickup_lat: f64,
    pub pickup_lon: f64,
    pub dropoff_lat: f64,
    pub dropoff_lon: f64,
    pub request_time: OffsetDateTime,
    pub pickup_time: OffsetDateTime,
    pub dropoff_time: OffsetDateTime,
    pub status: RideStatus,
    pub fare: f64,
    pub distance_km: f64,
}

/// Generates rides referencing previously generated riders and drivers.
pub struct RideGenerator {
    origin: Origin,
}

impl RideGenerator {
    pub fn new(origin: Origin) -> Self {
        Self { origin }
    }

    /// Generates `count` rides, sorted by request time ascending.
    ///
    /// Request times fall within the week preceding `now`. Pickup and dropoff
    /// times are index-derived offsets from the request time, so
    /// `request_time <= pickup_time <= dropoff_time` holds for every row by
    /// construction. Only drivers with status other than INACTIVE are
    /// assigned; an empty eligible pool (or an empty rider pool) with
    /// `count > 0` aborts the run.
    pub fn generate_batch(
        &self,
        riders: &[GeneratedRider],
        drivers: &[GeneratedDriver],
        count: usize,
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedRide>, GenError> {
        let mut ids = IdSequence::with_capacity("RIDE", count)?;

        if count == 0 {
            return Ok(Vec::new());
        }
        if riders.is_empty() {
            return Err(GenError::EmptyRiderPool);
        }
        let eligible: Vec<&GeneratedDriver> =
            drivers.iter().filter(|d| d.status.is_eligible()).collect();
        if eligible.is_empty() {
            return Err(GenError::NoEligibleDrivers);
        }

        let mut rides: Vec<GeneratedRide> = (0..count)
            .map(|i| {
                let request_time = now - Duration::minutes(rng.gen_range(0..10_080));
                let rider = &riders[rng.gen_range(0..riders.len())];
                let driver = eligible[rng.gen_range(0..eligible.len())];
                let (pickup_lat, pickup_lon) = self.origin.jittered_point(rng);
                let (dropoff_lat, dropoff_lon) = self.origin.jittered_point(rng);

                GeneratedRide {
                    ride_id: ids.next_id(),
                    rider_id: rider.rider_id.clone(),
                    driver_id: driver.driver_id.clone(),
                    pickup_lat,
                    pickup_lon,
                    dropoff_lat,
                    dropoff_lon,
                    request_time,
                    pickup_time: request_time + Duration::minutes(1 + (i % 10) as i64),
                    dropoff_time: request_time + Duration::minutes(15 + (i % 30) as i64),
                    status: RideStatus::from_index(i),
                    fare: 10.0 + rng.gen_range(0.0..40.0),
                    distance_km: 1.0 + rng.gen_range(0.0..10.0),
                }
            })
            .collect();

        // Chronological output keeps downstream consumers coherent.
        rides.sort_by_key(|r| r.request_time);

        Ok(rides)
    }
}
