//! Driver location snapshots.

use rand::Rng;
use time::OffsetDateTime;

use super::driver::GeneratedDriver;
use crate::config::Origin;
use crate::error::GenError;
use crate::ids::IdSequence;

/// Generated driver location ready for database insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDriverLocation {
    pub location_id: String,
    pub driver_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub recorded_at: OffsetDateTime,
}

/// Generates a single location snapshot per available driver.
pub struct LocationGenerator {
    origin: Origin,
}

impl LocationGenerator {
    pub fn new(origin: Origin) -> Self {
        Self { origin }
    }

    /// Emits exactly one location for every driver with status ACTIVE or
    /// ON_TRIP. All rows share the snapshot timestamp `recorded_at`.
    pub fn generate_for_drivers(
        &self,
        drivers: &[GeneratedDriver],
        recorded_at: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedDriverLocation>, GenError> {
        let available: Vec<&GeneratedDriver> =
            drivers.iter().filter(|d| d.status.is_eligible()).collect();
        let mut ids = IdSequence::with_capacity("L", available.len())?;

        Ok(available
            .iter()
            .map(|driver| {
                let (latitude, longitude) = self.origin.jittered_point(rng);
                GeneratedDriverLocation {
                    location_id: ids.next_id(),
                    driver_id: driver.driver_id.clone(),
                    latitude,
                    longitude,
                    recorded_at,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{DriverGenerator, DriverStatus};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_one_location_per_available_driver() {
        let mut rng = StdRng::seed_from_u64(51);
        let now = OffsetDateTime::now_utc();
        let drivers = DriverGenerator::new()
            .generate_batch(30, now, &mut rng)
            .unwrap();

        let locations = LocationGenerator::new(Origin::SAN_FRANCISCO)
            .generate_for_drivers(&drivers, now, &mut rng)
            .unwrap();

        let available: Vec<_> = drivers.iter().filter(|d| d.status.is_eligible()).collect();
        assert_eq!(locations.len(), available.len());

        let located: std::collections::HashSet<_> =
            locations.iter().map(|l| &l.driver_id).collect();
        assert_eq!(located.len(), locations.len());
        for driver in &available {
            assert!(located.contains(&driver.driver_id));
        }
    }

    #[test]
    fn test_inactive_drivers_have_no_location() {
        let mut rng = StdRng::seed_from_u64(52);
        let now = OffsetDateTime::now_utc();
        let drivers = DriverGenerator::new()
            .generate_batch(30, now, &mut rng)
            .unwrap();

        let locations = LocationGenerator::new(Origin::SAN_FRANCISCO)
            .generate_for_drivers(&drivers, now, &mut rng)
            .unwrap();

        for driver in drivers.iter().filter(|d| d.status == DriverStatus::Inactive) {
            assert!(!locations.iter().any(|l| l.driver_id == driver.driver_id));
        }
    }

    #[test]
    fn test_snapshot_timestamp_is_shared() {
        let mut rng = StdRng::seed_from_u64(53);
        let now = OffsetDateTime::now_utc();
        let drivers = DriverGenerator::new()
            .generate_batch(12, now, &mut rng)
            .unwrap();

        let locations = LocationGenerator::new(Origin::SAN_FRANCISCO)
            .generate_for_drivers(&drivers, now, &mut rng)
            .unwrap();

        assert!(locations.iter().all(|l| l.recorded_at == now));
    }
}
