//! Dataset orchestration: generates all five entity types in dependency order.

use rand::Rng;
use sqlx::PgPool;
use time::OffsetDateTime;
use tracing::info;

use crate::config::{Origin, SeedConfig};
use crate::db::{SeedError, Seeder};
use crate::error::GenError;
use crate::generators::{
    DriverGenerator, GeneratedDriver, GeneratedDriverLocation, GeneratedPayment, GeneratedRide,
    GeneratedRider, LocationGenerator, PaymentGenerator, RideGenerator, RiderGenerator,
};

/// A complete, internally consistent generated dataset.
#[derive(Debug)]
pub struct FleetDataset {
    pub riders: Vec<GeneratedRider>,
    pub drivers: Vec<GeneratedDriver>,
    pub rides: Vec<GeneratedRide>,
    pub payments: Vec<GeneratedPayment>,
    pub locations: Vec<GeneratedDriverLocation>,
    /// Wall-clock time captured once at the start of the run; every generated
    /// timestamp is relative to it.
    pub generated_at: OffsetDateTime,
}

/// Builder for a full generation run.
///
/// # Example
///
/// ```rust,ignore
/// let mut rng = StdRng::seed_from_u64(12345);
/// let dataset = DatasetBuilder::new()
///     .with_riders(100)
///     .with_drivers(50)
///     .with_rides(200)
///     .build(&mut rng)?;
/// ```
pub struct DatasetBuilder {
    config: SeedConfig,
}

impl DatasetBuilder {
    /// Creates a builder with default counts (100 riders, 50 drivers,
    /// 200 rides).
    pub fn new() -> Self {
        Self {
            config: SeedConfig::default(),
        }
    }

    /// Creates a builder from an existing configuration.
    pub fn with_config(config: SeedConfig) -> Self {
        Self { config }
    }

    /// Sets the number of riders to generate.
    pub fn with_riders(mut self, count: usize) -> Self {
        self.config.rider_count = count;
        self
    }

    /// Sets the number of drivers to generate.
    pub fn with_drivers(mut self, count: usize) -> Self {
        self.config.driver_count = count;
        self
    }

    /// Sets the number of rides to generate.
    pub fn with_rides(mut self, count: usize) -> Self {
        self.config.ride_count = count;
        self
    }

    /// Sets the service area origin.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.config.origin = origin;
        self
    }

    /// Generates the dataset without touching the database.
    ///
    /// Riders and drivers are generated first, then rides (which reference
    /// both), then payments (which reference completed rides) and driver
    /// locations. Deterministic for a given seeded `rng` and configuration.
    pub fn build(&self, rng: &mut impl Rng) -> Result<FleetDataset, GenError> {
        let generated_at = OffsetDateTime::now_utc();
        self.build_at(generated_at, rng)
    }

    /// Like [`build`](Self::build), with an explicit capture time.
    pub fn build_at(
        &self,
        generated_at: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> Result<FleetDataset, GenError> {
        let riders = RiderGenerator::new().generate_batch(self.config.rider_count, generated_at, rng)?;
        let drivers =
            DriverGenerator::new().generate_batch(self.config.driver_count, generated_at, rng)?;
        let rides = RideGenerator::new(self.config.origin).generate_batch(
            &riders,
            &drivers,
            self.config.ride_count,
            generated_at,
            rng,
        )?;
        let payments = PaymentGenerator::new().generate_for_rides(&rides)?;
        let locations = LocationGenerator::new(self.config.origin)
            .generate_for_drivers(&drivers, generated_at, rng)?;

        Ok(FleetDataset {
            riders,
            drivers,
            rides,
            payments,
            locations,
            generated_at,
        })
    }

    /// Generates the dataset and seeds it into the database, replacing any
    /// data from a previous run.
    pub async fn build_and_seed(
        &self,
        pool: &PgPool,
        rng: &mut impl Rng,
    ) -> Result<FleetDataset, SeedError> {
        let dataset = self.build(rng)?;

        info!(
            riders = dataset.riders.len(),
            drivers = dataset.drivers.len(),
            rides = dataset.rides.len(),
            "Generated dataset, seeding..."
        );

        let seeder = Seeder::new(pool.clone()).with_batch_size(self.config.batch_size);
        seeder.recreate_schema().await?;
        seeder.seed_dataset(&dataset).await?;

        Ok(dataset)
    }
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{DriverStatus, RideStatus};
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::{HashMap, HashSet};

    fn build_default(seed: u64) -> FleetDataset {
        let now = OffsetDateTime::now_utc();
        let mut rng = StdRng::seed_from_u64(seed);
        DatasetBuilder::new().build_at(now, &mut rng).unwrap()
    }

    #[test]
    fn test_default_scenario_counts() {
        let dataset = build_default(12345);
        assert_eq!(dataset.riders.len(), 100);
        assert_eq!(dataset.drivers.len(), 50);
        assert_eq!(dataset.rides.len(), 200);
    }

    #[test]
    fn test_ride_references_resolve() {
        let dataset = build_default(12345);
        let rider_ids: HashSet<_> = dataset.riders.iter().map(|r| &r.rider_id).collect();
        let driver_status: HashMap<_, _> = dataset
            .drivers
            .iter()
            .map(|d| (&d.driver_id, d.status))
            .collect();

        for ride in &dataset.rides {
            assert!(rider_ids.contains(&ride.rider_id));
            let status = driver_status.get(&ride.driver_id).copied().unwrap();
            assert_ne!(status, DriverStatus::Inactive);
        }
    }

    #[test]
    fn test_payment_references_resolve() {
        let dataset = build_default(12345);
        let rides: HashMap<_, _> = dataset.rides.iter().map(|r| (&r.ride_id, r)).collect();

        for payment in &dataset.payments {
            let ride = rides.get(&payment.ride_id).copied().unwrap();
            assert_eq!(ride.status, RideStatus::Completed);
            assert_eq!(payment.amount, ride.fare);
            assert_eq!(payment.transaction_time, ride.dropoff_time);
        }
    }

    #[test]
    fn test_location_references_resolve() {
        let dataset = build_default(12345);
        let driver_status: HashMap<_, _> = dataset
            .drivers
            .iter()
            .map(|d| (&d.driver_id, d.status))
            .collect();

        let mut seen = HashSet::new();
        for location in &dataset.locations {
            let status = driver_status.get(&location.driver_id).copied().unwrap();
            assert!(status == DriverStatus::Active || status == DriverStatus::OnTrip);
            assert!(seen.insert(&location.driver_id), "duplicate location row");
        }

        let available = dataset
            .drivers
            .iter()
            .filter(|d| d.status.is_eligible())
            .count();
        assert_eq!(dataset.locations.len(), available);
    }

    #[test]
    fn test_ids_unique_per_entity_type() {
        let dataset = build_default(12345);

        let rides: HashSet<_> = dataset.rides.iter().map(|r| &r.ride_id).collect();
        assert_eq!(rides.len(), dataset.rides.len());
        let payments: HashSet<_> = dataset.payments.iter().map(|p| &p.payment_id).collect();
        assert_eq!(payments.len(), dataset.payments.len());
        let locations: HashSet<_> = dataset.locations.iter().map(|l| &l.location_id).collect();
        assert_eq!(locations.len(), dataset.locations.len());
    }

    #[test]
    fn test_same_seed_reproduces_dataset() {
        let now = OffsetDateTime::now_utc();
        let builder = DatasetBuilder::new();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = builder.build_at(now, &mut rng_a).unwrap();
        let b = builder.build_at(now, &mut rng_b).unwrap();

        assert_eq!(a.riders, b.riders);
        assert_eq!(a.drivers, b.drivers);
        assert_eq!(a.rides, b.rides);
        assert_eq!(a.payments, b.payments);
        assert_eq!(a.locations, b.locations);
    }

    #[test]
    fn test_different_seed_changes_dataset() {
        let now = OffsetDateTime::now_utc();
        let builder = DatasetBuilder::new();

        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);
        let a = builder.build_at(now, &mut rng_a).unwrap();
        let b = builder.build_at(now, &mut rng_b).unwrap();

        assert_ne!(a.rides, b.rides);
    }

    #[test]
    fn test_zero_rides_still_generates_locations() {
        let now = OffsetDateTime::now_utc();
        let mut rng = StdRng::seed_from_u64(9);
        let dataset = DatasetBuilder::new()
            .with_rides(0)
            .build_at(now, &mut rng)
            .unwrap();

        assert!(dataset.rides.is_empty());
        assert!(dataset.payments.is_empty());
        assert!(!dataset.locations.is_empty());
    }
}
