//! Configuration types for fleet data generation.

use serde::{Deserialize, Serialize};

/// Fixed base coordinate around which pickup, dropoff, and driver-location
/// points are perturbed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Origin {
    pub lat: f64,
    pub lon: f64,
}

impl Origin {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Downtown San Francisco, the default service area.
    pub const SAN_FRANCISCO: Origin = Origin::new(37.7749, -122.4194);

    /// Maximum perturbation applied to each coordinate axis, in degrees.
    pub const JITTER_DEGREES: f64 = 0.1;

    /// Returns a point near the origin, with an independent perturbation in
    /// `[0, JITTER_DEGREES)` on each axis.
    pub fn jittered_point(&self, rng: &mut impl rand::Rng) -> (f64, f64) {
        let lat = self.lat + rng.gen_range(0.0..Self::JITTER_DEGREES);
        let lon = self.lon + rng.gen_range(0.0..Self::JITTER_DEGREES);
        (lat, lon)
    }
}

/// Configuration for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of riders to generate.
    pub rider_count: usize,

    /// Number of drivers to generate.
    pub driver_count: usize,

    /// Number of rides to generate.
    pub ride_count: usize,

    /// Service area origin for all generated coordinates.
    pub origin: Origin,

    /// Batch size for database insertions.
    pub batch_size: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rider_count: 100,
            driver_count: 50,
            ride_count: 200,
            origin: Origin::SAN_FRANCISCO,
            batch_size: 50,
        }
    }
}
