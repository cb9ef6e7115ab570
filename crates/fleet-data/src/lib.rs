//! Synthetic fleet data generation for a ride-hailing platform.
//!
//! This crate produces a referentially consistent dataset of riders, drivers,
//! rides, payments, and driver locations, and seeds it into Postgres for
//! manual verification and integration testing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fleet_data::prelude::*;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//! let dataset = DatasetBuilder::new()
//!     .with_riders(100)
//!     .with_drivers(50)
//!     .with_rides(200)
//!     .build(&mut rng)?;
//!
//! Seeder::new(pool).seed_dataset(&dataset).await?;
//! ```
//!
//! Generation is deterministic for a given RNG seed and configuration, so a
//! rerun with the same seed reproduces the exact same dataset.

pub mod builders;
pub mod config;
pub mod db;
pub mod error;
pub mod generators;
pub mod ids;
pub mod person;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{DatasetBuilder, FleetDataset};
    pub use crate::config::{Origin, SeedConfig};
    pub use crate::db::Seeder;
    pub use crate::error::GenError;
    pub use crate::generators::{
        DriverGenerator, DriverStatus, LocationGenerator, PaymentGenerator, PaymentMethod,
        RideGenerator, RideStatus, RiderGenerator,
    };
    pub use crate::ids::IdSequence;
    pub use crate::person::NamePool;
}
