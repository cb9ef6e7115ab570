//! Entity generators for fleet data.
//!
//! One generator per entity type:
//! - [`RiderGenerator`]: riders with contact details and ratings
//! - [`DriverGenerator`]: drivers with license, vehicle, and status
//! - [`RideGenerator`]: rides joining riders to eligible drivers
//! - [`PaymentGenerator`]: payments derived from completed rides
//! - [`LocationGenerator`]: location snapshots for active/on-trip drivers
//!
//! Generation must respect the dependency order: riders and drivers before
//! rides, rides before payments, drivers before locations. The
//! [`DatasetBuilder`](crate::builders::DatasetBuilder) enforces this.

pub mod driver;
pub mod location;
pub mod payment;
pub mod ride;
pub mod rider;

pub use driver::{DriverGenerator, DriverStatus, GeneratedDriver};
pub use location::{GeneratedDriverLocation, LocationGenerator};
pub use payment::{GeneratedPayment, PaymentGenerator, PaymentMethod, PAYMENT_STATUS};
pub use ride::{GeneratedRide, RideGenerator, RideStatus};
pub use rider::{GeneratedRider, RiderGenerator};
