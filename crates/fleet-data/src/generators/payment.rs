//! Payment generation derived from completed rides.

use time::OffsetDateTime;

use super::ride::{GeneratedRide, RideStatus};
use crate::error::GenError;
use crate::ids::IdSequence;

/// Every generated payment settles in full.
pub const PAYMENT_STATUS: &str = "COMPLETED";

/// Payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    DigitalWallet,
    Cash,
}

impl PaymentMethod {
    /// Round-robin selection by row index.
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::CreditCard,
            1 => Self::DebitCard,
            2 => Self::DigitalWallet,
            _ => Self::Cash,
        }
    }

    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "CREDIT_CARD",
            Self::DebitCard => "DEBIT_CARD",
            Self::DigitalWallet => "DIGITAL_WALLET",
            Self::Cash => "CASH",
        }
    }
}

/// Generated payment data ready for database insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPayment {
    pub payment_id: String,
    pub ride_id: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub transaction_time: OffsetDateTime,
}

/// Generates one payment per completed ride.
pub struct PaymentGenerator;

impl PaymentGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Emits a payment for every ride with status COMPLETED, sorted by
    /// transaction time ascending. The amount is the ride's fare and the
    /// transaction time is the ride's dropoff time.
    pub fn generate_for_rides(
        &self,
        rides: &[GeneratedRide],
    ) -> Result<Vec<GeneratedPayment>, GenError> {
        let completed: Vec<&GeneratedRide> = rides
            .iter()
            .filter(|r| r.status == RideStatus::Completed)
            .collect();
        let mut ids = IdSequence::with_capacity("P", completed.len())?;

        let mut payments: Vec<GeneratedPayment> = completed
            .iter()
            .enumerate()
            .map(|(i, ride)| GeneratedPayment {
                payment_id: ids.next_id(),
                ride_id: ride.ride_id.clone(),
                amount: ride.fare,
                payment_method: PaymentMethod::from_index(i),
                transaction_time: ride.dropoff_time,
            })
            .collect();

        payments.sort_by_key(|p| p.transaction_time);

        Ok(payments)
    }
}

impl Default for PaymentGenerator {
    fn default() -> Self {
        Self::new()
    }
}
