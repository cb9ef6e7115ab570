//! Personal attribute synthesis for riders and drivers.
//!
//! Names are selected by row index from fixed pools so they cycle predictably
//! across generated rows; contact fields are derived from the selected name.
//! Phone digits and ratings come from the injected RNG.

use rand::Rng;

/// Fixed first/last name pools for one population.
#[derive(Debug, Clone, Copy)]
pub struct NamePool {
    first: [&'static str; 10],
    last: [&'static str; 8],
}

/// Name pool used for riders.
pub const RIDER_NAMES: NamePool = NamePool {
    first: [
        "James", "Maria", "Wei", "Aisha", "Carlos", "Emma", "Raj", "Sofia", "Liam", "Yuki",
    ],
    last: [
        "Smith", "Garcia", "Chen", "Patel", "Johnson", "Kim", "Martinez", "Nguyen",
    ],
};

/// Name pool used for drivers, distinct from the rider pool.
pub const DRIVER_NAMES: NamePool = NamePool {
    first: [
        "Ahmed", "Elena", "Marcus", "Priya", "Diego", "Hannah", "Kofi", "Ingrid", "Omar", "Mei",
    ],
    last: [
        "Brown", "Lopez", "Wang", "Singh", "Miller", "Park", "Silva", "Tran",
    ],
};

/// Synthesized personal attributes for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonAttributes {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: String,
    pub phone: String,
    pub rating: f64,
}

impl NamePool {
    /// Synthesizes the personal attributes for row `index`.
    ///
    /// Name selection is index-derived (names cycle across rows); phone and
    /// rating are drawn from `rng`.
    pub fn person(&self, index: usize, rng: &mut impl Rng) -> PersonAttributes {
        let first_name = self.first[index % self.first.len()];
        let last_name = self.last[index % self.last.len()];

        PersonAttributes {
            first_name,
            last_name,
            email: email_for(first_name, last_name, index),
            phone: phone(rng),
            rating: rating(rng),
        }
    }
}

/// Derives an email from a name: `lower(first).lower(last)<index % 99>@email.com`.
fn email_for(first: &str, last: &str, index: usize) -> String {
    format!(
        "{}.{}{}@email.com",
        first.to_lowercase(),
        last.to_lowercase(),
        index % 99
    )
}

/// Generates a `555-XXX-XXXX` phone number with random digit groups.
fn phone(rng: &mut impl Rng) -> String {
    format!(
        "555-{:03}-{:04}",
        rng.gen_range(100..=999),
        rng.gen_range(1000..=9999)
    )
}

/// Generates a rating in `[3.5, 5.5)`.
fn rating(rng: &mut impl Rng) -> f64 {
    3.5 + rng.r#gen::<f64>() * 2.0
}
