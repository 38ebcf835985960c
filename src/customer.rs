//! Customers and the rentals they hold.

use serde::{Deserialize, Serialize};

/// One movie rented for a number of days.
///
/// `days` is not validated: zero or negative counts are priced as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rental {
    /// Catalog identifier of the rented movie.
    #[serde(alias = "movieID")]
    pub movie_id: String,

    /// Rental duration in days.
    pub days: i64,
}

impl Rental {
    pub fn new(movie_id: impl Into<String>, days: i64) -> Self {
        Rental {
            movie_id: movie_id.into(),
            days,
        }
    }
}

/// A customer and their rentals, in statement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,

    #[serde(default)]
    pub rentals: Vec<Rental>,
}

impl Customer {
    /// Creates a customer with no rentals.
    pub fn new(name: impl Into<String>) -> Self {
        Customer {
            name: name.into(),
            rentals: Vec::new(),
        }
    }

    /// Appends a rental, keeping insertion order.
    pub fn add_rental(mut self, movie_id: impl Into<String>, days: i64) -> Self {
        self.rentals.push(Rental::new(movie_id, days));
        self
    }
}
