//! # Rental Statement
//!
//! Prices video rentals, awards frequent renter points and renders the
//! customer statement.
//!
//! ## Design Principles
//!
//! - **Exact money**: amounts use `rust_decimal`, shown with 2 decimal places
//! - **One rule table**: every category's arithmetic comes from [`PricingRules`]
//! - **Partial failure**: unknown movie IDs are reported, not fatal
//! - **Fail fast on bad data**: a category without a rule is an error, never zero
//!
//! ## Example
//!
//! ```
//! use rental_statement::{generate_statement, Customer, Movie, MovieCatalog, MovieCategory};
//!
//! let catalog: MovieCatalog = [("F001", Movie::new("Ran", MovieCategory::Regular))]
//!     .into_iter()
//!     .collect();
//! let customer = Customer::new("martin").add_rental("F001", 3);
//!
//! let result = generate_statement(&customer, &catalog).unwrap();
//! assert!(result.statement.contains("Amount owed is 3.50"));
//! ```

pub mod calculator;
pub mod customer;
pub mod error;
pub mod money;
pub mod movie;
pub mod pricing;
pub mod statement;
pub mod template;

pub use calculator::{calculate_amount, calculate_frequent_renter_points};
pub use customer::{Customer, Rental};
pub use error::{RentalError, Result};
pub use money::Money;
pub use movie::{Movie, MovieCatalog, MovieCategory};
pub use pricing::{PricingRule, PricingRules};
pub use statement::{generate_statement, RentalComputation, RentalStatement, StatementGenerator};
pub use template::{render, StatementFields, Substitutions, TemplateOptions};
