//! Per-rental amount and frequent renter point calculations.

use crate::error::Result;
use crate::money::Money;
use crate::movie::Movie;
use crate::pricing::PricingRules;

/// Points awarded for every priced rental.
pub const BASE_FREQUENT_RENTER_POINTS: u32 = 1;

/// Extra points for rentals past the category's bonus threshold.
pub const BONUS_FREQUENT_RENTER_POINTS: u32 = 1;

/// Computes the charge for renting `movie` for `days`.
///
/// Fails with [`RentalError::InvalidCategory`](crate::RentalError::InvalidCategory)
/// if `rules` has no entry for the movie's category.
pub fn calculate_amount(rules: &PricingRules, movie: &Movie, days: i64) -> Result<Money> {
    let rule = rules.rule_for(movie.category)?;
    rule.amount_for(days)
}

/// Computes the frequent renter points earned by renting `movie` for `days`.
pub fn calculate_frequent_renter_points(
    rules: &PricingRules,
    movie: &Movie,
    days: i64,
) -> Result<u32> {
    let rule = rules.rule_for(movie.category)?;
    let bonus = if rule.earns_bonus(days) {
        BONUS_FREQUENT_RENTER_POINTS
    } else {
        0
    };

    Ok(BASE_FREQUENT_RENTER_POINTS + bonus)
}
