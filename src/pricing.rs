//! Pricing rule table.
//!
//! Every amount and bonus-point decision is derived from a [`PricingRule`];
//! the calculators hold no category-specific arithmetic of their own.

use crate::error::{RentalError, Result};
use crate::money::Money;
use crate::movie::MovieCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Days included in the regular base price.
pub const REGULAR_THRESHOLD_DAYS: i64 = 2;

/// Days included in the children's base price.
pub const CHILDRENS_THRESHOLD_DAYS: i64 = 3;

/// A new release must be rented longer than this to earn the bonus point.
pub const NEW_RELEASE_BONUS_THRESHOLD_DAYS: i64 = 2;

/// Pricing parameters for one movie category.
///
/// `amount = base_price + max(0, days - threshold_days) * daily_rate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRule {
    /// Flat charge covering the first `threshold_days`.
    pub base_price: Money,

    /// Days included in `base_price`.
    pub threshold_days: i64,

    /// Charge for every day past the threshold.
    pub daily_rate: Money,

    /// Rentals longer than this earn a bonus point. `None` means never.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_threshold_days: Option<i64>,
}

impl PricingRule {
    /// Base price plus overage for the days past the threshold.
    ///
    /// Fails with [`RentalError::AmountOverflow`] when the charge leaves the
    /// decimal range, which only a substitute table with huge rates can reach.
    pub fn amount_for(&self, days: i64) -> Result<Money> {
        let overage_days = days.saturating_sub(self.threshold_days).max(0);
        self.base_price
            .checked_add(self.daily_rate.checked_mul(overage_days)?)
    }

    /// Returns `true` if a rental of `days` qualifies for the bonus point.
    pub fn earns_bonus(&self, days: i64) -> bool {
        self.bonus_threshold_days
            .is_some_and(|threshold| days > threshold)
    }
}

/// Immutable mapping from category to its pricing rule.
///
/// Built once and passed by reference to the calculators. The standard
/// table covers every [`MovieCategory`]; a substitute table may leave
/// gaps, in which case lookups fail with [`RentalError::InvalidCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricingRules {
    rules: HashMap<MovieCategory, PricingRule>,
}

impl PricingRules {
    /// Creates a rule table from `(category, rule)` pairs.
    /// Later entries replace earlier ones for the same category.
    pub fn new(rules: impl IntoIterator<Item = (MovieCategory, PricingRule)>) -> Self {
        PricingRules {
            rules: rules.into_iter().collect(),
        }
    }

    /// The store's published price list.
    ///
    /// | Category   | base | threshold | rate | bonus after |
    /// |------------|------|-----------|------|-------------|
    /// | regular    | 2.0  | 2         | 1.5  | -           |
    /// | childrens  | 1.5  | 3         | 1.5  | -           |
    /// | new        | 0.0  | 0         | 3.0  | 2           |
    ///
    /// New releases use the shared formula with a zero base and zero
    /// threshold, which reduces to a flat `days * 3.0`.
    pub fn standard() -> Self {
        let extended_rental_daily_rate = Money::from_parts(15, 1);

        PricingRules::new([
            (
                MovieCategory::Regular,
                PricingRule {
                    base_price: Money::from_parts(2, 0),
                    threshold_days: REGULAR_THRESHOLD_DAYS,
                    daily_rate: extended_rental_daily_rate,
                    bonus_threshold_days: None,
                },
            ),
            (
                MovieCategory::Childrens,
                PricingRule {
                    base_price: Money::from_parts(15, 1),
                    threshold_days: CHILDRENS_THRESHOLD_DAYS,
                    daily_rate: extended_rental_daily_rate,
                    bonus_threshold_days: None,
                },
            ),
            (
                MovieCategory::NewRelease,
                PricingRule {
                    base_price: Money::ZERO,
                    threshold_days: 0,
                    daily_rate: Money::from_parts(3, 0),
                    bonus_threshold_days: Some(NEW_RELEASE_BONUS_THRESHOLD_DAYS),
                },
            ),
        ])
    }

    /// Returns the rule for `category`.
    pub fn rule_for(&self, category: MovieCategory) -> Result<&PricingRule> {
        self.rules
            .get(&category)
            .ok_or_else(|| RentalError::InvalidCategory(category.code().to_string()))
    }

    /// Categories with no rule, in declaration order.
    pub fn missing_categories(&self) -> Vec<MovieCategory> {
        MovieCategory::ALL
            .into_iter()
            .filter(|category| !self.rules.contains_key(category))
            .collect()
    }

    /// Returns `true` if every category has a rule.
    pub fn is_complete(&self) -> bool {
        self.missing_categories().is_empty()
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        PricingRules::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_covers_every_category() {
        let rules = PricingRules::standard();
        assert!(rules.is_complete());
        for category in MovieCategory::ALL {
            assert!(rules.rule_for(category).is_ok());
        }
    }

    #[test]
    fn test_only_new_release_has_bonus_threshold() {
        let rules = PricingRules::standard();
        assert_eq!(
            rules
                .rule_for(MovieCategory::NewRelease)
                .unwrap()
                .bonus_threshold_days,
            Some(2)
        );
        assert!(rules
            .rule_for(MovieCategory::Regular)
            .unwrap()
            .bonus_threshold_days
            .is_none());
        assert!(rules
            .rule_for(MovieCategory::Childrens)
            .unwrap()
            .bonus_threshold_days
            .is_none());
    }

    #[test]
    fn test_new_release_rule_reduces_to_flat_rate() {
        let rule = *PricingRules::standard()
            .rule_for(MovieCategory::NewRelease)
            .unwrap();
        for days in 0..10 {
            assert_eq!(
                rule.amount_for(days).unwrap(),
                Money::from_parts(3, 0).checked_mul(days).unwrap()
            );
        }
    }

    #[test]
    fn test_amount_for_never_charges_negative_overage() {
        let rule = *PricingRules::standard()
            .rule_for(MovieCategory::Regular)
            .unwrap();
        assert_eq!(rule.amount_for(-5).unwrap().to_string(), "2.00");
        assert_eq!(rule.amount_for(i64::MIN).unwrap().to_string(), "2.00");
    }

    #[test]
    fn test_missing_rule_is_invalid_category() {
        let rules = PricingRules::new([(
            MovieCategory::Regular,
            *PricingRules::standard()
                .rule_for(MovieCategory::Regular)
                .unwrap(),
        )]);

        assert!(!rules.is_complete());
        assert_eq!(
            rules.missing_categories(),
            vec![MovieCategory::NewRelease, MovieCategory::Childrens]
        );
        assert_eq!(
            rules.rule_for(MovieCategory::Childrens).unwrap_err(),
            RentalError::InvalidCategory("childrens".to_string())
        );
    }

    #[test]
    fn test_huge_rate_overflows_to_error() {
        let rule = PricingRule {
            base_price: Money::ZERO,
            threshold_days: 0,
            daily_rate: "100000000000".parse().unwrap(),
            bonus_threshold_days: None,
        };
        assert!(matches!(
            rule.amount_for(i64::MAX),
            Err(RentalError::AmountOverflow(_))
        ));
    }

    #[test]
    fn test_earns_bonus_is_strictly_greater() {
        let rule = PricingRule {
            base_price: Money::ZERO,
            threshold_days: 0,
            daily_rate: Money::ZERO,
            bonus_threshold_days: Some(2),
        };
        assert!(!rule.earns_bonus(2));
        assert!(rule.earns_bonus(3));
    }
}
