//! Customer statement generation.
//!
//! Prices each rental against the catalog and rule table, collects unknown
//! movie references as errors, and renders the totals into a text report.

use crate::calculator::{calculate_amount, calculate_frequent_renter_points};
use crate::customer::{Customer, Rental};
use crate::error::Result;
use crate::money::Money;
use crate::movie::{Movie, MovieCatalog, MovieCategory};
use crate::pricing::PricingRules;
use crate::template::{render, StatementFields, TemplateOptions, STATEMENT_TEMPLATE};
use log::{debug, warn};
use serde::Serialize;

/// Priced result of one resolved rental.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalComputation<'a> {
    pub movie: &'a Movie,
    pub amount: Money,
    pub points: u32,
}

impl RentalComputation<'_> {
    /// Formats the statement line: `\t<title>\t<amount>`.
    pub fn line(&self) -> String {
        format!("\t{}\t{}", self.movie.title, self.amount)
    }
}

/// Rendered statement plus the rentals that could not be priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalStatement {
    pub statement: String,
    pub errors: Vec<String>,
}

impl RentalStatement {
    /// Returns `true` if any rental referenced an unknown movie.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Produces statements using a fixed rule table.
///
/// Holds no state between calls; one generator can serve any number of
/// customers, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct StatementGenerator {
    rules: PricingRules,
}

impl StatementGenerator {
    /// Creates a generator that prices rentals with `rules`.
    ///
    /// A table with gaps is accepted; rentals of an uncovered category fail
    /// when priced.
    pub fn new(rules: PricingRules) -> Self {
        let missing = rules.missing_categories();
        if !missing.is_empty() {
            let codes: Vec<&str> = missing.iter().map(MovieCategory::code).collect();
            warn!("Pricing rules have no entry for {}", codes.join(", "));
        }
        StatementGenerator { rules }
    }

    /// Returns the rule table in use.
    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    /// Builds the statement for `customer`.
    ///
    /// Rentals whose movie is missing from `catalog` are skipped and reported
    /// in [`RentalStatement::errors`]; the statement is still produced from
    /// the rest. A movie whose category has no pricing rule fails the call.
    pub fn generate(&self, customer: &Customer, catalog: &MovieCatalog) -> Result<RentalStatement> {
        let mut errors = Vec::new();
        let mut computations = Vec::with_capacity(customer.rentals.len());

        for rental in &customer.rentals {
            match catalog.get(&rental.movie_id) {
                Some(movie) => computations.push(self.compute(movie, rental)?),
                None => {
                    warn!(
                        "Customer {}: movie {} not found, skipping rental",
                        customer.name, rental.movie_id
                    );
                    errors.push(format!("Movie with ID {} not found", rental.movie_id));
                }
            }
        }

        let total_amount = Money::checked_sum(computations.iter().map(|c| c.amount))?;
        let total_points: u32 = computations.iter().map(|c| c.points).sum();
        let rental_lines = computations
            .iter()
            .map(|c| c.line())
            .collect::<Vec<_>>()
            .join("\n");

        let fields = StatementFields {
            customer_name: &customer.name,
            rental_lines,
            total_amount,
            total_points,
        };
        let statement = render(STATEMENT_TEMPLATE, &fields, TemplateOptions::default())?;

        debug!(
            "Customer {}: {} rentals priced, {} unresolved, owes {}, earned {} points",
            customer.name,
            computations.len(),
            errors.len(),
            total_amount,
            total_points
        );

        Ok(RentalStatement { statement, errors })
    }

    fn compute<'a>(&self, movie: &'a Movie, rental: &Rental) -> Result<RentalComputation<'a>> {
        if rental.days < 0 {
            warn!(
                "Movie {}: negative rental duration {} priced as given",
                rental.movie_id, rental.days
            );
        }

        let amount = calculate_amount(&self.rules, movie, rental.days)?;
        let points = calculate_frequent_renter_points(&self.rules, movie, rental.days)?;
        debug!(
            "Movie {} ({}): {} days, amount {}, {} points",
            rental.movie_id, movie.category, rental.days, amount, points
        );

        Ok(RentalComputation {
            movie,
            amount,
            points,
        })
    }
}

/// Builds a statement with the standard price list.
pub fn generate_statement(customer: &Customer, catalog: &MovieCatalog) -> Result<RentalStatement> {
    StatementGenerator::default().generate(customer, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RentalError;
    use crate::pricing::PricingRule;

    fn catalog() -> MovieCatalog {
        [
            ("F001", Movie::new("Ran", MovieCategory::Regular)),
            ("F002", Movie::new("Trois Couleurs: Bleu", MovieCategory::Regular)),
            ("F003", Movie::new("Sunes Sommar", MovieCategory::Childrens)),
            ("F004", Movie::new("Yara", MovieCategory::NewRelease)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_rental_line_format() {
        let movie = Movie::new("Ran", MovieCategory::Regular);
        let computation = RentalComputation {
            movie: &movie,
            amount: "3.5".parse().unwrap(),
            points: 1,
        };
        assert_eq!(computation.line(), "\tRan\t3.50");
    }

    #[test]
    fn test_no_rentals_still_renders_all_sections() {
        let result = generate_statement(&Customer::new("empty"), &catalog()).unwrap();

        assert!(!result.has_errors());
        assert_eq!(
            result.statement,
            "Rental Record for empty\n\nAmount owed is 0.00\nYou earned 0 frequent renter points"
        );
    }

    #[test]
    fn test_unknown_movie_is_reported_not_fatal() {
        let customer = Customer::new("invalid")
            .add_rental("F001", 1)
            .add_rental("INVALID", 1);
        let result = generate_statement(&customer, &catalog()).unwrap();

        assert_eq!(result.errors, vec!["Movie with ID INVALID not found"]);
        assert!(result.statement.contains("\tRan\t2.00"));
        assert!(!result.statement.contains("INVALID"));
    }

    #[test]
    fn test_missing_rule_fails_whole_statement() {
        let regular_only = PricingRules::new([(
            MovieCategory::Regular,
            PricingRule {
                base_price: "2".parse().unwrap(),
                threshold_days: 2,
                daily_rate: "1.5".parse().unwrap(),
                bonus_threshold_days: None,
            },
        )]);
        let generator = StatementGenerator::new(regular_only);
        let customer = Customer::new("martin")
            .add_rental("F001", 3)
            .add_rental("F004", 2);

        let err = generator.generate(&customer, &catalog()).unwrap_err();
        assert_eq!(err, RentalError::InvalidCategory("new".to_string()));
    }

    #[test]
    fn test_amount_overflow_is_returned_not_panicked() {
        let huge = PricingRule {
            base_price: "0".parse().unwrap(),
            threshold_days: 0,
            daily_rate: "100000000000".parse().unwrap(),
            bonus_threshold_days: None,
        };
        let generator =
            StatementGenerator::new(PricingRules::new(MovieCategory::ALL.map(|c| (c, huge))));
        let customer = Customer::new("huge").add_rental("F001", i64::MAX);

        let err = generator.generate(&customer, &catalog()).unwrap_err();
        assert!(matches!(err, RentalError::AmountOverflow(_)));
    }

    #[test]
    fn test_total_overflow_is_returned_not_panicked() {
        let near_max = PricingRule {
            base_price: "50000000000000000000000000000".parse().unwrap(),
            threshold_days: 0,
            daily_rate: "0".parse().unwrap(),
            bonus_threshold_days: None,
        };
        let generator =
            StatementGenerator::new(PricingRules::new(MovieCategory::ALL.map(|c| (c, near_max))));
        let customer = Customer::new("twice").add_rental("F001", 1).add_rental("F002", 1);

        let err = generator.generate(&customer, &catalog()).unwrap_err();
        assert!(matches!(err, RentalError::AmountOverflow(_)));
    }

    #[test]
    fn test_gappy_rules_still_price_covered_categories() {
        let regular = *PricingRules::standard()
            .rule_for(MovieCategory::Regular)
            .unwrap();
        let generator = StatementGenerator::new(PricingRules::new([(MovieCategory::Regular, regular)]));
        assert!(!generator.rules().is_complete());

        let customer = Customer::new("martin").add_rental("F001", 3);
        let result = generator.generate(&customer, &catalog()).unwrap();
        assert!(result.statement.contains("Amount owed is 3.50"));
    }

    #[test]
    fn test_substitute_rules_change_pricing() {
        let flat = PricingRule {
            base_price: "1".parse().unwrap(),
            threshold_days: 1,
            daily_rate: "1".parse().unwrap(),
            bonus_threshold_days: Some(0),
        };
        let generator =
            StatementGenerator::new(PricingRules::new(MovieCategory::ALL.map(|c| (c, flat))));
        let customer = Customer::new("flat").add_rental("F003", 4);

        let result = generator.generate(&customer, &catalog()).unwrap();
        assert!(result.statement.contains("\tSunes Sommar\t4.00"));
        assert!(result.statement.contains("You earned 2 frequent renter points"));
    }
}
