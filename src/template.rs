//! Placeholder substitution for report templates.
//!
//! A placeholder is `{key}` where `key` is either all digits or an
//! identifier (ASCII letter, `_` or `$`, then word characters, `-` or `$`)
//! optionally followed by `.segment` parts. Braced text that does not fit
//! this shape is copied through unchanged.

use crate::error::{RentalError, Result};
use crate::money::Money;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// A source of placeholder values.
pub trait Substitutions {
    /// Returns the rendered value for `key`, or `None` if it has none.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Dotted keys are looked up verbatim, so nested data is supplied flattened
/// (`"customer.name"` rather than a nested map).
impl<S: BuildHasher> Substitutions for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Rendering behavior for placeholders without a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateOptions {
    /// Leave unknown placeholders in the output instead of failing.
    pub ignore_missing: bool,
}

/// Layout of a customer statement.
pub const STATEMENT_TEMPLATE: &str = "Rental Record for {customerName}\n\
{rentalLines}\n\
Amount owed is {totalAmount}\n\
You earned {totalPoints} frequent renter points";

/// The values a statement template can reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementFields<'a> {
    pub customer_name: &'a str,
    pub rental_lines: String,
    pub total_amount: Money,
    pub total_points: u32,
}

impl Substitutions for StatementFields<'_> {
    fn lookup(&self, key: &str) -> Option<String> {
        match key {
            "customerName" => Some(self.customer_name.to_string()),
            "rentalLines" => Some(self.rental_lines.clone()),
            "totalAmount" => Some(self.total_amount.to_string()),
            "totalPoints" => Some(self.total_points.to_string()),
            _ => None,
        }
    }
}

/// Replaces every placeholder in `template` with its value from `data`.
///
/// Fails with [`RentalError::MissingTemplateKey`] on the first placeholder
/// `data` cannot resolve, unless `options.ignore_missing` is set.
pub fn render<S>(template: &str, data: &S, options: TemplateOptions) -> Result<String>
where
    S: Substitutions + ?Sized,
{
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) if is_placeholder_key(&after[..close]) => {
                let key = &after[..close];
                match data.lookup(key) {
                    Some(value) => output.push_str(&value),
                    None if options.ignore_missing => {
                        output.push('{');
                        output.push_str(key);
                        output.push('}');
                    }
                    None => return Err(RentalError::MissingTemplateKey(key.to_string())),
                }
                rest = &after[close + 1..];
            }
            _ => {
                output.push('{');
                rest = after;
            }
        }
    }

    output.push_str(rest);
    Ok(output)
}

fn is_placeholder_key(key: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    if key.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }

    let starts_ok = key
        .bytes()
        .next()
        .is_some_and(|b| b.is_ascii_alphabetic() || b == b'_' || b == b'$');

    starts_ok
        && key.split('.').all(|segment| {
            segment
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'$'))
        })
}
