//! Exact and close matching over a collection's items.
//!
//! Filters arrive as flat `field value` token pairs from the shell. Bad
//! pairs are dropped, not fatal: parsing always produces a usable filter
//! set plus diagnostics describing what fell out.

use std::collections::HashSet;
use std::fmt;

use crate::collection::CollectionItem;
use crate::field::{ItemField, Margin};

/// One `(field, value)` constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter<F> {
    pub field: F,
    pub value: String,
}

/// A non-fatal problem found while parsing filter tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterIssue {
    /// The named field is not part of the schema
    UnknownField { field: String },
    /// The field already has a constraint; later pairs lose
    DuplicateField { field: String, value: String },
    /// Odd token count: the trailing token pairs with nothing
    TrailingToken { token: String },
}

impl fmt::Display for FilterIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterIssue::UnknownField { field } => {
                write!(f, "no field named '{field}'; filter dropped")
            }
            FilterIssue::DuplicateField { field, value } => {
                write!(f, "only one filter per field; dropped ({field}, {value})")
            }
            FilterIssue::TrailingToken { token } => {
                write!(f, "trailing token '{token}' pairs with nothing; dropped")
            }
        }
    }
}

/// What [`parse_filters`] accepted and what it dropped.
#[derive(Debug)]
pub struct ParsedFilters<F> {
    pub filters: Vec<Filter<F>>,
    pub issues: Vec<FilterIssue>,
}

/// Result of applying filters: exact matches in collection order, close
/// matches ordered by how many constraints they satisfy, fewest first.
#[derive(Debug)]
pub struct FilterOutcome<'a, T> {
    pub exact: Vec<&'a T>,
    pub close: Vec<&'a T>,
}

/// Consume `tokens` pairwise as `(field, value)` constraints.
///
/// At most one constraint per field survives; unknown fields and the
/// odd trailing token are dropped and reported.
pub fn parse_filters<F: ItemField>(tokens: &[String]) -> ParsedFilters<F> {
    let mut filters: Vec<Filter<F>> = Vec::new();
    let mut issues = Vec::new();

    let mut pairs = tokens.chunks_exact(2);
    for pair in &mut pairs {
        let (name, value) = (&pair[0], &pair[1]);
        let field = match name.parse::<F>() {
            Ok(field) => field,
            Err(_) => {
                log::debug!("dropping filter pair ({name}, {value}): unknown field");
                issues.push(FilterIssue::UnknownField {
                    field: name.clone(),
                });
                continue;
            }
        };
        if filters.iter().any(|filter| filter.field == field) {
            log::debug!("dropping filter pair ({name}, {value}): duplicate field");
            issues.push(FilterIssue::DuplicateField {
                field: name.clone(),
                value: value.clone(),
            });
            continue;
        }
        filters.push(Filter {
            field,
            value: value.clone(),
        });
    }
    if let [token] = pairs.remainder() {
        log::debug!("dropping trailing filter token '{token}'");
        issues.push(FilterIssue::TrailingToken {
            token: token.clone(),
        });
    }

    ParsedFilters { filters, issues }
}

/// Split `items` into exact and close matches.
///
/// An item is exact when every constraint holds by string equality; with
/// no constraints at all, everything is exact. Close matches are the
/// remaining items that land inside at least one constraint's margin,
/// sorted by ascending hit count so the best candidates sit nearest the
/// exact section. Ties keep collection order.
pub fn apply<'a, T: CollectionItem>(
    items: &'a [T],
    filters: &[Filter<T::Field>],
) -> FilterOutcome<'a, T> {
    let exact: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            filters
                .iter()
                .all(|filter| item.field(filter.field) == filter.value)
        })
        .map(|(index, _)| index)
        .collect();
    let exact_set: HashSet<usize> = exact.iter().copied().collect();

    let mut hit_counts = vec![0usize; items.len()];
    for filter in filters {
        let margin = filter.field.margin();
        for (index, item) in items.iter().enumerate() {
            if exact_set.contains(&index) {
                continue;
            }
            if within_margin(item.field(filter.field), &filter.value, margin) {
                hit_counts[index] += 1;
            }
        }
    }

    let mut close: Vec<(usize, usize)> = hit_counts
        .into_iter()
        .enumerate()
        .filter(|&(_, hits)| hits > 0)
        .collect();
    close.sort_by_key(|&(_, hits)| hits);

    FilterOutcome {
        exact: exact.into_iter().map(|index| &items[index]).collect(),
        close: close.into_iter().map(|(index, _)| &items[index]).collect(),
    }
}

/// Margin test for one stored value against one filter value.
///
/// Numeric margins require both sides to parse as integers; a side that
/// is not a number can never be near anything.
fn within_margin(value: &str, wanted: &str, margin: Margin) -> bool {
    match margin {
        Margin::Exact => value == wanted,
        Margin::Within(distance) => match (value.parse::<i64>(), wanted.parse::<i64>()) {
            (Ok(have), Ok(want)) => (have - want).abs() <= distance,
            _ => false,
        },
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
