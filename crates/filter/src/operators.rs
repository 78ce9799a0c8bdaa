//! Static correspondence between neutral filter operators and Mapnik
//! expression tokens.
//!
//! The write direction is a total `match`; the read direction is a hash map
//! built once from the write direction, so both lookups are constant time and
//! the two can never drift apart. Building the inverse asserts that no two
//! operators share a token.
use mapstyle_types::{CombinationOperator, ComparisonOperator};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Token used for negation in the table. The writer spells it `not`.
pub const NEGATION_TOKEN: &str = "!";

/// Spellings Mapnik accepts on read, paired with their canonical token.
const ALIASES: &[(&str, &str)] = &[
    ("=", "=="),
    ("<>", "!="),
    ("and", "&&"),
    ("or", "||"),
    ("not", NEGATION_TOKEN),
];

/// Result of mapping a Mapnik token back to a neutral operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reverse<T> {
    Mapped(T),
    /// The operator can be written but not read back.
    Unsupported(T),
}

pub fn comparison_token(operator: ComparisonOperator) -> &'static str {
    match operator {
        ComparisonOperator::Equal => "==",
        ComparisonOperator::NotEqual => "!=",
        ComparisonOperator::Match => "*=",
        ComparisonOperator::LessThan => "<",
        ComparisonOperator::LessThanOrEqual => "<=",
        ComparisonOperator::GreaterThan => ">",
        ComparisonOperator::GreaterThanOrEqual => ">=",
        ComparisonOperator::Modulo => "%",
    }
}

pub fn combination_token(operator: CombinationOperator) -> &'static str {
    match operator {
        CombinationOperator::And => "&&",
        CombinationOperator::Or => "||",
    }
}

fn readable_comparison(operator: ComparisonOperator) -> bool {
    operator != ComparisonOperator::Match
}

static COMPARISONS: Lazy<HashMap<&'static str, Reverse<ComparisonOperator>>> =
    Lazy::new(|| invert(ComparisonOperator::ALL, comparison_token, readable_comparison));

static COMBINATIONS: Lazy<HashMap<&'static str, Reverse<CombinationOperator>>> =
    Lazy::new(|| invert(CombinationOperator::ALL, combination_token, |_| true));

fn invert<T>(
    operators: &[T],
    token: fn(T) -> &'static str,
    readable: fn(T) -> bool,
) -> HashMap<&'static str, Reverse<T>>
where
    T: Copy + Eq + Hash + Debug,
{
    let mut table = HashMap::with_capacity(operators.len());
    for &operator in operators {
        let reverse = if readable(operator) {
            Reverse::Mapped(operator)
        } else {
            Reverse::Unsupported(operator)
        };
        let previous = table.insert(token(operator), reverse);
        assert!(
            previous.is_none(),
            "operator {operator:?} shares the token '{}' with another operator",
            token(operator)
        );
    }
    table
}

/// Maps an alternative spelling such as `<>` or `AND` to its canonical token.
/// Anything else is returned unchanged.
pub fn canonical_spelling(spelling: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(spelling))
        .map_or(spelling, |&(_, canonical)| canonical)
}

pub fn comparison_from_token(token: &str) -> Option<Reverse<ComparisonOperator>> {
    COMPARISONS.get(token).copied()
}

pub fn combination_from_token(token: &str) -> Option<Reverse<CombinationOperator>> {
    COMBINATIONS.get(token).copied()
}
