//! Renders neutral filters as Mapnik boolean expressions.
use crate::error::FilterError;
use crate::operators::{combination_token, comparison_token};
use mapstyle_types::{ComparisonOperator, Filter, FilterValue};
use std::fmt::Write;

pub fn render_filter(filter: &Filter) -> Result<String, FilterError> {
    let mut out = String::new();
    render_into(filter, &mut out)?;
    Ok(out)
}

fn render_into(filter: &Filter, out: &mut String) -> Result<(), FilterError> {
    match filter {
        // Mapnik has no reliable `!=` for null-able fields, so inequality is
        // spelled as a negated equality.
        Filter::Comparison {
            operator: ComparisonOperator::NotEqual,
            property,
            value,
        } => {
            out.push_str("not (");
            render_comparison(ComparisonOperator::Equal, property, value, out);
            out.push(')');
        }
        Filter::Comparison {
            operator,
            property,
            value,
        } => render_comparison(*operator, property, value, out),
        Filter::Combination { operator, filters } => {
            if filters.len() < 2 {
                return Err(FilterError::InvalidArity {
                    operator: *operator,
                    arity: filters.len(),
                });
            }
            let token = combination_token(*operator);
            for (index, sub) in filters.iter().enumerate() {
                if index > 0 {
                    let _ = write!(out, " {token} ");
                }
                out.push('(');
                render_into(sub, out)?;
                out.push(')');
            }
        }
        Filter::Negation(inner) => {
            out.push_str("not (");
            render_into(inner, out)?;
            out.push(')');
        }
    }
    Ok(())
}

fn render_comparison(
    operator: ComparisonOperator,
    property: &str,
    value: &FilterValue,
    out: &mut String,
) {
    let _ = write!(out, "[{property}] {} ", comparison_token(operator));
    render_value(value, out);
}

fn render_value(value: &FilterValue, out: &mut String) {
    match value {
        FilterValue::Null => out.push_str("null"),
        FilterValue::Number(n) => {
            let _ = write!(out, "{n}");
        }
        FilterValue::String(text) => {
            out.push('\'');
            for c in text.chars() {
                if matches!(c, '\'' | '\\') {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push('\'');
        }
    }
}
