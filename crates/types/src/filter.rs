//! Boolean filter predicates over feature properties.
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The neutral keyword that leads a negation filter.
pub const NEGATION_KEYWORD: &str = "!";

keyword_enum! {
    /// Operators of a comparison filter, keyed by their neutral keyword.
    ComparisonOperator {
        Equal => "==",
        NotEqual => "!=",
        Match => "*=",
        LessThan => "<",
        LessThanOrEqual => "<=",
        GreaterThan => ">",
        GreaterThanOrEqual => ">=",
        Modulo => "%",
    }
}

keyword_enum! {
    /// Operators joining two or more sub-filters.
    CombinationOperator {
        And => "&&",
        Or => "||",
    }
}

/// The right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Null,
    Number(f64),
    String(String),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FilterValue::Null, Into::into)
    }
}

/// A recursive filter tree. The set of variants is closed: anything that does
/// not lead with a known operator is rejected during deserialization.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Comparison {
        operator: ComparisonOperator,
        property: String,
        value: FilterValue,
    },
    Combination {
        operator: CombinationOperator,
        filters: Vec<Filter>,
    },
    Negation(Box<Filter>),
}

impl Filter {
    pub fn comparison(
        operator: ComparisonOperator,
        property: impl Into<String>,
        value: impl Into<FilterValue>,
    ) -> Self {
        Filter::Comparison {
            operator,
            property: property.into(),
            value: value.into(),
        }
    }

    pub fn equal(property: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::comparison(ComparisonOperator::Equal, property, value)
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Filter::Combination {
            operator: CombinationOperator::And,
            filters,
        }
    }

    pub fn or(filters: Vec<Filter>) -> Self {
        Filter::Combination {
            operator: CombinationOperator::Or,
            filters,
        }
    }

    pub fn negate(filter: Filter) -> Self {
        Filter::Negation(Box::new(filter))
    }
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Filter::Comparison {
                operator,
                property,
                value,
            } => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element(operator.keyword())?;
                seq.serialize_element(property)?;
                seq.serialize_element(value)?;
                seq.end()
            }
            Filter::Combination { operator, filters } => {
                let mut seq = serializer.serialize_seq(Some(filters.len() + 1))?;
                seq.serialize_element(operator.keyword())?;
                for filter in filters {
                    seq.serialize_element(filter)?;
                }
                seq.end()
            }
            Filter::Negation(inner) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(NEGATION_KEYWORD)?;
                seq.serialize_element(inner)?;
                seq.end()
            }
        }
    }
}

struct FilterVisitor;

impl<'de> Visitor<'de> for FilterVisitor {
    type Value = Filter;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an operator-first filter array such as [\"==\", \"name\", \"value\"]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Filter, A::Error> {
        let keyword: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;

        if let Some(operator) = ComparisonOperator::from_keyword(&keyword) {
            let property: String = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(1, &self))?;
            let value: FilterValue = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(2, &self))?;
            if seq.next_element::<IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(4, &"a comparison of exactly three elements"));
            }
            return Ok(Filter::Comparison {
                operator,
                property,
                value,
            });
        }

        if let Some(operator) = CombinationOperator::from_keyword(&keyword) {
            let mut filters = Vec::new();
            while let Some(filter) = seq.next_element::<Filter>()? {
                filters.push(filter);
            }
            if filters.len() < 2 {
                return Err(de::Error::invalid_length(
                    filters.len() + 1,
                    &"a combination of at least two filters",
                ));
            }
            return Ok(Filter::Combination { operator, filters });
        }

        if keyword == NEGATION_KEYWORD {
            let inner: Filter = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(1, &self))?;
            if seq.next_element::<IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(3, &"a negation of exactly one filter"));
            }
            return Ok(Filter::Negation(Box::new(inner)));
        }

        Err(de::Error::custom(format_args!(
            "unrecognized filter operator '{keyword}'"
        )))
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(FilterVisitor)
    }
}
