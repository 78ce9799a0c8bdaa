use mapstyle_types::CombinationOperator;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("operator '{operator}' at position {position} has no filter equivalent")]
    UnsupportedOperator { operator: String, position: usize },

    #[error("malformed filter expression at position {position}: {message}")]
    MalformedExpression { position: usize, message: String },

    #[error("'{operator}' combines at least two filters, got {arity}")]
    InvalidArity {
        operator: CombinationOperator,
        arity: usize,
    },
}

impl FilterError {
    pub(crate) fn malformed(position: usize, message: impl Into<String>) -> Self {
        FilterError::MalformedExpression {
            position,
            message: message.into(),
        }
    }
}
