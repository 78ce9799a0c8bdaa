//! Recursive-descent parser from Mapnik filter expressions to neutral filters.
//!
//! Precedence, tightest first: parenthesised group, negation, comparison,
//! `&&`, `||`. A chain of the same combinator at one nesting level becomes a
//! single n-ary combination, so `(a) && (b) && (c)` reads back as one `And`
//! with three operands.
use crate::error::FilterError;
use crate::lexer::{Spanned, Token, tokenize};
use crate::operators::{Reverse, comparison_token};
use mapstyle_types::{CombinationOperator, Filter, FilterValue};

/// Deepest run of nested groups and negations accepted before parsing stops.
pub const MAX_DEPTH: usize = 256;

pub fn parse_filter(source: &str) -> Result<Filter, FilterError> {
    let tokens = tokenize(source)?;
    let mut parser = FilterParser {
        tokens,
        cursor: 0,
        end: source.len(),
        depth: 0,
    };

    let filter = parser.or_expr()?;
    if let Some(extra) = parser.peek() {
        return Err(FilterError::malformed(
            extra.position,
            format!("unexpected {} after a complete expression", extra.token),
        ));
    }
    Ok(filter)
}

struct FilterParser {
    tokens: Vec<Spanned>,
    cursor: usize,
    end: usize,
    depth: usize,
}

impl FilterParser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Option<Spanned> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Consumes the next token if it is `expected`, returning its position.
    fn eat(&mut self, expected: &Token) -> Option<usize> {
        let position = self
            .peek()
            .filter(|t| &t.token == expected)
            .map(|t| t.position)?;
        self.cursor += 1;
        Some(position)
    }

    fn nested(
        &mut self,
        position: usize,
        parse: fn(&mut Self) -> Result<Filter, FilterError>,
    ) -> Result<Filter, FilterError> {
        if self.depth >= MAX_DEPTH {
            return Err(FilterError::malformed(
                position,
                format!("expression nests deeper than {MAX_DEPTH} levels"),
            ));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn unexpected(&self, spanned: Option<Spanned>, wanted: &str) -> FilterError {
        match spanned {
            Some(Spanned { token, position }) => {
                FilterError::malformed(position, format!("expected {wanted}, found {token}"))
            }
            None => FilterError::malformed(
                self.end,
                format!("expected {wanted}, found end of expression"),
            ),
        }
    }

    fn or_expr(&mut self) -> Result<Filter, FilterError> {
        self.chain(CombinationOperator::Or, Self::and_expr)
    }

    fn and_expr(&mut self) -> Result<Filter, FilterError> {
        self.chain(CombinationOperator::And, Self::unary)
    }

    fn chain(
        &mut self,
        operator: CombinationOperator,
        operand: fn(&mut Self) -> Result<Filter, FilterError>,
    ) -> Result<Filter, FilterError> {
        let separator = Token::Combination(operator);
        let first = operand(self)?;
        if self.eat(&separator).is_none() {
            return Ok(first);
        }

        let mut filters = vec![first, operand(self)?];
        while self.eat(&separator).is_some() {
            filters.push(operand(self)?);
        }
        Ok(Filter::Combination { operator, filters })
    }

    fn unary(&mut self) -> Result<Filter, FilterError> {
        if let Some(position) = self.eat(&Token::Not) {
            return Ok(Filter::negate(self.nested(position, Self::unary)?));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Filter, FilterError> {
        if let Some(position) = self.eat(&Token::LParen) {
            let inner = self.nested(position, Self::or_expr)?;
            let close = self.next();
            return match close {
                Some(Spanned {
                    token: Token::RParen,
                    ..
                }) => Ok(inner),
                other => Err(self.unexpected(other, "')'")),
            };
        }
        self.comparison()
    }

    fn comparison(&mut self) -> Result<Filter, FilterError> {
        let property = match self.next() {
            Some(Spanned {
                token: Token::Property(name),
                ..
            }) => name,
            other => return Err(self.unexpected(other, "a property such as [name]")),
        };

        let operator = match self.next() {
            Some(Spanned {
                token: Token::Comparison(Reverse::Mapped(operator)),
                ..
            }) => operator,
            Some(Spanned {
                token: Token::Comparison(Reverse::Unsupported(operator)),
                position,
            }) => {
                return Err(FilterError::UnsupportedOperator {
                    operator: comparison_token(operator).to_string(),
                    position,
                });
            }
            other => return Err(self.unexpected(other, "a comparison operator")),
        };

        let value = match self.next() {
            Some(Spanned {
                token: Token::Text(text),
                ..
            }) => FilterValue::String(text),
            Some(Spanned {
                token: Token::Number(n),
                ..
            }) => FilterValue::Number(n),
            Some(Spanned {
                token: Token::Word(word),
                ..
            }) if word == "null" => FilterValue::Null,
            Some(Spanned {
                token: Token::Word(word),
                ..
            }) => FilterValue::String(word),
            other => return Err(self.unexpected(other, "a value")),
        };

        Ok(Filter::Comparison {
            operator,
            property,
            value,
        })
    }
}
