//! A `nom`-based tokenizer for Mapnik filter expressions.
use crate::error::FilterError;
use crate::operators::{
    NEGATION_TOKEN, Reverse, canonical_spelling, combination_from_token, combination_token,
    comparison_from_token, comparison_token,
};
use mapstyle_types::{CombinationOperator, ComparisonOperator};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, take_while1},
    character::complete::{anychar, char, multispace0, satisfy},
    combinator::{map, map_opt, not, opt, peek},
    multi::many0,
    number::complete::{double, recognize_float},
    sequence::{delimited, preceded, terminated},
};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A bracketed feature property, `[name]`.
    Property(String),
    /// A quoted literal with escapes resolved.
    Text(String),
    Number(f64),
    /// A bare word that is neither a keyword nor a number, including `null`.
    Word(String),
    Comparison(Reverse<ComparisonOperator>),
    Combination(CombinationOperator),
    Not,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Property(name) => write!(f, "'[{name}]'"),
            Token::Text(text) => write!(f, "literal '{text}'"),
            Token::Number(n) => write!(f, "number {n}"),
            Token::Word(word) => write!(f, "'{word}'"),
            Token::Comparison(Reverse::Mapped(op) | Reverse::Unsupported(op)) => {
                write!(f, "'{}'", comparison_token(*op))
            }
            Token::Combination(op) => write!(f, "'{}'", combination_token(*op)),
            Token::Not => f.write_str("'not'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
        }
    }
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

pub fn tokenize(source: &str) -> Result<Vec<Spanned>, FilterError> {
    let (rest, tokens) = terminated(many0(preceded(multispace0, spanned(source))), multispace0)
        .parse(source)
        .map_err(|_| FilterError::malformed(0, "unreadable expression"))?;

    if rest.is_empty() {
        return Ok(tokens);
    }
    let position = source.len() - rest.len();
    if rest.starts_with(['\'', '"']) {
        return Err(FilterError::malformed(position, "unterminated string literal"));
    }
    let found = rest.chars().next().unwrap_or_default();
    Err(FilterError::malformed(
        position,
        format!("unexpected character '{found}'"),
    ))
}

fn spanned<'a>(source: &'a str) -> impl FnMut(&'a str) -> IResult<&'a str, Spanned> {
    move |input: &'a str| {
        let position = source.len() - input.len();
        map(token, |token| Spanned { token, position }).parse(input)
    }
}

fn token(input: &str) -> IResult<&str, Token> {
    alt((
        property,
        map(quoted, Token::Text),
        operator,
        map(number, Token::Number),
        word,
    ))
    .parse(input)
}

fn property(input: &str) -> IResult<&str, Token> {
    map(
        delimited(char('['), take_while1(|c: char| c != ']'), char(']')),
        |name: &str| Token::Property(name.to_string()),
    )
    .parse(input)
}

/// A single- or double-quoted literal; a backslash escapes the next character.
fn quoted(input: &str) -> IResult<&str, String> {
    alt((
        delimited(char('\''), literal_body("\\'"), char('\'')),
        delimited(char('"'), literal_body("\\\""), char('"')),
    ))
    .parse(input)
}

fn literal_body<'a>(
    stop: &'static str,
) -> impl Parser<&'a str, Output = String, Error = nom::error::Error<&'a str>> {
    map(
        opt(escaped_transform(is_not(stop), '\\', anychar)),
        Option::unwrap_or_default,
    )
}

fn operator(input: &str) -> IResult<&str, Token> {
    map_opt(
        alt((
            tag("=="),
            tag("!="),
            tag("*="),
            tag("<="),
            tag(">="),
            tag("<>"),
            tag("&&"),
            tag("||"),
            tag("<"),
            tag(">"),
            tag("="),
            tag("%"),
            tag("!"),
            tag("("),
            tag(")"),
        )),
        classify_operator,
    )
    .parse(input)
}

/// Resolves an operator spelling through the operator tables.
fn classify_operator(spelling: &str) -> Option<Token> {
    match spelling {
        "(" => return Some(Token::LParen),
        ")" => return Some(Token::RParen),
        _ => {}
    }
    let token = canonical_spelling(spelling);
    if token == NEGATION_TOKEN {
        return Some(Token::Not);
    }
    if let Some(Reverse::Mapped(operator)) = combination_from_token(token) {
        return Some(Token::Combination(operator));
    }
    comparison_from_token(token).map(Token::Comparison)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | ':')
}

/// A float that is not the prefix of a longer word, so `1st` stays a word.
fn number(input: &str) -> IResult<&str, f64> {
    terminated(
        preceded(peek(recognize_float), double),
        not(satisfy(is_word_char)),
    )
    .parse(input)
}

fn word(input: &str) -> IResult<&str, Token> {
    map(take_while1(is_word_char), |word: &str| {
        classify_operator(word).unwrap_or_else(|| Token::Word(word.to_string()))
    })
    .parse(input)
}
