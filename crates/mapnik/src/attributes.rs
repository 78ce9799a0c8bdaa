//! Field-to-attribute mapping tables.
//!
//! Each symbolizer module declares an ordered table of [`AttributeMapping`]s.
//! One entry carries both directions for one Mapnik attribute, so writing and
//! reading walk the same table and cannot disagree about names.
use crate::error::MapnikError;
use mapstyle_markup::{AttrValue, Node};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, opt, value},
    multi::separated_list1,
    number::complete::double,
    sequence::delimited,
};

pub(crate) struct AttributeMapping<T> {
    pub attribute: &'static str,
    pub write: fn(&T) -> Option<AttrValue>,
    /// Returns `None` when the attribute value cannot be interpreted.
    pub read: fn(&mut T, &AttrValue) -> Option<()>,
}

pub(crate) fn write_attributes<T>(table: &[AttributeMapping<T>], source: &T, node: &mut Node) {
    for mapping in table {
        if let Some(value) = (mapping.write)(source) {
            node.attributes.insert(mapping.attribute.to_string(), value);
        }
    }
}

pub(crate) fn read_attributes<T>(
    table: &[AttributeMapping<T>],
    node: &Node,
    target: &mut T,
) -> Result<(), MapnikError> {
    for mapping in table {
        if let Some(value) = node.attribute(mapping.attribute) {
            (mapping.read)(target, value)
                .ok_or_else(|| invalid_attribute(node, mapping.attribute, value))?;
        }
    }
    Ok(())
}

/// Logs attributes that no table (and none of `extra`) accounts for.
pub(crate) fn trace_unmapped<T>(node: &Node, tables: &[&[AttributeMapping<T>]], extra: &[&str]) {
    for name in node.attributes.keys() {
        let known = extra.contains(&name.as_str())
            || tables
                .iter()
                .any(|table| table.iter().any(|mapping| mapping.attribute == name));
        if !known {
            log::trace!("ignoring attribute '{}' on <{}>", name, node.name);
        }
    }
}

pub(crate) fn invalid_attribute(node: &Node, attribute: &str, value: &AttrValue) -> MapnikError {
    MapnikError::InvalidAttribute {
        element: node.name.clone(),
        attribute: attribute.to_string(),
        value: value.to_string(),
    }
}

pub(crate) fn join_numbers(values: &[f64]) -> AttrValue {
    let joined: Vec<String> = values.iter().map(f64::to_string).collect();
    AttrValue::Text(joined.join(","))
}

/// Reads a comma- or space-separated list such as `5, 2.5 1`.
pub(crate) fn split_numbers(value: &AttrValue) -> Option<Vec<f64>> {
    let text = value.to_string();
    all_consuming(delimited(
        multispace0,
        separated_list1(list_separator, double),
        multispace0,
    ))
    .parse(text.as_str())
    .ok()
    .map(|(_, numbers)| numbers)
}

fn list_separator(input: &str) -> IResult<&str, ()> {
    alt((
        value((), (multispace0, char(','), multispace0)),
        value((), multispace1),
    ))
    .parse(input)
}

pub(crate) fn rotation(degrees: f64) -> AttrValue {
    AttrValue::Text(format!("rotate({degrees}deg)"))
}

/// Parses `rotate(<n>deg)` or `rotate(<n>)`.
pub(crate) fn parse_rotation(value: &AttrValue) -> Option<f64> {
    let text = value.to_string();
    all_consuming(rotate)
        .parse(text.as_str())
        .ok()
        .map(|(_, degrees)| degrees)
}

fn rotate(input: &str) -> IResult<&str, f64> {
    delimited(
        (multispace0, tag("rotate("), multispace0),
        double,
        (multispace0, opt(tag("deg")), multispace0, char(')'), multispace0),
    )
    .parse(input)
}

macro_rules! text_field {
    ($attribute:literal, $field:ident) => {
        $crate::attributes::AttributeMapping {
            attribute: $attribute,
            write: |s| s.$field.clone().map(::mapstyle_markup::AttrValue::from),
            read: |s, v| {
                s.$field = Some(v.to_string());
                Some(())
            },
        }
    };
}

macro_rules! number_field {
    ($attribute:literal, $field:ident) => {
        $crate::attributes::AttributeMapping {
            attribute: $attribute,
            write: |s| s.$field.map(::mapstyle_markup::AttrValue::from),
            read: |s, v| {
                s.$field = Some(v.as_f64()?);
                Some(())
            },
        }
    };
}

macro_rules! flag_field {
    ($attribute:literal, $field:ident) => {
        $crate::attributes::AttributeMapping {
            attribute: $attribute,
            write: |s| s.$field.map(::mapstyle_markup::AttrValue::from),
            read: |s, v| {
                s.$field = Some(v.as_bool()?);
                Some(())
            },
        }
    };
}

macro_rules! keyword_field {
    ($attribute:literal, $field:ident, $keyword:ty) => {
        $crate::attributes::AttributeMapping {
            attribute: $attribute,
            write: |s| {
                s.$field
                    .map(|k| ::mapstyle_markup::AttrValue::from(k.keyword()))
            },
            read: |s, v| {
                s.$field = Some(<$keyword>::from_keyword(v.to_string().trim())?);
                Some(())
            },
        }
    };
}

macro_rules! dasharray_field {
    ($attribute:literal, $field:ident) => {
        $crate::attributes::AttributeMapping {
            attribute: $attribute,
            write: |s| s.$field.as_deref().map($crate::attributes::join_numbers),
            read: |s, v| {
                s.$field = Some($crate::attributes::split_numbers(v)?);
                Some(())
            },
        }
    };
}

macro_rules! rotation_field {
    ($attribute:literal, $field:ident) => {
        $crate::attributes::AttributeMapping {
            attribute: $attribute,
            write: |s| s.$field.map($crate::attributes::rotation),
            read: |s, v| {
                s.$field = Some($crate::attributes::parse_rotation(v)?);
                Some(())
            },
        }
    };
}
