//! Text-to-value coercion table.
//!
//! The single place that knows how a [`Node`] becomes a [`CoercedValue`] of a given
//! [`ParamKind`]. Both constructor selection and node-driven method invocation go
//! through [`coerce_node`].
//!
//! | Kind | Conversion | Failure |
//! |------|------------|---------|
//! | node | the node itself | never |
//! | text | flattened text content | never |
//! | char | first character | empty text |
//! | bool | `"true"` (ASCII case-insensitive) is true, anything else false | never |
//! | i8..i64 | decimal literal, optional sign | malformed or out of range |
//! | f32, f64 | decimal/exponent literal, `NaN`, `Infinity` | malformed |
//! | other | none | candidate is rejected |

use anyhow::Result;
use std::str::FromStr;
use te_invoke_types::{CoercedValue, Node, ParamKind};
use tracing::trace;

use crate::errors::{CoercionFailure, InvokeError};

/// Convert one node to `kind`.
///
/// Returns `Ok(None)` when `kind` is not coercible at all, which callers treat as
/// "this overload does not apply". A supported kind with malformed text is an error.
pub fn coerce_node(
    kind: &ParamKind,
    node: &Node,
) -> std::result::Result<Option<CoercedValue>, CoercionFailure> {
    let value = match kind {
        ParamKind::Node => CoercedValue::Node(node.clone()),
        ParamKind::Text => CoercedValue::Text(node.text_content()),
        ParamKind::Char => {
            let text = node.text_content();
            let first = text.chars().next().ok_or(CoercionFailure::EmptyText)?;
            CoercedValue::Char(first)
        }
        ParamKind::Bool => CoercedValue::Bool(parse_bool(&node.text_content())),
        ParamKind::I8 => CoercedValue::I8(parse_integer(&node.text_content())?),
        ParamKind::I16 => CoercedValue::I16(parse_integer(&node.text_content())?),
        ParamKind::I32 => CoercedValue::I32(parse_integer(&node.text_content())?),
        ParamKind::I64 => CoercedValue::I64(parse_integer(&node.text_content())?),
        ParamKind::F32 => CoercedValue::F32(parse_float(&node.text_content())?),
        ParamKind::F64 => CoercedValue::F64(parse_float(&node.text_content())?),
        ParamKind::Other(_) => return Ok(None),
    };
    Ok(Some(value))
}

/// Coerce `nodes` against the parameter list of one overload candidate.
///
/// Parameters are walked in order. The first unsupported kind rejects the candidate
/// (`Ok(None)`); a malformed value reached before that point is a hard error.
/// `params` and `nodes` must have the same length ([`InvokeError::ArityMismatch`]).
pub fn coerce_candidate(
    type_name: &str,
    params: &[ParamKind],
    nodes: &[Node],
) -> Result<Option<Vec<CoercedValue>>> {
    check_lengths(type_name, params, nodes)?;
    let mut values = Vec::with_capacity(params.len());
    for (index, (kind, node)) in params.iter().zip(nodes).enumerate() {
        match coerce_node(kind, node) {
            Ok(Some(value)) => values.push(value),
            Ok(None) => {
                trace!(
                    type_name,
                    index,
                    %kind,
                    "parameter kind not coercible, rejecting candidate"
                );
                return Ok(None);
            }
            Err(failure) => {
                return Err(InvokeError::Coercion {
                    type_name: type_name.to_string(),
                    index,
                    kind: kind.clone(),
                    failure,
                }
                .into())
            }
        }
    }
    Ok(Some(values))
}

/// Coerce `nodes` for a callable that has already been selected.
///
/// With no alternative overload left, an unsupported kind is reported as
/// [`CoercionFailure::Unsupported`].
pub fn coerce_nodes(
    type_name: &str,
    params: &[ParamKind],
    nodes: &[Node],
) -> Result<Vec<CoercedValue>> {
    check_lengths(type_name, params, nodes)?;
    params
        .iter()
        .zip(nodes)
        .enumerate()
        .map(|(index, (kind, node))| {
            let failure = match coerce_node(kind, node) {
                Ok(Some(value)) => return Ok(value),
                Ok(None) => CoercionFailure::Unsupported,
                Err(failure) => failure,
            };
            Err(InvokeError::Coercion {
                type_name: type_name.to_string(),
                index,
                kind: kind.clone(),
                failure,
            }
            .into())
        })
        .collect()
}

fn check_lengths(type_name: &str, params: &[ParamKind], nodes: &[Node]) -> Result<()> {
    if params.len() == nodes.len() {
        return Ok(());
    }
    let params: Vec<String> = params.iter().map(ToString::to_string).collect();
    Err(InvokeError::ArityMismatch {
        operation: format!("{}({})", type_name, params.join(", ")),
        expected: params.len(),
        actual: nodes.len(),
    }
    .into())
}

fn parse_bool(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}

fn parse_integer<T>(text: &str) -> std::result::Result<T, CoercionFailure>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    text.parse::<T>()
        .map_err(|e| CoercionFailure::InvalidInteger {
            text: text.to_string(),
            reason: e.to_string(),
        })
}

fn parse_float<T>(text: &str) -> std::result::Result<T, CoercionFailure>
where
    T: FromStr<Err = std::num::ParseFloatError>,
{
    let invalid = |reason: String| CoercionFailure::InvalidFloat {
        text: text.to_string(),
        reason,
    };

    let trimmed = text.trim_matches(|c: char| c <= ' ');
    let literal = trimmed
        .strip_suffix(['f', 'F', 'd', 'D'])
        .filter(|rest| rest.ends_with(|c: char| c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed);

    // Named values are case-sensitive: `NaN` and `Infinity` only.
    let unsigned = literal.strip_prefix(['+', '-']).unwrap_or(literal);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic())
        && unsigned != "NaN"
        && unsigned != "Infinity"
    {
        return Err(invalid("named values must be `NaN` or `Infinity`".to_string()));
    }

    literal.parse::<T>().map_err(|e| invalid(e.to_string()))
}
