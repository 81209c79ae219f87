//! Coerced argument values.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::kind::ParamKind;
use crate::node::Node;

/// A value produced from a node's text for one supported [`ParamKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CoercedValue {
    Node(Node),
    Text(String),
    Char(char),
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

macro_rules! accessor {
    ($fn_name:ident, $variant:ident, $ty:ty) => {
        #[doc = concat!("Extract a `", stringify!($ty), "`, failing on any other kind.")]
        pub fn $fn_name(&self) -> Result<$ty> {
            match self {
                CoercedValue::$variant(v) => Ok(*v),
                other => Err(anyhow!(
                    "expected {} value, found {}",
                    ParamKind::$variant,
                    other.kind()
                )),
            }
        }
    };
}

impl CoercedValue {
    /// The kind this value satisfies.
    pub fn kind(&self) -> ParamKind {
        match self {
            CoercedValue::Node(_) => ParamKind::Node,
            CoercedValue::Text(_) => ParamKind::Text,
            CoercedValue::Char(_) => ParamKind::Char,
            CoercedValue::Bool(_) => ParamKind::Bool,
            CoercedValue::I8(_) => ParamKind::I8,
            CoercedValue::I16(_) => ParamKind::I16,
            CoercedValue::I32(_) => ParamKind::I32,
            CoercedValue::I64(_) => ParamKind::I64,
            CoercedValue::F32(_) => ParamKind::F32,
            CoercedValue::F64(_) => ParamKind::F64,
        }
    }

    accessor!(as_char, Char, char);
    accessor!(as_bool, Bool, bool);
    accessor!(as_i8, I8, i8);
    accessor!(as_i16, I16, i16);
    accessor!(as_i32, I32, i32);
    accessor!(as_i64, I64, i64);
    accessor!(as_f32, F32, f32);
    accessor!(as_f64, F64, f64);

    pub fn as_text(&self) -> Result<&str> {
        match self {
            CoercedValue::Text(s) => Ok(s),
            other => Err(anyhow!("expected text value, found {}", other.kind())),
        }
    }

    pub fn as_node(&self) -> Result<&Node> {
        match self {
            CoercedValue::Node(n) => Ok(n),
            other => Err(anyhow!("expected node value, found {}", other.kind())),
        }
    }
}

impl fmt::Display for CoercedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercedValue::Node(n) => write!(f, "{}", n),
            CoercedValue::Text(s) => write!(f, "{:?}", s),
            CoercedValue::Char(c) => write!(f, "{:?}", c),
            CoercedValue::Bool(b) => write!(f, "{}", b),
            CoercedValue::I8(v) => write!(f, "{}i8", v),
            CoercedValue::I16(v) => write!(f, "{}i16", v),
            CoercedValue::I32(v) => write!(f, "{}i32", v),
            CoercedValue::I64(v) => write!(f, "{}i64", v),
            CoercedValue::F32(v) => write!(f, "{}f32", v),
            CoercedValue::F64(v) => write!(f, "{}f64", v),
        }
    }
}

impl From<String> for CoercedValue {
    fn from(value: String) -> Self {
        CoercedValue::Text(value)
    }
}

impl From<&str> for CoercedValue {
    fn from(value: &str) -> Self {
        CoercedValue::Text(value.to_string())
    }
}

impl From<bool> for CoercedValue {
    fn from(value: bool) -> Self {
        CoercedValue::Bool(value)
    }
}

impl From<i64> for CoercedValue {
    fn from(value: i64) -> Self {
        CoercedValue::I64(value)
    }
}

impl From<f64> for CoercedValue {
    fn from(value: f64) -> Self {
        CoercedValue::F64(value)
    }
}
