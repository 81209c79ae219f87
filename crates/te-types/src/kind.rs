//! Parameter kinds.
//!
//! Every parameter of a registered callable has a [`ParamKind`]. All kinds except
//! [`ParamKind::Other`] can be produced from a [`Node`](crate::node::Node) by the
//! coercion table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target kind of a callable parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParamKind {
    /// Accepts the structured node itself.
    Node,
    Text,
    Char,
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    /// Any other parameter type (collections, user-defined objects). Never coercible.
    Other(String),
}

impl ParamKind {
    /// All kinds the coercion table can produce.
    pub const SUPPORTED: [ParamKind; 10] = [
        ParamKind::Node,
        ParamKind::Text,
        ParamKind::Char,
        ParamKind::Bool,
        ParamKind::I8,
        ParamKind::I16,
        ParamKind::I32,
        ParamKind::I64,
        ParamKind::F32,
        ParamKind::F64,
    ];

    pub fn other(name: impl Into<String>) -> Self {
        ParamKind::Other(name.into())
    }

    /// Whether a node can be coerced to this kind.
    pub fn is_supported(&self) -> bool {
        !matches!(self, ParamKind::Other(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ParamKind::I8 | ParamKind::I16 | ParamKind::I32 | ParamKind::I64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, ParamKind::F32 | ParamKind::F64)
    }

    pub fn name(&self) -> &str {
        match self {
            ParamKind::Node => "node",
            ParamKind::Text => "text",
            ParamKind::Char => "char",
            ParamKind::Bool => "bool",
            ParamKind::I8 => "i8",
            ParamKind::I16 => "i16",
            ParamKind::I32 => "i32",
            ParamKind::I64 => "i64",
            ParamKind::F32 => "f32",
            ParamKind::F64 => "f64",
            ParamKind::Other(name) => name,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsing accepts the canonical names plus common aliases; anything unknown
/// becomes [`ParamKind::Other`], so parsing never fails.
impl FromStr for ParamKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim() {
            "node" | "Node" | "Object" | "java.lang.Object" => ParamKind::Node,
            "text" | "string" | "String" | "str" => ParamKind::Text,
            "char" | "Character" => ParamKind::Char,
            "bool" | "boolean" | "Boolean" => ParamKind::Bool,
            "i8" | "byte" | "Byte" => ParamKind::I8,
            "i16" | "short" | "Short" => ParamKind::I16,
            "i32" | "int" | "Integer" => ParamKind::I32,
            "i64" | "long" | "Long" => ParamKind::I64,
            "f32" | "float" | "Float" => ParamKind::F32,
            "f64" | "double" | "Double" => ParamKind::F64,
            other => ParamKind::Other(other.to_string()),
        };
        Ok(kind)
    }
}

impl From<String> for ParamKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<ParamKind> for String {
    fn from(value: ParamKind) -> Self {
        value.name().to_string()
    }
}
