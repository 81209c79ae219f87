//! Operation signatures.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::kind::ParamKind;

/// Name and parameter list of a constructor or method.
///
/// Constructors use the reserved name [`OperationSignature::CONSTRUCTOR`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationSignature {
    pub type_name: String,
    pub name: String,
    pub params: Vec<ParamKind>,
    /// Static operations are invoked without a receiver.
    #[serde(default)]
    pub is_static: bool,
}

impl OperationSignature {
    pub const CONSTRUCTOR: &'static str = "<init>";

    pub fn new(
        type_name: impl Into<String>,
        name: impl Into<String>,
        params: Vec<ParamKind>,
        is_static: bool,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.into(),
            params,
            is_static,
        }
    }

    pub fn constructor(type_name: impl Into<String>, params: Vec<ParamKind>) -> Self {
        Self::new(type_name, Self::CONSTRUCTOR, params, true)
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn is_constructor(&self) -> bool {
        self.name == Self::CONSTRUCTOR
    }

    /// True when the name matches and the arity lies in `[min_args, max_args]`.
    pub fn matches(&self, name: &str, min_args: usize, max_args: usize) -> bool {
        self.name == name && (min_args..=max_args).contains(&self.arity())
    }

    /// True when every parameter kind is coercible from a node.
    pub fn is_fully_coercible(&self) -> bool {
        self.params.iter().all(ParamKind::is_supported)
    }
}

impl fmt::Display for OperationSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_constructor() {
            write!(f, "new {}(", self.type_name)?;
        } else if self.is_static {
            write!(f, "static {}::{}(", self.type_name, self.name)?;
        } else {
            write!(f, "{}::{}(", self.type_name, self.name)?;
        }
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_range() {
        let sig = OperationSignature::new("T", "add", vec![ParamKind::I32, ParamKind::I32], false);
        assert_eq!(sig.arity(), 2);
        assert!(sig.matches("add", 2, 2));
        assert!(sig.matches("add", 0, 3));
        assert!(!sig.matches("add", 3, 4));
        assert!(!sig.matches("sub", 2, 2));
    }

    #[test]
    fn test_display() {
        let ctor = OperationSignature::constructor("te.P", vec![ParamKind::I32, ParamKind::Bool]);
        assert_eq!(ctor.to_string(), "new te.P(i32, bool)");
        assert!(ctor.is_constructor());

        let method = OperationSignature::new("te.P", "get", vec![], false);
        assert_eq!(method.to_string(), "te.P::get()");
    }

    #[test]
    fn test_fully_coercible() {
        let sig =
            OperationSignature::constructor("T", vec![ParamKind::Text, ParamKind::other("List")]);
        assert!(!sig.is_fully_coercible());
    }
}
