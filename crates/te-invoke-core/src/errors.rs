//! Error taxonomy for resolution, coercion and invocation.
//!
//! | Range | Purpose | Variants |
//! |-------|---------|----------|
//! | E1xx | Lookup | TypeNotFound, InvalidArityRange, OperationNotFound |
//! | E2xx | Coercion | Coercion |
//! | E3xx | Invocation | ArityMismatch, MissingReceiver, Invocation |
//! | E4xx | Registry | DuplicateType |
//!
//! Core functions return `anyhow::Result`; the typed error is recovered with
//! `err.downcast_ref::<InvokeError>()`.

use std::fmt;

use te_invoke_types::ParamKind;

/// Why a node's text could not be converted to a supported kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercionFailure {
    /// A character was requested from empty text.
    EmptyText,
    InvalidInteger { text: String, reason: String },
    InvalidFloat { text: String, reason: String },
    /// The target kind has no coercion. Only surfaced when no other candidate exists.
    Unsupported,
}

impl fmt::Display for CoercionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionFailure::EmptyText => write!(f, "text is empty"),
            CoercionFailure::InvalidInteger { text, reason } => {
                write!(f, "invalid integer literal {:?}: {}", text, reason)
            }
            CoercionFailure::InvalidFloat { text, reason } => {
                write!(f, "invalid float literal {:?}: {}", text, reason)
            }
            CoercionFailure::Unsupported => write!(f, "kind is not coercible from text"),
        }
    }
}

#[derive(Debug)]
pub enum InvokeError {
    TypeNotFound {
        type_name: String,
    },
    InvalidArityRange {
        min: usize,
        max: usize,
    },
    OperationNotFound {
        type_name: String,
        operation: String,
        min: usize,
        max: usize,
    },
    Coercion {
        type_name: String,
        /// Zero-based parameter position.
        index: usize,
        kind: ParamKind,
        failure: CoercionFailure,
    },
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },
    MissingReceiver {
        operation: String,
    },
    Invocation {
        type_name: String,
        operation: String,
        source: anyhow::Error,
    },
    DuplicateType {
        type_name: String,
    },
}

impl InvokeError {
    pub fn code(&self) -> &'static str {
        match self {
            InvokeError::TypeNotFound { .. } => "E101",
            InvokeError::InvalidArityRange { .. } => "E102",
            InvokeError::OperationNotFound { .. } => "E103",
            InvokeError::Coercion { .. } => "E201",
            InvokeError::ArityMismatch { .. } => "E301",
            InvokeError::MissingReceiver { .. } => "E302",
            InvokeError::Invocation { .. } => "E303",
            InvokeError::DuplicateType { .. } => "E401",
        }
    }

    pub fn is_lookup_failure(&self) -> bool {
        self.code().starts_with("E1")
    }
}

/// Describe a required argument count: `"1 argument"`, `"2 arguments"`,
/// `"1 to 3 arguments"`. The plural suffix applies when either bound exceeds one.
pub fn arity_description(min: usize, max: usize) -> String {
    let mut desc = min.to_string();
    if max > min {
        desc.push_str(&format!(" to {}", max));
    }
    desc.push_str(" argument");
    if min > 1 || max > 1 {
        desc.push('s');
    }
    desc
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvokeError::TypeNotFound { type_name } => {
                write!(f, "Type {} was not found", type_name)
            }
            InvokeError::InvalidArityRange { min, max } => write!(
                f,
                "Invalid argument range: maximum {} is less than minimum {}",
                max, min
            ),
            InvokeError::OperationNotFound {
                type_name,
                operation,
                min,
                max,
            } => write!(
                f,
                "Method {} with {} was not found in type {}",
                operation,
                arity_description(*min, *max),
                type_name
            ),
            InvokeError::Coercion {
                type_name,
                index,
                kind,
                failure,
            } => write!(
                f,
                "Cannot convert argument {} of {} to {}: {}",
                index, type_name, kind, failure
            ),
            InvokeError::ArityMismatch {
                operation,
                expected,
                actual,
            } => write!(
                f,
                "{} expects {} but {} were supplied",
                operation,
                arity_description(*expected, *expected),
                actual
            ),
            InvokeError::MissingReceiver { operation } => {
                write!(f, "{} is an instance method and needs a receiver", operation)
            }
            InvokeError::Invocation {
                type_name,
                operation,
                source,
            } => write!(f, "{}::{} failed: {}", type_name, operation, source),
            InvokeError::DuplicateType { type_name } => {
                write!(f, "Type {} is already registered", type_name)
            }
        }
    }
}

impl std::error::Error for InvokeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvokeError::Invocation { source, .. } => Some(&**source),
            _ => None,
        }
    }
}
