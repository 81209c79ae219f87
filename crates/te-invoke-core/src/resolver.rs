//! # Callable Resolution
//!
//! Finds a method of a registered type by name and argument count.
//!
//! Methods are scanned in registration order and the first one whose name matches
//! and whose arity lies in the requested range wins. When several overloads
//! qualify, the earliest-registered one is returned.
//!
//! ```
//! use te_invoke_core::registry::{TypeDesc, TypeRegistry};
//! use te_invoke_core::resolver::{find_operation, find_operation_exact};
//! use te_invoke_types::ParamKind;
//!
//! #[derive(Debug)]
//! struct Text;
//!
//! let registry = TypeRegistry::new();
//! registry
//!     .register(
//!         TypeDesc::builder::<Text>("demo.Text")
//!             .static_method("join", [ParamKind::Text, ParamKind::Text], |_| Ok(None))
//!             .build(),
//!     )
//!     .unwrap();
//!
//! let join = find_operation_exact(&registry, "demo.Text", "join", 2).unwrap();
//! assert_eq!(join.arity(), 2);
//!
//! let err = find_operation(&registry, "demo.Text", "join", 3, 4).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Method join with 3 to 4 arguments was not found in type demo.Text"
//! );
//! ```

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::errors::InvokeError;
use crate::registry::{Method, TypeSource};

/// Find the first method named `op_name` on `type_name` taking between `min_args`
/// and `max_args` arguments (inclusive).
pub fn find_operation<S: TypeSource + ?Sized>(
    source: &S,
    type_name: &str,
    op_name: &str,
    min_args: usize,
    max_args: usize,
) -> Result<Arc<Method>> {
    if max_args < min_args {
        return Err(InvokeError::InvalidArityRange {
            min: min_args,
            max: max_args,
        }
        .into());
    }

    let desc = source.load(type_name)?;
    for method in desc.methods() {
        if method.signature().matches(op_name, min_args, max_args) {
            debug!(
                type_name,
                operation = op_name,
                arity = method.arity(),
                "resolved operation"
            );
            return Ok(Arc::clone(method));
        }
        trace!(type_name, candidate = %method.signature(), "operation candidate skipped");
    }

    Err(InvokeError::OperationNotFound {
        type_name: type_name.to_string(),
        operation: op_name.to_string(),
        min: min_args,
        max: max_args,
    }
    .into())
}

/// [`find_operation`] with an exact argument count.
pub fn find_operation_exact<S: TypeSource + ?Sized>(
    source: &S,
    type_name: &str,
    op_name: &str,
    arg_count: usize,
) -> Result<Arc<Method>> {
    find_operation(source, type_name, op_name, arg_count, arg_count)
}
