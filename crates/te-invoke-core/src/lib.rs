//! Dynamic invocation over a registry of host types.
//!
//! Two entry points, used independently:
//!
//! - [`find_operation`] resolves a method of a type by name and argument-count range.
//!   A miss is a descriptive [`InvokeError::OperationNotFound`] error.
//! - [`construct`] converts text-bearing [`Node`](te_invoke_types::Node)s into typed
//!   constructor arguments and builds an instance. A miss is `Ok(None)`.
//!
//! Types are described up front in a [`TypeRegistry`]; see [`registry`] for the
//! builder API. Nothing is cached between calls.

pub mod coerce;
pub mod construct;
pub mod errors;
pub mod registry;
pub mod resolver;

pub use coerce::{coerce_node, coerce_nodes};
pub use construct::construct;
pub use errors::{arity_description, CoercionFailure, InvokeError};
pub use registry::{
    Constructor, HostValue, Instance, Method, TypeDesc, TypeDescBuilder, TypeRegistry, TypeSource,
};
pub use resolver::{find_operation, find_operation_exact};
