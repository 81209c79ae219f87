//! te-invoke
//!
//! Dynamic invocation of registered host types from text-bearing arguments:
//!
//! - **Resolution**: find a method by name and argument-count range ([`find_operation`])
//! - **Construction**: coerce argument nodes and pick a constructor ([`construct`])
//! - **Catalog**: a few built-in types used by the `te-invoke` CLI ([`catalog`])
//!
//! The data model lives in [`te_invoke_types`], the engine in [`te_invoke_core`];
//! both are re-exported here.

pub mod catalog;

pub use te_invoke_core::{
    arity_description, coerce_node, coerce_nodes, construct, find_operation,
    find_operation_exact, CoercionFailure, Constructor, HostValue, Instance, InvokeError, Method,
    TypeDesc, TypeDescBuilder, TypeRegistry, TypeSource,
};
pub use te_invoke_types::{CoercedValue, Element, Node, OperationSignature, ParamKind};
