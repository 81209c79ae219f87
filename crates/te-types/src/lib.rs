//! Shared types for the te-invoke workspace.
//!
//! This crate holds the data model used by the resolver and coercer in
//! `te-invoke-core` and by the CLI:
//!
//! - [`Node`](node::Node) - text-bearing structured argument
//! - [`ParamKind`](kind::ParamKind) - coercion target of a parameter
//! - [`CoercedValue`](value::CoercedValue) - a node converted to one target kind
//! - [`OperationSignature`](signature::OperationSignature) - name and parameter list of a callable

pub mod kind;
pub mod node;
pub mod signature;
pub mod value;

pub use kind::ParamKind;
pub use node::{Element, Node};
pub use signature::OperationSignature;
pub use value::CoercedValue;
