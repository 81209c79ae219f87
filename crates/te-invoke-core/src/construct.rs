//! # Construction from Nodes
//!
//! Builds an instance of a registered type from an ordered list of argument nodes.
//!
//! Constructors are tried in registration order. A candidate is considered when its
//! arity equals the number of nodes; its parameters are then coerced in order:
//!
//! - a parameter kind with no coercion rejects the candidate and the next
//!   constructor is tried;
//! - malformed text for a supported kind aborts the whole call.
//!
//! When no candidate survives, the result is `Ok(None)` rather than an error.

use anyhow::Result;
use te_invoke_types::Node;
use tracing::{debug, trace};

use crate::coerce::coerce_candidate;
use crate::registry::{Instance, TypeSource};

/// Construct `type_name` from `args`, or `Ok(None)` when no constructor applies.
pub fn construct<S: TypeSource + ?Sized>(
    source: &S,
    type_name: &str,
    args: &[Node],
) -> Result<Option<Instance>> {
    let desc = source.load(type_name)?;

    for constructor in desc.constructors() {
        if constructor.arity() != args.len() {
            continue;
        }
        trace!(type_name, candidate = %constructor.signature(), "trying constructor");
        let Some(values) = coerce_candidate(type_name, constructor.params(), args)? else {
            continue;
        };
        debug!(type_name, candidate = %constructor.signature(), "constructing");
        return constructor.invoke(&values).map(Some);
    }

    debug!(
        type_name,
        arity = args.len(),
        "no constructor with fully coercible parameters"
    );
    Ok(None)
}
