//! Built-in host types.
//!
//! A small catalog registered by [`builtin_registry`], used by the CLI and handy as
//! a reference for describing types with [`TypeDesc::builder`].
//!
//! | Type | Constructors | Methods |
//! |------|--------------|---------|
//! | `te.util.Counter` | `()`, `(i64)`, `(i64, i64)` | `increment()`, `add(i64)`, `get()`, static `parse(text)` |
//! | `te.util.Tolerance` | `(f64)`, `(f64, bool)` | `accepts(f64, f64)`, `epsilon()` |
//! | `te.util.Label` | `(list<text>)`, `(node)`, `(text, char)` | `render()`, `mark(char)`, static `concat(text, text)` |
//!
//! The `(list<text>)` constructor of `Label` has no text coercion, so
//! single-argument construction always lands on `(node)`.

use anyhow::{Context, Result};
use te_invoke_core::{TypeDesc, TypeRegistry};
use te_invoke_types::{CoercedValue, Node, ParamKind};

pub const COUNTER: &str = "te.util.Counter";
pub const TOLERANCE: &str = "te.util.Tolerance";
pub const LABEL: &str = "te.util.Label";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub value: i64,
    pub step: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tolerance {
    pub epsilon: f64,
    pub inclusive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub marker: Option<char>,
    /// Element name when built from a node.
    pub source: Option<String>,
}

impl Tolerance {
    pub fn accepts(&self, expected: f64, actual: f64) -> bool {
        let delta = (expected - actual).abs();
        if self.inclusive {
            delta <= self.epsilon
        } else {
            delta < self.epsilon
        }
    }
}

impl Label {
    pub fn render(&self) -> String {
        match self.marker {
            Some(marker) => format!("{} {}", marker, self.text),
            None => self.text.clone(),
        }
    }
}

fn counter() -> TypeDesc {
    TypeDesc::builder::<Counter>(COUNTER)
        .constructor([], |_| Ok(Counter { value: 0, step: 1 }))
        .constructor([ParamKind::I64], |args| {
            Ok(Counter {
                value: args[0].as_i64()?,
                step: 1,
            })
        })
        .constructor([ParamKind::I64, ParamKind::I64], |args| {
            Ok(Counter {
                value: args[0].as_i64()?,
                step: args[1].as_i64()?,
            })
        })
        .method("increment", [], |this, _| {
            this.value = this
                .value
                .checked_add(this.step)
                .context("counter overflow")?;
            Ok(Some(CoercedValue::I64(this.value)))
        })
        .method("add", [ParamKind::I64], |this, args| {
            this.value = this
                .value
                .checked_add(args[0].as_i64()?)
                .context("counter overflow")?;
            Ok(Some(CoercedValue::I64(this.value)))
        })
        .method("get", [], |this, _| Ok(Some(CoercedValue::I64(this.value))))
        .static_method("parse", [ParamKind::Text], |args| {
            let text = args[0].as_text()?;
            let value: i64 = text
                .trim()
                .parse()
                .with_context(|| format!("not a counter value: {:?}", text))?;
            Ok(Some(CoercedValue::I64(value)))
        })
        .build()
}

fn tolerance() -> TypeDesc {
    TypeDesc::builder::<Tolerance>(TOLERANCE)
        .constructor([ParamKind::F64], |args| {
            Ok(Tolerance {
                epsilon: args[0].as_f64()?,
                inclusive: true,
            })
        })
        .constructor([ParamKind::F64, ParamKind::Bool], |args| {
            Ok(Tolerance {
                epsilon: args[0].as_f64()?,
                inclusive: args[1].as_bool()?,
            })
        })
        .method("accepts", [ParamKind::F64, ParamKind::F64], |this, args| {
            let accepted = this.accepts(args[0].as_f64()?, args[1].as_f64()?);
            Ok(Some(CoercedValue::Bool(accepted)))
        })
        .method("epsilon", [], |this, _| Ok(Some(CoercedValue::F64(this.epsilon))))
        .build()
}

fn label() -> TypeDesc {
    TypeDesc::builder::<Label>(LABEL)
        .constructor([ParamKind::other("list<text>")], |_| {
            anyhow::bail!("list arguments are not constructible from nodes")
        })
        .constructor([ParamKind::Node], |args| {
            let node: &Node = args[0].as_node()?;
            Ok(Label {
                text: node.text_content(),
                marker: None,
                source: node.name().map(str::to_string),
            })
        })
        .constructor([ParamKind::Text, ParamKind::Char], |args| {
            Ok(Label {
                text: args[0].as_text()?.to_string(),
                marker: Some(args[1].as_char()?),
                source: None,
            })
        })
        .method("render", [], |this, _| Ok(Some(CoercedValue::Text(this.render()))))
        .method("mark", [ParamKind::Char], |this, args| {
            this.marker = Some(args[0].as_char()?);
            Ok(None)
        })
        .static_method("concat", [ParamKind::Text, ParamKind::Text], |args| {
            let joined = format!("{}{}", args[0].as_text()?, args[1].as_text()?);
            Ok(Some(CoercedValue::Text(joined)))
        })
        .build()
}

/// Register the built-in types into an existing registry.
pub fn register_builtins(registry: &TypeRegistry) -> Result<()> {
    registry.register(counter())?;
    registry.register(tolerance())?;
    registry.register(label())?;
    Ok(())
}

/// A fresh registry holding only the built-in types.
pub fn builtin_registry() -> Result<TypeRegistry> {
    let registry = TypeRegistry::new();
    register_builtins(&registry)?;
    Ok(registry)
}
