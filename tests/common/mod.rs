//! Shared fixtures for integration tests.

#![allow(dead_code)]

use te_invoke::{CoercedValue, Node, ParamKind, TypeDesc, TypeRegistry};

pub const WIDGET: &str = "test.Widget";

/// Fixture host type covering every coercion kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Sized(i32, bool),
    Named(String),
    Fallback(i64, i64),
    Every {
        node: Node,
        text: String,
        ch: char,
        flag: bool,
        small: i8,
        short: i16,
        int: i32,
        long: i64,
        single: f32,
        double: f64,
    },
}

pub fn nodes(texts: &[&str]) -> Vec<Node> {
    texts.iter().map(|t| Node::text(*t)).collect()
}

pub fn widget_registry() -> TypeRegistry {
    let registry = TypeRegistry::new();
    registry
        .register(
            TypeDesc::builder::<Widget>(WIDGET)
                .constructor([ParamKind::I32, ParamKind::Bool], |args| {
                    Ok(Widget::Sized(args[0].as_i32()?, args[1].as_bool()?))
                })
                .constructor([ParamKind::other("java.util.Map")], |_| {
                    anyhow::bail!("map constructor is not reachable from text")
                })
                .constructor([ParamKind::Text], |args| {
                    Ok(Widget::Named(args[0].as_text()?.to_string()))
                })
                .constructor([ParamKind::I64, ParamKind::I64], |args| {
                    Ok(Widget::Fallback(args[0].as_i64()?, args[1].as_i64()?))
                })
                .constructor(
                    [
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
                    ],
                    |args| {
                        Ok(Widget::Every {
                            node: args[0].as_node()?.clone(),
                            text: args[1].as_text()?.to_string(),
                            ch: args[2].as_char()?,
                            flag: args[3].as_bool()?,
                            small: args[4].as_i8()?,
                            short: args[5].as_i16()?,
                            int: args[6].as_i32()?,
                            long: args[7].as_i64()?,
                            single: args[8].as_f32()?,
                            double: args[9].as_f64()?,
                        })
                    },
                )
                .method("scale", [ParamKind::I32], |this, args| match this {
                    Widget::Sized(size, _) => {
                        *size *= args[0].as_i32()?;
                        Ok(Some(CoercedValue::I32(*size)))
                    }
                    _ => anyhow::bail!("only sized widgets scale"),
                })
                .method("scale", [ParamKind::I32, ParamKind::I32], |this, args| match this {
                    Widget::Sized(size, _) => {
                        *size = *size * args[0].as_i32()? + args[1].as_i32()?;
                        Ok(Some(CoercedValue::I32(*size)))
                    }
                    _ => anyhow::bail!("only sized widgets scale"),
                })
                .static_method("kind_count", [], |_| Ok(Some(CoercedValue::I32(10))))
                .build(),
        )
        .expect("fresh registry");
    registry
}
