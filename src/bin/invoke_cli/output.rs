//! Output formatting for te-invoke CLI

use serde::Serialize;
use te_invoke::{CoercedValue, Instance, OperationSignature, TypeDesc};

#[derive(Debug, Serialize)]
pub struct TypeInfo {
    pub name: String,
    pub constructors: Vec<OperationSignature>,
    pub methods: Vec<OperationSignature>,
}

impl From<&TypeDesc> for TypeInfo {
    fn from(desc: &TypeDesc) -> Self {
        Self {
            name: desc.name().to_string(),
            constructors: desc
                .constructors()
                .iter()
                .map(|c| c.signature().clone())
                .collect(),
            methods: desc
                .methods()
                .iter()
                .map(|m| m.signature().clone())
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InstanceInfo {
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: String,
}

impl From<&Instance> for InstanceInfo {
    fn from(instance: &Instance) -> Self {
        Self {
            type_name: instance.type_name().to_string(),
            value: format_instance(instance),
        }
    }
}

/// Human-readable interface listing for one type.
pub fn format_type(info: &TypeInfo) -> String {
    let mut out = format!("\x1b[1m{}\x1b[0m\n", info.name);
    if info.constructors.is_empty() {
        out.push_str("  (no constructors)\n");
    }
    for ctor in &info.constructors {
        out.push_str(&format!("  {}\n", ctor));
        if !ctor.is_fully_coercible() {
            out.push_str("    \x1b[33m(not constructible from text)\x1b[0m\n");
        }
    }
    for method in &info.methods {
        out.push_str(&format!("  {}\n", method));
    }
    out
}

pub fn format_instance(instance: &Instance) -> String {
    format!("{:?}", instance.host_value())
}

pub fn format_value(value: Option<&CoercedValue>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "(no value)".to_string(),
    }
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
