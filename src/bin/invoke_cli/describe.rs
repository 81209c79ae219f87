//! Types and describe commands - inspect the registry

use anyhow::Result;
use clap::Parser;
use te_invoke::{TypeRegistry, TypeSource};

use super::output::{format_type, print_json, TypeInfo};

#[derive(Parser, Debug)]
pub struct DescribeCmd {
    /// Qualified type name, e.g. te.util.Counter
    pub type_name: String,
}

impl DescribeCmd {
    pub fn execute(&self, registry: &TypeRegistry, json_output: bool) -> Result<()> {
        let desc = registry.load(&self.type_name)?;
        let info = TypeInfo::from(desc.as_ref());
        if json_output {
            print_json(&info)
        } else {
            print!("{}", format_type(&info));
            Ok(())
        }
    }
}

pub fn list_types(registry: &TypeRegistry, json_output: bool) -> Result<()> {
    let names = registry.type_names();
    if json_output {
        return print_json(&names);
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}
