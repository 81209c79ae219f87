//! Construct command - build an instance from text arguments

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use te_invoke::{construct, TypeRegistry};

use super::load_nodes;
use super::output::{format_instance, print_json, InstanceInfo};

#[derive(Parser, Debug)]
pub struct ConstructCmd {
    /// Qualified type name
    pub type_name: String,

    /// Constructor argument text (repeatable, in order)
    #[arg(long = "arg", value_name = "TEXT", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// JSON file holding an array of argument nodes
    #[arg(long, value_name = "PATH", conflicts_with = "args")]
    pub nodes: Option<PathBuf>,
}

impl ConstructCmd {
    pub fn execute(&self, registry: &TypeRegistry, json_output: bool) -> Result<()> {
        let nodes = load_nodes(&self.args, self.nodes.as_deref())?;
        let instance = construct(registry, &self.type_name, &nodes)?;

        if json_output {
            let info = instance.as_ref().map(InstanceInfo::from);
            return print_json(&info);
        }
        match instance {
            Some(instance) => println!("{}", format_instance(&instance)),
            None => println!(
                "no matching constructor for {} with {} argument(s)",
                self.type_name,
                nodes.len()
            ),
        }
        Ok(())
    }
}
