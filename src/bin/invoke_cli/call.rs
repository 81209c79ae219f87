//! Call command - resolve and invoke a method

use anyhow::{anyhow, Result};
use clap::Parser;
use serde::Serialize;
use te_invoke::{construct, find_operation_exact, CoercedValue, Node, TypeRegistry};

use super::output::{format_value, print_json};

#[derive(Parser, Debug)]
pub struct CallCmd {
    /// Qualified type name
    pub type_name: String,

    /// Method name
    pub method: String,

    /// Receiver constructor argument text (instance methods only)
    #[arg(long = "ctor-arg", value_name = "TEXT", allow_hyphen_values = true)]
    pub ctor_args: Vec<String>,

    /// Method argument text (repeatable, in order)
    #[arg(long = "arg", value_name = "TEXT", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Serialize)]
struct CallOutput<'a> {
    signature: String,
    result: Option<&'a CoercedValue>,
}

impl CallCmd {
    pub fn execute(&self, registry: &TypeRegistry, json_output: bool) -> Result<()> {
        let method =
            find_operation_exact(registry, &self.type_name, &self.method, self.args.len())?;
        let nodes: Vec<Node> = self.args.iter().map(|t| Node::text(t.as_str())).collect();

        let result = if method.is_static() {
            method.invoke_with_nodes(None, &nodes)?
        } else {
            let ctor_nodes: Vec<Node> = self
                .ctor_args
                .iter()
                .map(|t| Node::text(t.as_str()))
                .collect();
            let mut receiver = construct(registry, &self.type_name, &ctor_nodes)?.ok_or_else(|| {
                anyhow!(
                    "no constructor of {} accepts {} argument(s) for the receiver",
                    self.type_name,
                    ctor_nodes.len()
                )
            })?;
            method.invoke_with_nodes(Some(&mut receiver), &nodes)?
        };

        if json_output {
            print_json(&CallOutput {
                signature: method.signature().to_string(),
                result: result.as_ref(),
            })
        } else {
            println!("{}", format_value(result.as_ref()));
            Ok(())
        }
    }
}
