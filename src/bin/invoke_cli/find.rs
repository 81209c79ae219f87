//! Find command - resolve a method by name and argument count

use anyhow::Result;
use clap::Parser;
use te_invoke::{find_operation, TypeRegistry};

use super::output::print_json;

#[derive(Parser, Debug)]
pub struct FindCmd {
    /// Qualified type name
    pub type_name: String,

    /// Method name
    pub operation: String,

    /// Exact argument count (shorthand for --min N --max N)
    #[arg(long, conflicts_with_all = ["min", "max"])]
    pub args: Option<usize>,

    /// Minimum argument count
    #[arg(long, default_value_t = 0)]
    pub min: usize,

    /// Maximum argument count (defaults to --min)
    #[arg(long)]
    pub max: Option<usize>,
}

impl FindCmd {
    pub fn range(&self) -> (usize, usize) {
        match self.args {
            Some(n) => (n, n),
            None => (self.min, self.max.unwrap_or(self.min)),
        }
    }

    pub fn execute(&self, registry: &TypeRegistry, json_output: bool) -> Result<()> {
        let (min, max) = self.range();
        let method = find_operation(registry, &self.type_name, &self.operation, min, max)?;
        if json_output {
            print_json(method.signature())
        } else {
            println!("{}", method.signature());
            Ok(())
        }
    }
}
