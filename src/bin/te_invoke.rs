//! te-invoke: resolve and invoke registered host types from the command line
//!
//! ## Example Usage
//!
//! ```bash
//! # List the built-in types
//! te-invoke types
//!
//! # Show constructors and methods of a type
//! te-invoke describe te.util.Counter
//!
//! # Resolve a method taking one to two arguments
//! te-invoke find te.util.Counter add --min 1 --max 2
//!
//! # Construct from text arguments
//! te-invoke construct te.util.Tolerance --arg 0.01 --arg false
//!
//! # Construct from a JSON file of argument nodes
//! te-invoke construct te.util.Label --nodes args.json
//!
//! # Invoke an instance method on a freshly constructed receiver
//! te-invoke call te.util.Counter add --ctor-arg 40 --arg 2
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use te_invoke::catalog::builtin_registry;
use te_invoke::InvokeError;

mod invoke_cli;

use invoke_cli::{
    call::CallCmd, config::CliConfig, construct::ConstructCmd, describe::DescribeCmd,
    find::FindCmd,
};

#[derive(Parser)]
#[command(
    name = "te-invoke",
    author,
    version,
    about = "Resolve and invoke registered host types",
    long_about = "Resolve methods by name and argument count, and construct instances \
                  from text arguments, against the built-in type catalog."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered type names
    Types,

    /// Show the constructors and methods of a type
    Describe(DescribeCmd),

    /// Resolve a method by name and argument count
    Find(FindCmd),

    /// Construct an instance from text arguments
    Construct(ConstructCmd),

    /// Resolve a method and invoke it
    Call(CallCmd),
}

fn main() -> Result<()> {
    let Cli {
        command,
        json,
        verbose,
    } = Cli::parse();

    let config = CliConfig::from_env().with_flags(json, verbose);
    config.init_logging();

    let registry = builtin_registry()?;

    let result = match &command {
        Commands::Types => invoke_cli::describe::list_types(&registry, config.json),
        Commands::Describe(cmd) => cmd.execute(&registry, config.json),
        Commands::Find(cmd) => cmd.execute(&registry, config.json),
        Commands::Construct(cmd) => cmd.execute(&registry, config.json),
        Commands::Call(cmd) => cmd.execute(&registry, config.json),
    };

    if config.json {
        if let Err(err) = &result {
            let code = err.downcast_ref::<InvokeError>().map(InvokeError::code);
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "success": false,
                    "code": code,
                    "error": format!("{:#}", err),
                }))?
            );
        }
    }

    result
}
