//! CLI subcommand implementations for te-invoke

pub mod call;
pub mod config;
pub mod construct;
pub mod describe;
pub mod find;
pub mod output;

use anyhow::{Context, Result};
use std::path::Path;
use te_invoke::Node;

/// Argument nodes from `--arg` texts, or from a JSON array file when given.
pub fn load_nodes(texts: &[String], nodes_file: Option<&Path>) -> Result<Vec<Node>> {
    match nodes_file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read nodes file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid nodes JSON in {}", path.display()))
        }
        None => Ok(texts.iter().map(|t| Node::text(t.as_str())).collect()),
    }
}
