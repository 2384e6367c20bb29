//! dyngraph CLI -- interactive menu over an in-memory weighted graph.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dyngraph_core::Weight;

pub mod error;
pub mod input;
pub mod menu;
pub mod render;
pub mod script;
pub mod session;

#[derive(Debug, Parser)]
#[command(
    name = "dyngraph",
    about = "Dynamic undirected weighted graph with shortest-path queries"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive menu (the default)
    Menu(MenuArgs),
    /// Write a menu script that builds a random graph
    Generate(GenerateArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::Menu(MenuArgs::default())
    }
}

#[derive(Debug, Default, Parser)]
pub struct MenuArgs {
    /// Print every result as a JSON object, one per line
    #[arg(long)]
    pub json: bool,
    /// Do not print the menu or the argument prompts
    #[arg(long)]
    pub quiet: bool,
    /// Read menu input from this file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Number of vertices
    #[arg(long)]
    pub n_vertex: u64,
    /// Number of edges (capped at the size of the complete graph)
    #[arg(long)]
    pub n_edge: u64,
    /// Largest edge weight
    #[arg(long, default_value_t = 100)]
    pub max_weight: Weight,
    /// Write the script here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Emit the generated graph as JSON instead of a menu script
    #[arg(long)]
    pub json: bool,
}
