//! CLI argument definitions using clap

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::domain::TraversalOrder;

/// Build K-ary trees from the command line and walk them in every order
#[derive(Parser, Debug)]
#[command(name = "karytree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Settings file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Separator between printed values (overrides settings)
    #[arg(long, global = true)]
    pub separator: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tree's values in one or more traversal orders
    Walk {
        #[command(flatten)]
        tree: TreeArgs,

        /// Traversal to print, repeatable (default: configured orders)
        #[arg(short, long = "order")]
        orders: Vec<TraversalOrder>,
    },

    /// Show the tree structure
    Show {
        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print effective settings as TOML
    Show,
    /// Print the global config file location
    Path,
}

/// Tree described on the command line.
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Maximum children per node (default: configured arity)
    #[arg(short = 'k', long)]
    pub arity: Option<usize>,

    /// Root value
    #[arg(short, long, allow_hyphen_values = true)]
    pub root: i64,

    /// Edge as PARENT:CHILD, attached in the order given
    #[arg(short, long = "edge", allow_hyphen_values = true)]
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub parent: i64,
    pub child: i64,
}

impl FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (parent, child) = s
            .split_once(':')
            .ok_or_else(|| format!("expected PARENT:CHILD, got '{s}'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i64>()
                .map_err(|e| format!("invalid value '{part}' in edge '{s}': {e}"))
        };
        Ok(Edge {
            parent: parse(parent)?,
            child: parse(child)?,
        })
    }
}
