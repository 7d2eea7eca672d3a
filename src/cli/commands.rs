//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, TreeArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{KaryTree, TraversalOrder};
use crate::render::TreeDisplay;

/// Largest arity the command line can instantiate.
pub const MAX_ARITY: usize = 8;

/// Calls `$func::<K>(args...)` with the runtime arity lifted to the const parameter.
macro_rules! with_arity {
    ($arity:expr, $func:ident ( $($arg:expr),* $(,)? )) => {
        match $arity {
            1 => $func::<1>($($arg),*),
            2 => $func::<2>($($arg),*),
            3 => $func::<3>($($arg),*),
            4 => $func::<4>($($arg),*),
            5 => $func::<5>($($arg),*),
            6 => $func::<6>($($arg),*),
            7 => $func::<7>($($arg),*),
            8 => $func::<8>($($arg),*),
            other => Err(CliError::InvalidArgs(format!(
                "arity must be between 1 and {MAX_ARITY}, got {other}"
            ))),
        }
    };
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(separator) = &cli.separator {
        settings.separator = separator.clone();
    }
    debug!(?settings, "effective settings");

    match &cli.command {
        Some(Commands::Walk { tree, orders }) => {
            let orders = if orders.is_empty() {
                settings.orders.as_slice()
            } else {
                orders.as_slice()
            };
            let arity = tree.arity.unwrap_or(settings.arity);
            with_arity!(arity, _walk(tree, orders, &settings.separator))
        }
        Some(Commands::Show { tree }) => {
            let arity = tree.arity.unwrap_or(settings.arity);
            with_arity!(arity, _show(tree))
        }
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Builds the tree, reporting edges that cannot be attached.
#[instrument(level = "debug")]
pub fn build_tree<const K: usize>(args: &TreeArgs) -> CliResult<KaryTree<i64, K>> {
    let mut tree = KaryTree::new();
    tree.add_root(args.root);
    for edge in &args.edges {
        tree.try_add_sub_node(&edge.parent, edge.child)?;
    }
    Ok(tree)
}

#[instrument(level = "debug")]
fn _walk<const K: usize>(
    args: &TreeArgs,
    orders: &[TraversalOrder],
    separator: &str,
) -> CliResult<()> {
    let tree = build_tree::<K>(args)?;
    output::header(&format!(
        "{}-ary tree: {} nodes, depth {}",
        tree.arity(),
        tree.len(),
        tree.depth()
    ));
    for &order in orders {
        let values = tree.traverse(order)?;
        output::traversal(order.as_str(), &values.iter().join(separator));
    }
    Ok(())
}

#[instrument(level = "debug")]
fn _show<const K: usize>(args: &TreeArgs) -> CliResult<()> {
    let tree = build_tree::<K>(args)?;
    print!("{}", tree.to_tree_string());
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => print!("{}", settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => println!("{}", path.display()),
            None => output::warning("no home directory, global config unavailable"),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Edge;

    fn args(root: i64, edges: &[(i64, i64)]) -> TreeArgs {
        TreeArgs {
            arity: None,
            root,
            edges: edges
                .iter()
                .map(|&(parent, child)| Edge { parent, child })
                .collect(),
        }
    }

    #[test]
    fn test_build_tree_from_edges() {
        let tree = build_tree::<2>(&args(8, &[(8, 13), (8, 5), (13, 6)])).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(
            tree.iter_pre_order().copied().collect::<Vec<_>>(),
            vec![8, 13, 6, 5]
        );
    }

    #[test]
    fn test_build_tree_rejects_unknown_parent() {
        let err = build_tree::<2>(&args(8, &[(9, 1)])).unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn test_build_tree_rejects_overfull_parent() {
        let err = build_tree::<1>(&args(1, &[(1, 2), (1, 3)])).unwrap_err();
        assert!(err.to_string().contains("maximum of 1"));
    }

    #[test]
    fn test_walk_rejects_in_order_for_ternary() {
        let err = _walk::<3>(&args(1, &[]), &[TraversalOrder::InOrder], ", ").unwrap_err();
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn test_arity_out_of_range() {
        let tree = args(1, &[]);
        let result: CliResult<()> = with_arity!(0, _show(&tree));
        assert!(matches!(result, Err(CliError::InvalidArgs(_))));
    }
}
