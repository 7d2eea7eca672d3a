//! End-to-end tests running the karytree binary.

use std::process::{Command, Output};

use tempfile::TempDir;

const BINARY_EDGES: [&str; 6] = ["8:13", "8:5", "13:6", "13:7", "5:3", "5:2"];

fn karytree(args: &[&str]) -> Output {
    // Isolate from any global config on the machine
    let config_home = TempDir::new().unwrap();
    Command::new(env!("CARGO_BIN_EXE_karytree"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("KARYTREE_ARITY")
        .env_remove("KARYTREE_ORDERS")
        .env_remove("KARYTREE_SEPARATOR")
        .output()
        .expect("run karytree")
}

fn walk_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["walk", "--root", "8"];
    for edge in BINARY_EDGES {
        args.extend(["--edge", edge]);
    }
    args.extend_from_slice(extra);
    args
}

#[test]
fn given_binary_edges_when_walking_all_orders_then_prints_each_sequence() {
    let output = karytree(&walk_args(&[]));
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("2-ary tree: 7 nodes, depth 3"));
    assert!(stdout.contains("pre-order: 8, 13, 6, 7, 5, 3, 2"));
    assert!(stdout.contains("post-order: 6, 7, 13, 3, 2, 5, 8"));
    assert!(stdout.contains("in-order: 6, 13, 7, 8, 3, 5, 2"));
    assert!(stdout.contains("bfs: 8, 13, 5, 6, 7, 3, 2"));
    assert!(stdout.contains("dfs: 8, 13, 6, 7, 5, 3, 2"));
    assert!(stdout.contains("heap: 2, 3, 5, 6, 7, 8, 13"));
}

#[test]
fn given_order_and_separator_when_walking_then_prints_only_that_order() {
    let output = karytree(&walk_args(&["--order", "heap", "--separator", " "]));
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("heap: 2 3 5 6 7 8 13"));
    assert!(!stdout.contains("pre-order"));
}

#[test]
fn given_ternary_arity_when_walking_in_order_then_usage_error() {
    let output = karytree(&["walk", "-k", "3", "--root", "1", "--order", "in-order"]);
    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("in-order traversal requires a binary tree"));
}

#[test]
fn given_unknown_parent_when_walking_then_data_error() {
    let output = karytree(&["walk", "--root", "1", "--edge", "2:3"]);
    assert_eq!(output.status.code(), Some(65));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("parent node not found: 2"));
}

#[test]
fn given_edges_when_showing_then_renders_tree() {
    let output = karytree(&["show", "--root", "1", "--edge", "1:2", "--edge", "1:3"]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "1");
    assert!(lines[1].ends_with("2"));
    assert!(lines[2].ends_with("3"));
}

#[test]
fn given_no_config_when_showing_config_then_prints_defaults() {
    let output = karytree(&["config", "show"]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("arity = 2"));
    assert!(stdout.contains("separator = \", \""));
}
