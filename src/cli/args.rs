//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::config::DisplayStyle;

/// Balanced binary search tree: build, edit, traverse and inspect
#[derive(Parser, Debug)]
#[command(name = "baltree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (default: $XDG_CONFIG_HOME/baltree/baltree.toml)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Traversal order for `traverse`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Breadth-first, one line per depth
    Level,
    /// Node, left, right
    Pre,
    /// Left, node, right
    In,
    /// Left, right, node
    Post,
    /// All four orders
    #[default]
    All,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the demonstration: random build, random inserts, rebalance
    Demo {
        /// Number of random values in the initial array
        #[arg(long)]
        size: Option<usize>,
        /// Exclusive upper bound of the initial values
        #[arg(long)]
        max: Option<i64>,
        /// Number of random values inserted after the build
        #[arg(long)]
        inserts: Option<usize>,
        /// Exclusive upper bound of the inserted values
        #[arg(long)]
        insert_max: Option<i64>,
        /// Fixed RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Rendering of the tree shape
        #[arg(long, value_enum)]
        style: Option<DisplayStyle>,
    },

    /// Build a tree from values and print its shape
    Show {
        /// Values, separated by commas or spaces
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        /// Rendering of the tree shape
        #[arg(long, value_enum)]
        style: Option<DisplayStyle>,
    },

    /// Build a tree from values and print traversals
    Traverse {
        /// Values, separated by commas or spaces
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        /// Traversal order
        #[arg(short, long, value_enum, default_value_t = Order::All)]
        order: Order,
    },

    /// Build a tree from values and print size, height and balance
    Stats {
        /// Values, separated by commas or spaces
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Build a tree, apply inserts, then deletes, then optionally rebalance
    Edit {
        /// Values, separated by commas or spaces
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        /// Value to insert (repeatable)
        #[arg(short, long = "insert", allow_negative_numbers = true)]
        inserts: Vec<i64>,
        /// Value to delete (repeatable)
        #[arg(short = 'x', long = "delete", allow_negative_numbers = true)]
        deletes: Vec<i64>,
        /// Rebalance after editing
        #[arg(short, long)]
        rebalance: bool,
        /// Rendering of the tree shape
        #[arg(long, value_enum)]
        style: Option<DisplayStyle>,
    },

    /// Look up a value and print its height and depth
    Find {
        /// Value to look up
        #[arg(allow_negative_numbers = true)]
        key: i64,
        /// Values, separated by commas or spaces
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Show the effective configuration
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_edit_flags_when_parsing_then_collected_in_order() {
        let cli = Cli::parse_from([
            "baltree", "-dd", "edit", "1,2,3", "-i", "4", "--insert", "5", "-x", "1", "-r",
        ]);
        assert_eq!(cli.debug, 2);
        match cli.command {
            Commands::Edit {
                values,
                inserts,
                deletes,
                rebalance,
                style,
            } => {
                assert_eq!(values, vec!["1,2,3"]);
                assert_eq!(inserts, vec![4, 5]);
                assert_eq!(deletes, vec![1]);
                assert!(rebalance);
                assert_eq!(style, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn given_negative_values_when_parsing_then_kept_as_values() {
        let cli = Cli::parse_from(["baltree", "find", "-3", "-3", "4", "-7"]);
        match cli.command {
            Commands::Find { key, values } => {
                assert_eq!(key, -3);
                assert_eq!(values, vec!["-3", "4", "-7"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn given_traverse_without_order_when_parsing_then_all() {
        let cli = Cli::parse_from(["baltree", "traverse", "3", "1", "2"]);
        assert!(matches!(
            cli.command,
            Commands::Traverse {
                order: Order::All,
                ..
            }
        ));
    }
}
