//! Command dispatch and terminal rendering

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::application::{DemoService, EditPlan, Snapshot, TreeStats, Traversals};
use crate::cli::args::{Cli, Commands, Order};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{DemoConfig, DisplayStyle, Settings};
use crate::domain::{parse_values, OrderedTree, TreeDisplay};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Demo {
            size,
            max,
            inserts,
            insert_max,
            seed,
            style,
        } => {
            let config = DemoConfig {
                size: size.unwrap_or(settings.demo.size),
                max: max.unwrap_or(settings.demo.max),
                inserts: inserts.unwrap_or(settings.demo.inserts),
                insert_max: insert_max.unwrap_or(settings.demo.insert_max),
                seed: seed.or(settings.demo.seed),
            };
            _demo(config, style.unwrap_or(settings.style))
        }
        Commands::Show { values, style } => _show(values, style.unwrap_or(settings.style)),
        Commands::Traverse { values, order } => _traverse(values, *order),
        Commands::Stats { values } => _stats(values),
        Commands::Edit {
            values,
            inserts,
            deletes,
            rebalance,
            style,
        } => {
            let plan = EditPlan {
                inserts: inserts.clone(),
                deletes: deletes.clone(),
                rebalance: *rebalance,
            };
            _edit(values, &plan, style.unwrap_or(settings.style))
        }
        Commands::Find { key, values } => _find(*key, values),
        Commands::Config => _config(&settings),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Parse positional value arguments into a tree.
pub fn build_tree(values: &[String]) -> CliResult<OrderedTree<i64>> {
    let values = parse_values(&values.join(" "))?;
    debug!(?values, "parsed values");
    Ok(OrderedTree::build(values))
}

/// Render the tree shape; an empty tree renders as `(empty)`.
pub fn render(tree: &OrderedTree<i64>, style: DisplayStyle) -> String {
    if tree.is_empty() {
        return "(empty)".to_string();
    }
    let rendered = match style {
        DisplayStyle::Sideways => tree.pretty().to_string(),
        DisplayStyle::Termtree => tree.to_termtree().to_string(),
    };
    rendered.trim_end().to_string()
}

fn print_traversals(traversals: &Traversals<i64>, order: Order) {
    if matches!(order, Order::Level | Order::All) {
        output::action("Level order", &format!("{:?}", traversals.level_order));
    }
    if matches!(order, Order::Pre | Order::All) {
        output::action("Preorder", &format!("{:?}", traversals.preorder));
    }
    if matches!(order, Order::In | Order::All) {
        output::action("Inorder", &format!("{:?}", traversals.inorder));
    }
    if matches!(order, Order::Post | Order::All) {
        output::action("Postorder", &format!("{:?}", traversals.postorder));
    }
}

fn print_snapshot(title: &str, snapshot: &Snapshot<i64>, style: DisplayStyle) {
    output::header(title);
    output::info(&render(&snapshot.tree, style));
    output::balanced("Balanced", snapshot.balanced);
    print_traversals(&snapshot.traversals, Order::All);
}

#[instrument(skip(style))]
fn _demo(config: DemoConfig, style: DisplayStyle) -> CliResult<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let report = DemoService::new(config).run(&mut rng)?;

    output::action("Random values", &format!("{:?}", report.values));
    print_snapshot("Initial tree", &report.initial, style);

    output::header("After random inserts");
    output::action("Inserted", &format!("{:?}", report.inserted));
    output::info(&render(&report.unbalanced, style));
    output::balanced("Balanced", report.balanced_after_inserts);

    print_snapshot("Rebalanced tree", &report.rebalanced, style);
    Ok(())
}

#[instrument]
fn _show(values: &[String], style: DisplayStyle) -> CliResult<()> {
    let tree = build_tree(values)?;
    output::info(&render(&tree, style));
    Ok(())
}

#[instrument]
fn _traverse(values: &[String], order: Order) -> CliResult<()> {
    let tree = build_tree(values)?;
    print_traversals(&Traversals::of(&tree), order);
    Ok(())
}

#[instrument]
fn _stats(values: &[String]) -> CliResult<()> {
    let tree = build_tree(values)?;
    let stats = TreeStats::of(&tree);
    let or_none = |v: Option<i64>| v.map_or_else(|| "-".to_string(), |v| v.to_string());

    output::action("Size", &stats.len);
    output::action("Height", &stats.height);
    output::action("Min", &or_none(stats.min));
    output::action("Max", &or_none(stats.max));
    output::balanced("Balanced", stats.balanced);
    Ok(())
}

#[instrument]
fn _edit(values: &[String], plan: &EditPlan<i64>, style: DisplayStyle) -> CliResult<()> {
    let mut tree = build_tree(values)?;
    let outcome = plan.apply(&mut tree);

    for value in &outcome.inserted {
        output::diff_add(value);
    }
    for value in &outcome.deleted {
        output::diff_remove(value);
    }
    for value in &outcome.duplicates {
        output::warning(&format!("{value} already present, not inserted"));
    }
    for value in &outcome.missing {
        output::warning(&format!("{value} not present, not deleted"));
    }
    if outcome.rebalanced {
        output::detail("rebalanced");
    }

    output::info(&render(&tree, style));
    output::balanced("Balanced", tree.is_balanced());
    Ok(())
}

#[instrument]
fn _find(key: i64, values: &[String]) -> CliResult<()> {
    let tree = build_tree(values)?;
    let node = tree
        .find(&key)
        .ok_or_else(|| CliError::NotFound(key.to_string()))?;

    output::action("Value", &node.value);
    output::action("Height", &OrderedTree::height_of(Some(node)));
    let depth = tree.depth(Some(node)).map_or_else(|| "-".to_string(), |d| d.to_string());
    output::action("Depth", &depth);
    Ok(())
}

fn _config(settings: &Settings) -> CliResult<()> {
    output::info(settings.to_toml()?.trim_end());
    Ok(())
}
