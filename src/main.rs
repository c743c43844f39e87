use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use arbor::{AvlTree, Position};

#[derive(Parser, Debug)]
#[command(name = "arbor", about = "Height-balanced search tree driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a tree from a key sequence and print one traversal of it.
    Traverse {
        /// Keys inserted left to right.
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<i64>,
        /// Traversal order to print.
        #[arg(long, value_enum, default_value = "inorder")]
        order: Order,
        /// Keys removed after all inserts, left to right.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        remove: Vec<i64>,
    },
    /// Build a tree from a key sequence and trace one lookup through it.
    Search {
        /// Keys inserted left to right.
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<i64>,
        /// Key to look up.
        #[arg(long, allow_negative_numbers = true)]
        target: i64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Order {
    /// Ascending key order.
    Inorder,
    /// Structural order, parents before children.
    Preorder,
    /// Children before parents.
    Postorder,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Traverse {
            keys,
            order,
            remove,
        } => run_traverse(&keys, order, &remove),
        Commands::Search { keys, target } => run_search(&keys, target),
    }
}

fn run_traverse(keys: &[i64], order: Order, remove: &[i64]) -> Result<()> {
    let mut tree = build_tree(keys);
    for &key in remove {
        tree.remove(key);
    }

    let sequence = match order {
        Order::Inorder => tree.inorder(),
        Order::Preorder => tree.preorder(),
        Order::Postorder => tree.postorder(),
    };

    println!("height={}", tree.height());
    println!("{}", format_keys(&sequence));
    Ok(())
}

fn run_search(keys: &[i64], target: i64) -> Result<()> {
    let tree = build_tree(keys);
    let path = tree.search_path(target);

    for step in &path {
        let position = match step.position {
            Position::Root => "root",
            Position::Left => "left",
            Position::Right => "right",
        };
        println!("{}\t{}", step.key, position);
    }

    if path.last().is_some_and(|step| step.key == target) {
        println!("found {} after {} steps", target, path.len());
    } else {
        println!("{} not present ({} nodes examined)", target, path.len());
    }
    Ok(())
}

fn build_tree(keys: &[i64]) -> AvlTree {
    let mut tree = AvlTree::new();
    for &key in keys {
        tree.insert(key);
    }
    tree
}

fn format_keys(keys: &[i64]) -> String {
    let rendered: Vec<String> = keys.iter().map(i64::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
