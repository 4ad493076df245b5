//! CLI entry point for the semnet semantic network engine.
//!
//! Reads a graph snapshot as JSON (stdin, or `--input`), runs one
//! operation, and writes a JSON result to stdout. Logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use semnet_core::types::{Fact, GraphSnapshot};
use semnet_core::NetConfig;
use semnet_graph::{
    find_all_conflicts, incoming_with_relation, inherit_properties, inherit_to_fixed_point,
    neighbors_with_relation, nodes_of_kind, SemanticNet,
};

#[derive(Parser)]
#[command(name = "semnet")]
#[command(about = "Semantic network inference and conflict detection")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Read the graph snapshot from this file instead of stdin.
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Config file prefix (default: semnet).
    #[arg(short, long, default_value = "semnet", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// Inherit properties along is-a edges.
    Infer {
        /// Relation to inherit (repeatable). Defaults to the configured list.
        #[arg(short, long = "relation")]
        relations: Vec<String>,
        /// Number of passes (at least 1); values above 1 stop early at a fixed point.
        #[arg(
            long,
            default_value_t = 1,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        rounds: usize,
    },
    /// Report sources with several targets for a relation.
    Conflicts {
        /// Relation to scan (repeatable). Defaults to the configured list.
        #[arg(short, long = "relation")]
        relations: Vec<String>,
    },
    /// Targets of a node's outgoing edges with the given relation.
    Neighbors {
        #[arg(long)]
        node: String,
        #[arg(long)]
        relation: String,
    },
    /// Sources of a node's incoming edges with the given relation.
    Incoming {
        #[arg(long)]
        node: String,
        #[arg(long)]
        relation: String,
    },
    /// Nodes with the given kind.
    Kind {
        #[arg(long)]
        kind: String,
    },
    /// Normalize the snapshot through the store and print it back.
    Snapshot,
}

#[derive(Serialize)]
struct InferOutput {
    new_facts: Vec<Fact>,
    rounds: usize,
    converged: bool,
    graph: GraphSnapshot,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = NetConfig::load(&cli.config)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    tracing::debug!(
        config_prefix = %cli.config,
        log_level = %config.log_level,
        property_relations = ?config.inference.property_relations,
        max_rounds = config.inference.max_rounds,
        conflict_relations = ?config.conflicts.relations,
        "Effective configuration"
    );

    let snapshot = read_snapshot(cli.input.as_ref())?;
    let mut net = SemanticNet::from_snapshot(snapshot);
    tracing::info!(
        nodes = net.node_count(),
        edges = net.edge_count(),
        "Graph loaded"
    );

    match cli.command {
        Command::Infer { relations, rounds } => {
            let relations = or_configured(relations, &config.inference.property_relations);
            let output = run_infer(&mut net, &relations, rounds);
            println!("{}", serde_json::to_string(&output)?);
        }
        Command::Conflicts { relations } => {
            let relations = or_configured(relations, &config.conflicts.relations);
            let found = find_all_conflicts(&net, relations.as_slice());
            println!("{}", serde_json::to_string(&found)?);
        }
        Command::Neighbors { node, relation } => {
            let names = neighbors_with_relation(&net, &node, &relation);
            println!("{}", serde_json::to_string(&names)?);
        }
        Command::Incoming { node, relation } => {
            let names = incoming_with_relation(&net, &node, &relation);
            println!("{}", serde_json::to_string(&names)?);
        }
        Command::Kind { kind } => {
            let names = nodes_of_kind(&net, &kind);
            println!("{}", serde_json::to_string(&names)?);
        }
        Command::Snapshot => {
            println!("{}", net.snapshot().to_json()?);
        }
    }

    Ok(())
}

fn run_infer(net: &mut SemanticNet, relations: &[String], rounds: usize) -> InferOutput {
    if rounds == 1 {
        let new_facts = inherit_properties(net, relations);
        return InferOutput {
            converged: new_facts.is_empty(),
            new_facts,
            rounds: 1,
            graph: net.snapshot(),
        };
    }

    let run = inherit_to_fixed_point(net, relations, rounds);
    InferOutput {
        new_facts: run.new_facts,
        rounds: run.rounds,
        converged: run.converged,
        graph: net.snapshot(),
    }
}

fn read_snapshot(input: Option<&PathBuf>) -> anyhow::Result<GraphSnapshot> {
    let snapshot = match input {
        Some(path) => GraphSnapshot::read_file(path)?,
        None => {
            let json = std::io::read_to_string(std::io::stdin())?;
            if json.trim().is_empty() {
                GraphSnapshot::default()
            } else {
                GraphSnapshot::from_json(&json)?
            }
        }
    };
    Ok(snapshot)
}

fn or_configured(given: Vec<String>, configured: &[String]) -> Vec<String> {
    if given.is_empty() {
        configured.to_vec()
    } else {
        given
    }
}
