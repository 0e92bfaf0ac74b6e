//! Graphmaster CLI - Gene Ontology graph queries from the command line.
//!
//! Loads an OBO ontology plus optional GAF annotation files, then runs one
//! query against the combined graph.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use graphmaster::Direction;
use graphmaster_go::LoaderConfig;
use tracing_subscriber::EnvFilter;

mod cli;

/// Graphmaster: Gene Ontology graph queries.
#[derive(Parser)]
#[command(name = "graphmaster")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// YAML loader configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// OBO ontology file (overrides the configuration)
    #[arg(short, long, global = true)]
    ontology: Option<PathBuf>,

    /// GAF annotation file; repeat for several (replaces configured files)
    #[arg(short, long, global = true)]
    annotations: Vec<PathBuf>,

    /// Relation kind loaded as an ontology edge; repeat for several
    #[arg(long = "relation", global = true)]
    relations: Vec<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show ontology and annotation statistics
    Stats,

    /// List GO terms annotated to a gene product
    Terms {
        /// Gene product id (e.g., "O05154")
        gene_product: String,

        /// Include every ancestor of the annotated terms
        #[arg(short, long)]
        recursive: bool,
    },

    /// List gene products annotated with a GO term
    Products {
        /// GO term id; alternate ids are accepted
        term: String,

        /// Include products annotated with descendant terms
        #[arg(short, long)]
        recursive: bool,
    },

    /// Show every node reachable from a node
    Reachable {
        /// Start node id
        id: String,

        /// Edge direction to follow ("out" toward parents, "in" toward children)
        #[arg(short, long, default_value = "out")]
        direction: Direction,

        /// List the start node itself
        #[arg(long)]
        include_start: bool,
    },

    /// Detect cycles in the graph
    Cycles,

    /// Print nodes in topological order
    Order {
        /// Maximum number of nodes to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Report the longest path length
    Depth {
        /// Measure from this node instead of from every root
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Find a shortest path along outgoing edges
    Path {
        /// Start node id
        from: String,

        /// End node id
        to: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = loader_config(&cli)?;
    let (go, warnings) = graphmaster_go::load(&config).context("failed to load ontology")?;
    if !warnings.is_empty() {
        eprintln!(
            "{}: skipped {} input records (use -v for details)",
            "warning".yellow().bold(),
            warnings.len()
        );
        for warning in &warnings {
            tracing::info!("{warning}");
        }
    }

    let json = cli.json;
    match cli.command {
        Commands::Stats => cli::stats::run(&go, json),
        Commands::Terms {
            gene_product,
            recursive,
        } => cli::terms::run(&go, &gene_product, recursive, json),
        Commands::Products { term, recursive } => cli::products::run(&go, &term, recursive, json),
        Commands::Reachable {
            id,
            direction,
            include_start,
        } => cli::reachable::run(&go, &id, direction, include_start, json),
        Commands::Cycles => cli::cycles::run(&go, json),
        Commands::Order { limit } => cli::order::run(&go, limit, json),
        Commands::Depth { root } => cli::depth::run(&go, root.as_deref(), json),
        Commands::Path { from, to } => cli::path::run(&go, &from, &to, json),
    }
}

/// Start from the configuration file, if any, and apply command-line
/// overrides on top.
fn loader_config(cli: &Cli) -> anyhow::Result<LoaderConfig> {
    let mut config = match &cli.config {
        Some(path) => LoaderConfig::load(path)
            .with_context(|| format!("failed to read configuration {}", path.display()))?,
        None => LoaderConfig::default(),
    };

    if let Some(ontology) = &cli.ontology {
        config.ontology = Some(ontology.clone());
    }
    if !cli.annotations.is_empty() {
        config.annotations.clone_from(&cli.annotations);
    }
    if !cli.relations.is_empty() {
        config.relations.clone_from(&cli.relations);
        config.validate()?;
    }
    if config.ontology.is_none() {
        anyhow::bail!("no ontology file given (use --ontology or set 'ontology' in --config)");
    }
    Ok(config)
}
