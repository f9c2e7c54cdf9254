//! BlueGraph CLI — render knowledge graphs from the command line
//!
//! Plays the host role: picks the graph, writes the HTML artifact, prints the
//! statistics panel.

use anyhow::Context;
use bluegraph::stats::{EdgeRow, NodeRow};
use bluegraph::{
    embed_fragment, load_graph, render_graph_file, GraphStatistics, RenderOptions, VizConfig,
    VizError,
};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::{Path, PathBuf};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "bluegraph", version, about = "Knowledge graph visualizer")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "BLUEGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the interactive HTML view of a graph
    Render {
        /// GraphML file or working directory
        path: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Canvas height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Disable the force simulation
        #[arg(long)]
        no_physics: bool,

        #[arg(long)]
        spring_length: Option<f64>,

        #[arg(long)]
        central_gravity: Option<f64>,

        /// Wrap the page in a framed fragment for embedding
        #[arg(long)]
        fragment: bool,
    },
    /// Print graph statistics
    Stats {
        /// GraphML file or working directory
        path: PathBuf,

        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Print the render scene as JSON
    Scene {
        /// GraphML file or working directory
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::INFO } else { Level::WARN })
        .init();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<VizError>() {
            Some(err) => {
                let report = err.report();
                eprintln!("Error: {}", report.message);
                eprintln!("{}", report.detail);
            }
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => VizConfig::from_yaml_file(path)?,
        None => VizConfig::default(),
    };

    match cli.command {
        Commands::Render {
            path,
            out,
            height,
            no_physics,
            spring_length,
            central_gravity,
            fragment,
        } => {
            let mut options = config.render.clone();
            if let Some(height) = height {
                options.height = height;
            }
            if no_physics {
                options.physics = false;
            }
            if let Some(spring_length) = spring_length {
                options.spring_length = spring_length;
            }
            if let Some(central_gravity) = central_gravity {
                options.central_gravity = central_gravity;
            }
            run_render(&resolve_graph_path(&path, &config), &options, out, fragment)
        }
        Commands::Stats { path, format } => {
            run_stats(&resolve_graph_path(&path, &config), &format)
        }
        Commands::Scene { path } => {
            let view = render_graph_file(resolve_graph_path(&path, &config), &config.render)?;
            println!("{}", serde_json::to_string_pretty(&view.scene)?);
            Ok(())
        }
    }
}

/// A directory stands for the graph file the indexer keeps inside it
fn resolve_graph_path(path: &Path, config: &VizConfig) -> PathBuf {
    if path.is_dir() {
        config.graph_path(path)
    } else {
        path.to_path_buf()
    }
}

fn run_render(
    path: &Path,
    options: &RenderOptions,
    out: Option<PathBuf>,
    fragment: bool,
) -> anyhow::Result<()> {
    let view = render_graph_file(path, options)?;
    let html = if fragment {
        embed_fragment(&view.html, options.height)
    } else {
        view.html
    };

    match out {
        Some(out) => {
            std::fs::write(&out, html)
                .with_context(|| format!("cannot write {}", out.display()))?;
            info!("Wrote {}", out.display());
            println!(
                "{} nodes, {} edges -> {}",
                view.statistics.node_count,
                view.statistics.edge_count,
                out.display()
            );
        }
        None => println!("{}", html),
    }

    Ok(())
}

fn run_stats(path: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    let stats = GraphStatistics::compute(&graph);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Csv => {
            println!("entity_type,count");
            for bucket in &stats.type_distribution {
                println!("{},{}", csv_cell(&bucket.entity_type), bucket.count);
            }
            println!();
            println!("id,entity_type,description");
            for row in &stats.nodes {
                println!(
                    "{},{},{}",
                    csv_cell(&row.id),
                    csv_cell(&row.entity_type),
                    csv_cell(&row.description)
                );
            }
            println!();
            println!("source,target,weight,description");
            for row in &stats.edges {
                println!(
                    "{},{},{},{}",
                    csv_cell(&row.source),
                    csv_cell(&row.target),
                    csv_cell(&row.weight),
                    csv_cell(&row.description)
                );
            }
        }
        OutputFormat::Table => {
            println!("Nodes: {}", stats.node_count);
            println!("Edges: {}", stats.edge_count);

            let mut types = Table::new();
            types.set_content_arrangement(ContentArrangement::Dynamic);
            types.set_header(vec!["Entity type", "Count"]);
            for bucket in &stats.type_distribution {
                types.add_row(vec![bucket.entity_type.clone(), bucket.count.to_string()]);
            }
            println!("{}", types);

            println!("{}", node_table(&stats.nodes));
            println!("{}", edge_table(&stats.edges));
        }
    }

    Ok(())
}

fn node_table(rows: &[NodeRow]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Entity", "Type", "Description"]);
    for row in rows {
        table.add_row(vec![
            row.id.clone(),
            row.entity_type.clone(),
            row.description.clone(),
        ]);
    }
    table
}

fn edge_table(rows: &[EdgeRow]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Source", "Target", "Weight", "Description"]);
    for row in rows {
        table.add_row(vec![
            row.source.clone(),
            row.target.clone(),
            row.weight.clone(),
            row.description.clone(),
        ]);
    }
    table
}

fn csv_cell(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
