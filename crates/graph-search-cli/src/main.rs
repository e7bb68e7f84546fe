use std::{error::Error, fs, path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use graph_search::{
    EdgeKind, Graph,
    algorithms::{Bfs, Dfs},
    builder::GraphBuilder,
    input::edgelist::EdgeList,
};
use log::{error, info};

#[derive(Parser)]
#[command(name = "graph-search", about = "Run BFS/DFS on a graph read from an edge list")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct GraphArgs {
    /// Edge list, one `u v` pair per line; `n <count>` sets the vertex count.
    in_file: PathBuf,

    /// Insert every edge in both directions.
    #[arg(short, long)]
    undirected: bool,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Print the adjacency lists.
    Print {
        #[command(flatten)]
        graph: GraphArgs,
    },
    Bfs {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start vertex.
        #[arg(short, long, value_name = "ID")]
        source: usize,

        /// Print the BFS-tree path to <ID> instead of all records.
        #[arg(short, long, value_name = "ID")]
        path: Option<usize>,

        /// Print records as JSON.
        #[arg(short, long)]
        json: bool,
    },
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,

        /// Print records as JSON.
        #[arg(short, long)]
        json: bool,
    },
}

fn load(args: &GraphArgs) -> Result<Graph, Box<dyn Error>> {
    info!("Build graph from {:?}", args.in_file);
    let text = fs::read_to_string(&args.in_file)?;
    let edges: EdgeList = text.parse()?;
    let kind = if args.undirected {
        EdgeKind::Undirected
    } else {
        EdgeKind::Directed
    };

    let graph = GraphBuilder::new().edge_list(edges).kind(kind).build()?;
    info!(
        "Loaded graph: {} vertices, {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );

    Ok(graph)
}

fn print_records(graph: &Graph, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        let records: Vec<_> = graph.records().collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        graph.records().for_each(|record| println!("{}", record));
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Print { graph } => {
            print!("{}", load(&graph)?);
        }
        Commands::Bfs {
            graph,
            source,
            path,
            json,
        } => {
            let mut graph = load(&graph)?;
            graph.bfs(source)?;

            match path {
                Some(target) => match graph.path_to(target)? {
                    Some(path) => println!(
                        "{}",
                        path.iter()
                            .map(|v| v.to_string())
                            .collect::<Vec<_>>()
                            .join(" -> ")
                    ),
                    None => println!("vertex {} is not reachable from {}", target, source),
                },
                None => print_records(&graph, json)?,
            }
        }
        Commands::Dfs { graph, json } => {
            let mut graph = load(&graph)?;
            graph.dfs();
            print_records(&graph, json)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
