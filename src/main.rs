use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use log::{info, warn};
use rayon::prelude::*;

use count_ncdags::edges::parse_edges_string;
use count_ncdags::{count_sequence, coverage, CoverageReport, Graph, SdpError, SdpReader};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(
    help_template = " {author-with-newline} {about-section}Version: {version} \n\n {usage-heading} {usage} \n {all-args} {tab}"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// (Optional) Number of threads to spawn (default: 1).
    #[arg(short, long, global = true)]
    num_threads: Option<usize>,

    /// Log more details (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the number of noncrossing acyclic digraphs on 1, 2, ..., N points.
    Count {
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        n: u64,
    },

    /// Bound the recall of a noncrossing grammar on graphs read from SDP 2015 files.
    Coverage {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Coverage of a single graph given on the command line.
    Edges {
        /// Number of nodes.
        #[arg(long)]
        nodes: usize,

        /// Edges as pairs of integers between quotation marks. E.g. "(0,1), (1,2), (3,1)".
        #[arg(short, long)]
        edges: String,
    },
}

fn log_level(args: &Args) -> simplelog::LevelFilter {
    if args.quiet {
        return simplelog::LevelFilter::Error;
    }
    match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    }
}

fn inspect(graph: &Graph, covered: u32) {
    if covered as usize == graph.num_edges() {
        return;
    }
    if graph.num_nodes() < 5 && graph.is_noncrossing() {
        warn!("graph {} is noncrossing but cannot be covered", graph.id());
        for edge in graph.edges() {
            warn!("  {}", edge);
        }
    }
}

fn coverage_of_file(path: &Path) -> Result<CoverageReport, SdpError> {
    info!("reading {}", path.display());
    SdpReader::open(path)?
        .par_bridge()
        .map(|graph| -> Result<CoverageReport, SdpError> {
            let graph = graph?;
            let covered = coverage(&graph);
            inspect(&graph, covered);
            Ok(CoverageReport::for_graph(&graph, covered))
        })
        .try_reduce(CoverageReport::default, |a, b| Ok(a.merge(b)))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    simplelog::TermLogger::init(
        log_level(&args),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let num_threads = args.num_threads.unwrap_or(1);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    match args.command {
        Command::Count { n } => {
            let counts: Vec<String> = count_sequence(n as usize)
                .iter()
                .map(|c| c.to_string())
                .collect();
            println!("{}", counts.join(","));
        }
        Command::Coverage { paths } => {
            let mut report = CoverageReport::default();
            for path in paths.iter() {
                report = report.merge(coverage_of_file(path)?);
            }
            info!(
                "{} of {} edges covered, {} of {} graphs covered",
                report.num_edges_covered, report.num_edges, report.num_graphs_covered, report.num_graphs
            );
            eprintln!("{}", report);
        }
        Command::Edges { nodes, edges } => match parse_edges_string(&edges) {
            Err(err) => {
                eprintln!(
                    "{} {} Example usage: {} edges --nodes 3 --edges '(0,1), (1,2)'",
                    "error".red().bold(),
                    err,
                    env!("CARGO_PKG_NAME")
                );
                std::process::exit(2);
            }
            Ok(pairs) => {
                let graph = Graph::from_pairs("command line", nodes, &pairs)?;
                let covered = coverage(&graph);
                let result = format!("{} / {}", covered, graph.num_edges());
                if covered as usize == graph.num_edges() {
                    println!("Result: {}", result.green().bold());
                } else {
                    println!("Result: {}", result.bold());
                }
            }
        },
    }

    Ok(())
}
