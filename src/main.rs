use clap::Parser;
use log::{error, info};
use minefield::config::Config;
use minefield::layout::{format_grid, Layout};
use minefield::{AStarPathFinder, Heuristic, SearchOutcome, VisitLog};
use serde::Serialize;
use std::io::Write;
use std::process::ExitCode;

/// Shortest path across a landmine grid using A*
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Grid layout file (overrides [grid] layout_path)
    #[arg(short, long)]
    layout: Option<String>,

    /// Heuristic: Chebyshev, Euclidean or Manhattan (overrides [search] heuristic)
    #[arg(long)]
    heuristic: Option<String>,

    /// Depth budget (overrides [search] max_search_distance)
    #[arg(long)]
    max_search_distance: Option<u32>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    heuristic: &'a str,
    outcome: minefield::SearchState,
    path: Option<&'a minefield::Path>,
    stats: &'a minefield::SearchStats,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> minefield::Result<()> {
    let mut config = Config::load(&args.config);
    if let Some(layout) = &args.layout {
        config.grid.layout_path = layout.clone();
    }
    if let Some(heuristic) = &args.heuristic {
        config.search.heuristic = heuristic.clone();
    }
    if let Some(budget) = args.max_search_distance {
        config.search.max_search_distance = budget;
    }

    let layout = Layout::load(&config.grid.layout_path)?;
    let (width, height) = layout.grid.bounds();
    info!(
        "Loaded {}x{} grid with {} landmines from {}",
        width,
        height,
        layout.grid.blocked_count(),
        config.grid.layout_path
    );

    let heuristic: Heuristic = config.search.heuristic();
    let start = layout.start_or_default();
    let goal = layout.goal_or_default();

    let finder = AStarPathFinder::new(&layout.grid, config.search.max_search_distance)?;
    let mut visits = VisitLog::new();
    let outcome = finder.find_path_observed(start, goal, heuristic, &mut visits)?;

    if let Some(path) = &config.logging.visit_log_path {
        visits.save_to_file(path)?;
        info!("Saved visit log to {} ({})", path, visits.summary());
    }

    if args.json {
        let report = Report {
            heuristic: heuristic.name(),
            outcome: outcome.state(),
            path: outcome.path(),
            stats: outcome.stats(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &outcome {
        SearchOutcome::Found { path, stats } => {
            if config.logging.show_grid {
                print!("{}", format_grid(&layout.grid, Some(start), Some(goal), Some(path)));
            }
            println!("Path: {}", path);
            println!(
                "Total time taken (# of nodes): {}, {} ms, {} expanded",
                path.len(),
                path.runtime_millis(),
                stats.expanded
            );
        }
        SearchOutcome::NoPathFound { stats } => {
            if config.logging.show_grid {
                print!("{}", format_grid(&layout.grid, Some(start), Some(goal), None));
            }
            println!(
                "Path not found after expanding {} nodes. Try reducing the landmine count!",
                stats.expanded
            );
        }
    }

    Ok(())
}
