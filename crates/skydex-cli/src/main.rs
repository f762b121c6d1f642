use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use skydex_core::{ingest_file, strip_wrapping_quotes, AirportIndex, Config, SearchOutcome};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "skydex")]
#[command(about = "Airport delay statistics explorer")]
struct Cli {
    /// Log level filter when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu over the ingested data
    Menu {
        #[arg(short, long, default_value = "airlines.csv")]
        data: PathBuf,
    },

    /// Print the per-airport delay report and exit
    Report {
        #[arg(short, long, default_value = "airlines.csv")]
        data: PathBuf,
    },

    /// Search for one airport and exit
    Search {
        #[arg(short, long, default_value = "airlines.csv")]
        data: PathBuf,

        /// Airport code to look up, exactly as it appears in the data
        code: String,

        #[arg(short, long, default_value = "both")]
        strategy: Strategy,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Bfs,
    Dfs,
    Both,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    match cli.command {
        Commands::Menu { data } => run_menu(data),
        Commands::Report { data } => run_report(data),
        Commands::Search {
            data,
            code,
            strategy,
        } => run_search(data, &code, strategy),
    }
}

fn load_index(data: PathBuf) -> Result<AirportIndex> {
    let config = Config::new(data);
    let mut index = AirportIndex::new();

    let stats = ingest_file(&mut index, &config)
        .with_context(|| format!("Failed to load delay data from {}", config.data_path.display()))?;

    println!(
        "Loaded {} rows covering {} airports from {}",
        stats.rows,
        stats.airports,
        config.data_path.display()
    );
    Ok(index)
}

fn run_report(data: PathBuf) -> Result<()> {
    let index = load_index(data)?;
    print_report(&index);
    Ok(())
}

fn run_search(data: PathBuf, code: &str, strategy: Strategy) -> Result<()> {
    let index = load_index(data)?;

    match strategy {
        Strategy::Bfs => search_bfs(&index, code),
        Strategy::Dfs => search_dfs(&index, code),
        Strategy::Both => {
            search_bfs(&index, code);
            search_dfs(&index, code);
        }
    }
    Ok(())
}

fn run_menu(data: PathBuf) -> Result<()> {
    let index = load_index(data)?;

    let mut rl = DefaultEditor::new()?;

    println!();
    print_menu();

    loop {
        let readline = rl.readline("skydex> ");

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line)?;

                if line == "quit" || line == "exit" || line == "5" {
                    break;
                }

                if let Err(e) = handle_menu_command(&index, &mut rl, line) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    println!("Goodbye");
    Ok(())
}

fn print_menu() {
    println!("Airport delay statistics");
    println!("  1. report   per-airport delay report");
    println!("  2. bfs      breadth-first airport search");
    println!("  3. dfs      depth-first airport search");
    println!("  4. both     run both searches");
    println!("  5. quit");
    println!("Also: codes, airlines, help");
    println!();
}

fn handle_menu_command(index: &AirportIndex, rl: &mut DefaultEditor, line: &str) -> Result<()> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(());
    }

    match parts[0] {
        "1" | "report" => {
            print_report(index);
        }

        "2" | "bfs" => {
            let code = resolve_code(index, rl, &parts)?;
            search_bfs(index, &code);
        }

        "3" | "dfs" => {
            let code = resolve_code(index, rl, &parts)?;
            search_dfs(index, &code);
        }

        "4" | "both" => {
            let code = resolve_code(index, rl, &parts)?;
            search_bfs(index, &code);
            search_dfs(index, &code);
        }

        "codes" => {
            print_codes(index);
        }

        "airlines" => {
            print_airline_totals(index);
        }

        "help" | "menu" => {
            print_menu();
        }

        _ => {
            anyhow::bail!("Unknown command: {} (try help)", parts[0]);
        }
    }

    Ok(())
}

/// Takes the code from the command line when given, otherwise lists the known
/// airports and prompts for one.
fn resolve_code(index: &AirportIndex, rl: &mut DefaultEditor, parts: &[&str]) -> Result<String> {
    if parts.len() >= 2 {
        return Ok(parts[1].to_string());
    }

    print_codes(index);
    let line = rl.readline("airport code> ")?;
    let code = line.trim().to_string();

    if code.is_empty() {
        anyhow::bail!("No airport code given");
    }
    Ok(code)
}

fn print_report(index: &AirportIndex) {
    let start = Instant::now();

    for entry in index.in_order_report() {
        println!("{}", entry);
        println!();
    }

    println!("Execution time: {} microseconds", start.elapsed().as_micros());
}

fn print_codes(index: &AirportIndex) {
    let codes: Vec<&str> = index.codes_in_order().collect();
    println!("Airports ({}): {}", codes.len(), codes.join(" "));
}

fn print_airline_totals(index: &AirportIndex) {
    for (airline, minutes) in index.total_minutes_by_airline() {
        println!("{}: {} minutes delayed", strip_wrapping_quotes(&airline), minutes);
    }
}

fn search_bfs(index: &AirportIndex, code: &str) {
    let start = Instant::now();
    let outcome = index.search_breadth_first(code);
    let elapsed = start.elapsed();

    print_outcome("BFS", &outcome);
    println!("Execution time: {} microseconds", elapsed.as_micros());
}

fn search_dfs(index: &AirportIndex, code: &str) {
    let start = Instant::now();
    let outcome = index.search_depth_first(code);
    let elapsed = start.elapsed();

    print_outcome("DFS", &outcome);
    println!("Execution time: {} microseconds", elapsed.as_micros());
}

fn print_outcome(label: &str, outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Found {
            code,
            total_minutes,
        } => {
            println!("{} found {}: {} total minutes delayed", label, code, total_minutes);
        }
        SearchOutcome::NotFound { code } => {
            println!("{}: {} not found", label, code);
        }
    }
}
