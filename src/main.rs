mod cli;
mod config;
mod display;
mod error;
mod models;
mod parser;
mod renderer;

use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "correlator-writer")]
#[command(about = "Generate C++ setup code for Rivet Correlator objects", long_about = None)]
struct Cli {
    /// Interactive mode: read `:command [argument]` lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Generate indexed correlators (`Correlator name(index);`)
    #[arg(long)]
    indexed: bool,

    /// Never style help output
    #[arg(long)]
    no_color: bool,

    /// Log diagnostics to stderr (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// NAME [INDEX] COLL_SYSTEM_AND_ENERGY CENTRALITY TRIGGER_RANGE ASSOCIATED_RANGE AZIMUTHAL_RANGE COMMENT
    #[arg(
        value_name = "VALUES",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        conflicts_with = "interactive"
    )]
    values: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::from_flags(cli.indexed, cli.no_color);

    let result = if cli.interactive {
        info!(variant = ?config.variant, "Starting interactive session");
        cli::interactive::run(&config)
    } else {
        info!(variant = ?config.variant, "Rendering from arguments");
        cli::batch::run(&config, &cli.values)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
