mod batch;
mod config;
mod discovery;
mod error;
mod output;
mod parse;

use clap::Parser;
use ranktau_core::pearson;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::discovery::DEFAULT_INFIX;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "ranktau", version, about = "Rank correlation between master and student rankings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Kendall's tau for every matched master/student file pair, plus the average
    Tau(TauArgs),
    /// Pearson correlation between two ranking files
    Pearson(PearsonArgs),
    /// Create a default config file at ~/.config/ranktau/config.toml
    Init {
        /// Where to write the config (default: ~/.config/ranktau/config.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Parser)]
struct TauArgs {
    /// Master source prefix, e.g. runs/master matches runs/master_rankings_*
    master: String,

    /// Student source prefix, e.g. runs/student matches runs/student_rankings_*
    student: String,

    /// Fragment between prefix and pair index (default: "_rankings_")
    #[arg(long)]
    infix: Option<String>,

    /// Output JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Log discovery and per-pair counts to stderr, and name files in the report
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/ranktau/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser)]
struct PearsonArgs {
    /// First ranking file
    file_a: PathBuf,

    /// Second ranking file
    file_b: PathBuf,

    /// Output JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Log file loading to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tau(args) => run_tau(args),
        Commands::Pearson(args) => run_pearson(args),
        Commands::Init { config } => {
            let path = config.unwrap_or_else(config::config_path);
            config::create_default_config(&path);
            println!("Created config at {}", path.display());
            println!("Edit it to set your default infix and output format.");
        }
    }
}

fn run_tau(args: TauArgs) {
    init_logging(args.verbose);

    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);
    debug!("Config: {} -> {:?}", config_path.display(), cfg);

    let infix = args.infix.clone().or(cfg.infix).unwrap_or_else(|| DEFAULT_INFIX.to_string());
    let json = args.json || cfg.json.unwrap_or(false);

    let pairs = batch::discover_pairs(&args.master, &args.student, &infix).unwrap_or_else(|e| bail(e));
    info!("Comparing {} matched pair(s)", pairs.len());

    let report = batch::run_batch(&pairs).unwrap_or_else(|e| bail(e));

    let text = if json {
        output::format_tau_json(&report).unwrap_or_else(|e| bail(format!("Failed to serialize report: {e}")))
    } else if args.verbose {
        output::format_tau_verbose(&report)
    } else {
        output::format_tau_text(&report)
    };
    println!("{text}");
}

fn run_pearson(args: PearsonArgs) {
    init_logging(args.verbose);

    let a = parse::load_ranking(&args.file_a).unwrap_or_else(|e| bail(e));
    let b = parse::load_ranking(&args.file_b).unwrap_or_else(|e| bail(e));
    debug!("Loaded {} and {} ranks", a.len(), b.len());

    let r = pearson(&a, &b).unwrap_or_else(|e| {
        bail(format!("{} vs {}: {e}", args.file_a.display(), args.file_b.display()))
    });

    let text = if args.json {
        output::format_pearson_json(
            &args.file_a.display().to_string(),
            &args.file_b.display().to_string(),
            r,
        )
        .unwrap_or_else(|e| bail(format!("Failed to serialize report: {e}")))
    } else {
        output::format_pearson_text(r)
    };
    println!("{text}");
}
