mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "uscs",
    version,
    about = "ASTM D2487 (USCS) soil classification tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a soil sample from sieve, Atterberg and gradation data
    Classify {
        /// Sample form JSON file (instead of the measurement flags)
        input_file: Option<PathBuf>,

        #[command(flatten)]
        sample: SampleArgs,

        /// Refuse to classify coarse soils with <= 12% fines without Cu/Cc
        #[arg(long)]
        strict_gradation: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show the decision steps behind the classification
        #[arg(long)]
        verbose: bool,
    },
    /// Check whether an (LL, PI) point plots above the U-Line
    Check {
        /// Liquid limit
        #[arg(long, value_parser = parse_decimal_arg)]
        ll: Decimal,

        /// Plasticity index, or "NP" (default: NP)
        #[arg(long, conflicts_with = "pl")]
        pi: Option<String>,

        /// Plastic limit; PI is computed as LL - PL
        #[arg(long, value_parser = parse_decimal_arg)]
        pl: Option<Decimal>,
    },
    /// Compute plasticity chart geometry for a sample
    Chart {
        /// Liquid limit
        #[arg(long, value_parser = parse_decimal_arg)]
        ll: Decimal,

        /// Plasticity index, or "NP" (default: NP)
        #[arg(long, conflicts_with = "pl")]
        pi: Option<String>,

        /// Plastic limit; PI is computed as LL - PL
        #[arg(long, value_parser = parse_decimal_arg)]
        pl: Option<Decimal>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List the USCS group symbols and their base names
    Symbols,
    /// Print the ordered decision rules
    Rules,
}

/// Measurement flags for `classify`.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Percent passing No. 200 sieve
    #[arg(long, value_parser = parse_decimal_arg)]
    pub p200: Option<Decimal>,

    /// Percent passing No. 4 sieve
    #[arg(long, value_parser = parse_decimal_arg)]
    pub p4: Option<Decimal>,

    /// Liquid limit
    #[arg(long, value_parser = parse_decimal_arg)]
    pub ll: Option<Decimal>,

    /// Plasticity index, or "NP" (default: NP)
    #[arg(long, conflicts_with = "pl")]
    pub pi: Option<String>,

    /// Plastic limit; PI is computed as LL - PL
    #[arg(long, value_parser = parse_decimal_arg)]
    pub pl: Option<Decimal>,

    /// Oven-dried liquid limit, for the organic check
    #[arg(long = "ll-oven", value_parser = parse_decimal_arg)]
    pub ll_oven: Option<Decimal>,

    /// Coefficient of uniformity
    #[arg(long, value_parser = parse_decimal_arg, requires = "cc", conflicts_with_all = ["d10", "d30", "d60"])]
    pub cu: Option<Decimal>,

    /// Coefficient of curvature
    #[arg(long, value_parser = parse_decimal_arg, requires = "cu")]
    pub cc: Option<Decimal>,

    /// D10 grain size in mm
    #[arg(long, value_parser = parse_decimal_arg, requires_all = ["d30", "d60"])]
    pub d10: Option<Decimal>,

    /// D30 grain size in mm
    #[arg(long, value_parser = parse_decimal_arg, requires_all = ["d10", "d60"])]
    pub d30: Option<Decimal>,

    /// D60 grain size in mm
    #[arg(long, value_parser = parse_decimal_arg, requires_all = ["d10", "d30"])]
    pub d60: Option<Decimal>,
}

fn parse_decimal_arg(s: &str) -> Result<Decimal, String> {
    uscs_core::parsing::values::parse_decimal(s).map_err(|e| e.to_string())
}

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            input_file,
            sample,
            strict_gradation,
            output,
            verbose,
        } => commands::classify::run(input_file, sample, strict_gradation, &output, verbose),
        Commands::Check { ll, pi, pl } => commands::check::run(ll, pi, pl),
        Commands::Chart {
            ll,
            pi,
            pl,
            output,
        } => commands::chart::run(ll, pi, pl, &output),
        Commands::Symbols => commands::reference::symbols(),
        Commands::Rules => commands::reference::rules(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
