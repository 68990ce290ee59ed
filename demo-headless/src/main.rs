use atis_core::reference::ReferenceData;
use atis_core::simulation::{airport_storage_format, write_json_lines};
use atis_core::{
    generate_batch, to_storage_format, AtisError, AtisGenerator, BatchRequest, DifficultyTier,
};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Output format for generated broadcasts
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Broadcast text with a short header per record
    Text,
    /// One storage row per line
    Json,
}

/// ATIS broadcast generator for pilot training
#[derive(Parser, Debug)]
#[command(name = "atis-demo")]
#[command(about = "Generate practice ATIS broadcasts for DACH airports", long_about = None)]
struct Args {
    /// Number of broadcasts to generate
    #[arg(short, long, default_value_t = 5)]
    count: usize,

    /// Base seed (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generate every broadcast at this tier (`super_easy`, `easy`, `medium`, `hard`)
    #[arg(short, long)]
    difficulty: Option<String>,

    /// Restrict to an airport by ICAO code (repeatable)
    #[arg(short, long = "airport")]
    airports: Vec<String>,

    /// Reference data JSON replacing the built-in data set
    #[arg(short, long)]
    reference: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the airport catalog as storage rows and exit
    #[arg(long = "airports")]
    list_airports: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), AtisError> {
    let reference = match &args.reference {
        Some(path) => ReferenceData::from_json_file(path)?,
        None => ReferenceData::builtin(),
    };
    info!(airports = reference.airports.len(), "Reference data loaded");
    let generator = AtisGenerator::new(reference);

    if args.list_airports {
        let rows: Vec<_> = generator
            .reference()
            .airports
            .iter()
            .map(airport_storage_format)
            .collect();
        return write_json_lines(io::stdout().lock(), &rows);
    }

    let now = Utc::now();
    let request = BatchRequest {
        count: args.count,
        seed: args
            .seed
            .unwrap_or_else(|| now.timestamp().unsigned_abs()),
        fixed_tier: args.difficulty.as_deref().map(DifficultyTier::normalize),
        airports: (!args.airports.is_empty()).then(|| args.airports.clone()),
        ..BatchRequest::default()
    };
    let report = generate_batch(&generator, &request, now)?;

    match args.format {
        Format::Text => {
            for (index, record) in report.records.iter().enumerate() {
                println!(
                    "=== {} {} ({}) ===",
                    index + 1,
                    record.airport.icao,
                    record.difficulty
                );
                println!("{}\n", record.full_text);
            }
            println!("=== Distribution (seed {}) ===", request.seed);
            let total = report.records.len().max(1);
            for (tier, count) in report.tier_counts.iter() {
                let share = *count as f64 / total as f64 * 100.0;
                println!("  {tier:<10} {count:>5}  ({share:.1}%)");
            }
        }
        Format::Json => {
            let catalog = &generator.reference().airports;
            let rows: Vec<_> = report
                .records
                .iter()
                .map(|record| {
                    // Airport ids follow catalog order, starting at 1.
                    let id = catalog
                        .iter()
                        .position(|a| a.icao == record.airport.icao)
                        .map_or(0, |i| i as u64 + 1);
                    to_storage_format(record, id)
                })
                .collect();
            write_json_lines(io::stdout().lock(), &rows)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
