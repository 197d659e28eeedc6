//! BINLOOKUP CLI - Command-line interface for BIN prefix lookup

use anyhow::{bail, Context, Result};
use binlookup_core::{LookupError, RecordStore};
use binlookup_server::{
    api::{FailureResponse, LookupResponse},
    error::{BIN_NOT_FOUND_MESSAGE, INVALID_BIN_MESSAGE},
    server, ServerConfig,
};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "binlookup")]
#[command(about = "BINLOOKUP - Resolve card BIN prefixes to issuer records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a BIN prefix in a data file
    Lookup {
        /// BIN prefix, at least 6 characters
        prefix: String,

        /// BIN data file
        #[arg(short, long, default_value = "bins_su.json")]
        data: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Validate a BIN data file
    Validate {
        /// BIN data file
        file: PathBuf,
    },

    /// Measure lookup throughput against a data file
    Benchmark {
        /// BIN data file
        #[arg(short, long, default_value = "bins_su.json")]
        data: PathBuf,

        /// Number of lookups to run
        #[arg(short, long, default_value = "10000")]
        requests: usize,

        /// Number of parallel threads
        #[arg(short, long, default_value = "8")]
        threads: usize,
    },

    /// Start the HTTP server
    Serve {
        /// BIN data file (overrides BIN_DATA_PATH)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind (overrides HOST)
        #[arg(long)]
        host: Option<IpAddr>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli_logging_enabled(cli.verbose, &cli.command) {
        tracing_subscriber::fmt()
            .with_env_filter("binlookup=debug")
            .init();
    }

    match cli.command {
        Commands::Lookup {
            prefix,
            data,
            format,
        } => {
            lookup_command(prefix, data, format)?;
        }
        Commands::Validate { file } => {
            validate_command(file)?;
        }
        Commands::Benchmark {
            data,
            requests,
            threads,
        } => {
            benchmark_command(data, requests, threads)?;
        }
        Commands::Serve { data, port, host } => {
            serve_command(data, port, host).await?;
        }
    }

    Ok(())
}

/// `serve` installs the server's own subscriber, so `--verbose` only applies elsewhere
fn cli_logging_enabled(verbose: bool, command: &Commands) -> bool {
    verbose && !matches!(command, Commands::Serve { .. })
}

fn lookup_command(prefix: String, data: PathBuf, format: OutputFormat) -> Result<()> {
    let store = RecordStore::load_or_empty(&data);
    let start = Instant::now();
    let result = store.lookup(&prefix);
    let elapsed = start.elapsed();

    match format {
        OutputFormat::Json => {
            let body = match &result {
                Ok(record) => serde_json::to_string_pretty(&LookupResponse::new((*record).clone()))?,
                Err(e) => serde_json::to_string_pretty(&FailureResponse::new(failure_message(e)))?,
            };
            println!("{}", body);
        }
        OutputFormat::Text => match &result {
            Ok(record) => {
                println!("\n{} BIN {}", "═".blue().bold(), prefix);
                if let Some(fields) = record.fields() {
                    for (key, value) in fields {
                        let value = match value.as_str() {
                            Some(s) => s.to_string(),
                            None => value.to_string(),
                        };
                        println!("{} {}: {}", "▸".blue(), key, value);
                    }
                }
                println!(
                    "\n{} Matched in {:.3}ms ({} records)",
                    "✓".green(),
                    elapsed.as_secs_f64() * 1000.0,
                    store.len()
                );
            }
            Err(e) => {
                println!("{} {}", "✗".red(), failure_message(e));
            }
        },
    }

    if result.is_err() {
        std::process::exit(1);
    }

    Ok(())
}

fn failure_message(err: &LookupError) -> &'static str {
    match err {
        LookupError::InvalidInput { .. } => INVALID_BIN_MESSAGE,
        LookupError::NotFound => BIN_NOT_FOUND_MESSAGE,
    }
}

fn validate_command(file: PathBuf) -> Result<()> {
    println!("{} Validating {}...", "→".blue(), file.display());

    match RecordStore::load(&file) {
        Ok(store) => {
            let summary = store.summary();
            println!("{} BIN data is valid!", "✓".green());
            println!("  Records: {}", summary.total);
            println!("  With number: {}", summary.with_number);
            if summary.without_number > 0 {
                println!(
                    "  {} Without number: {} (these never match)",
                    "!".yellow(),
                    summary.without_number
                );
            }
            if summary.non_object > 0 {
                println!(
                    "  {} Not objects: {} (counted above, never match)",
                    "!".yellow(),
                    summary.non_object
                );
            }
        }
        Err(e) => {
            println!("{} BIN data is invalid:", "✗".red());
            println!("  {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn benchmark_command(data: PathBuf, requests: usize, threads: usize) -> Result<()> {
    use rayon::prelude::*;

    let store = RecordStore::load(&data)
        .with_context(|| format!("Failed to load BIN data: {}", data.display()))?;

    let prefixes: Vec<String> = store
        .iter()
        .filter_map(|r| r.number())
        .filter(|n| n.chars().count() >= binlookup_core::MIN_PREFIX_LEN)
        .map(|n| n.chars().take(binlookup_core::MIN_PREFIX_LEN).collect())
        .collect();
    if prefixes.is_empty() {
        bail!("No records with a BIN of at least {} digits", binlookup_core::MIN_PREFIX_LEN);
    }

    println!("{} Running benchmark...", "→".blue());
    println!("  Records: {}", store.len());
    println!("  Requests: {}", requests);
    println!("  Threads: {}", threads);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build thread pool")?;

    let start = Instant::now();
    let found = pool.install(|| {
        (0..requests)
            .into_par_iter()
            .filter(|i| store.lookup(&prefixes[i % prefixes.len()]).is_ok())
            .count()
    });
    let duration = start.elapsed();

    let throughput = requests as f64 / duration.as_secs_f64();

    println!("\n{} Benchmark Results", "═".blue().bold());
    println!("{} Total lookups: {}", "▸".blue(), requests);
    println!("{} Found: {}", "▸".blue(), found);
    println!("{} Duration: {:.3}s", "▸".blue(), duration.as_secs_f64());
    println!("{} Throughput: {:.0} lookups/sec", "▸".blue(), throughput);

    Ok(())
}

async fn serve_command(data: Option<PathBuf>, port: Option<u16>, host: Option<IpAddr>) -> Result<()> {
    let mut config = ServerConfig::from_env()?;
    if let Some(data) = data {
        config.data_path = data;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(host) = host {
        config.host = host;
    }

    println!(
        "{} Starting BINLOOKUP server on {}...",
        "→".blue(),
        config.bind_addr()
    );
    println!(
        "{} Loading BIN data from {}...",
        "→".blue(),
        config.data_path.display()
    );

    server::run(&config).await
}
