//! Eventjet CLI - process guest lists exported from Eventjet
//!
//! ```bash
//! eventjet guestlist export.csv                  # Guest list as JSON array
//! eventjet guestlist export.csv -f ndjson -o out # One JSON object per line
//! eventjet check export.csv                      # Report header and row problems
//! ```
//!
//! Log output is controlled with `RUST_LOG` (also read from `.env`).

use clap::{Parser, Subcommand};
use eventjet::{export, ErrorPolicy, GuestList, GuestListOptions, OutputFormat};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventjet")]
#[command(about = "Process data exported from Eventjet", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a guest-list export to JSON
    Guestlist {
        /// Guest-list export (CSV)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[command(flatten)]
        read: ReadArgs,

        /// Skip rows that cannot be converted instead of stopping
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Check a guest-list export for missing columns and malformed rows
    Check {
        /// Guest-list export (CSV)
        input: PathBuf,

        #[command(flatten)]
        read: ReadArgs,
    },
}

#[derive(clap::Args)]
struct ReadArgs {
    /// Input encoding (auto-detect if not specified)
    #[arg(short, long)]
    encoding: Option<String>,

    /// Field delimiter
    #[arg(short, long, default_value = ";")]
    delimiter: char,

    /// Value of yes/no columns meaning "yes"
    #[arg(long, default_value = "ja")]
    yes_token: String,
}

impl ReadArgs {
    fn into_options(self) -> Result<GuestListOptions, Box<dyn std::error::Error>> {
        if !self.delimiter.is_ascii() {
            return Err(format!("Delimiter must be a single ASCII character: '{}'", self.delimiter).into());
        }

        Ok(GuestListOptions {
            delimiter: self.delimiter as u8,
            yes_token: self.yes_token,
            encoding: self.encoding,
        })
    }
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Guestlist {
            input,
            output,
            format,
            read,
            skip_invalid,
        } => read
            .into_options()
            .and_then(|options| cmd_guestlist(&input, output.as_deref(), format, options, skip_invalid)),

        Commands::Check { input, read } => read
            .into_options()
            .and_then(|options| cmd_check(&input, options)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn cmd_guestlist(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    options: GuestListOptions,
    skip_invalid: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Reading guest list: {}", input.display());

    let list = GuestList::from_path(input, options)?;
    eprintln!("   Columns: {}", list.headers().len());

    let policy = if skip_invalid {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Abort
    };

    let stats = match output {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            let stats = export(list, file, format, policy)?;
            eprintln!("💾 Output written to: {}", path.display());
            stats
        }
        None => export(list, io::stdout().lock(), format, policy)?,
    };

    eprintln!("✅ Converted {} guests", stats.written);
    if stats.skipped > 0 {
        eprintln!("⚠️  Skipped {} invalid rows", stats.skipped);
    }

    Ok(())
}

fn cmd_check(input: &Path, options: GuestListOptions) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("✔️  Checking: {}", input.display());

    let list = GuestList::from_path(input, options)?;

    let header_complete = match list.require_columns() {
        Ok(()) => {
            eprintln!("   Header complete ({} columns)", list.headers().len());
            true
        }
        Err(e) => {
            eprintln!("   ❌ {}", e);
            false
        }
    };

    let mut valid = 0;
    let mut invalid = 0;

    for item in list {
        match item {
            Ok(_) => valid += 1,
            Err(e) if e.is_row_error() => {
                invalid += 1;
                eprintln!("   ❌ {}", e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    eprintln!("\n📊 Results: {} valid, {} invalid", valid, invalid);
    io::stderr().flush()?;

    if invalid > 0 || !header_complete {
        std::process::exit(1);
    }

    Ok(())
}
