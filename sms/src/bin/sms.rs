//! `sms` command-line tool
//!
//! ```bash
//! sms reorder -a 4.5 -e 0.5 matrix.sms reordered.sms
//! sms info --short matrix.sms
//! sms transpose --tall matrix.sms -
//! ```
//!
//! `-` or an omitted path means standard input / standard output.

use clap::{Parser, Subcommand};
use sms::{
    load_and_reorder, load_and_transpose, Error, MatrixInfo, ReorderConfig, Result, SmsFile,
    SmsReader, Token, TransposeMode,
};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "sms", author, version)]
#[command(about = "Tools for sparse matrices in SMS format")]
struct Cli {
    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Permute rows and columns to speed up rank computation by Gaussian elimination
    ///
    /// Rows are chosen greedily by five criteria:
    ///   a. share of nonzero entries in the row
    ///   b. nonzero entries in columns before the diagonal
    ///   c. nonzero entries in columns after the diagonal
    ///   d. nonzero entries in columns no previous row touches
    ///   e. distance between column `i` and the first nonzero in a column > `i`
    /// Rows minimizing a-d and maximizing e move to the top.
    Reorder {
        /// Weight of criterion a
        #[arg(short = 'a', long = "weight-a", allow_negative_numbers = true)]
        weight_a: Option<f64>,
        /// Weight of criterion b
        #[arg(short = 'b', long = "weight-b", allow_negative_numbers = true)]
        weight_b: Option<f64>,
        /// Weight of criterion c
        #[arg(short = 'c', long = "weight-c", allow_negative_numbers = true)]
        weight_c: Option<f64>,
        /// Weight of criterion d
        #[arg(short = 'd', long = "weight-d", allow_negative_numbers = true)]
        weight_d: Option<f64>,
        /// Weight of criterion e
        #[arg(short = 'e', long = "weight-e", allow_negative_numbers = true)]
        weight_e: Option<f64>,
        /// JSON file with `weight-a` .. `weight-e`; flags take precedence
        #[arg(long)]
        config: Option<PathBuf>,
        /// Input matrix
        input: Option<String>,
        /// Output matrix
        output: Option<String>,
    },
    /// Print number of rows, columns, nonzero values and density
    Info {
        /// One-line output format
        #[arg(short, long)]
        short: bool,
        /// Input matrix
        input: Option<String>,
    },
    /// Transpose a matrix
    Transpose {
        /// Only transpose if the result has at least as many rows as columns
        #[arg(short = 'R', long)]
        tall: bool,
        /// Only transpose if the result has at least as many columns as rows
        #[arg(short = 'C', long)]
        wide: bool,
        /// Input matrix
        input: Option<String>,
        /// Output matrix
        output: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sms: ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Reorder {
            weight_a,
            weight_b,
            weight_c,
            weight_d,
            weight_e,
            config,
            input,
            output,
        } => {
            let mut config = match config {
                Some(path) => ReorderConfig::from_json_file(path)?,
                None => ReorderConfig::default(),
            };
            let weights = &mut config.weights;
            for (slot, flag) in [
                (&mut weights.a, weight_a),
                (&mut weights.b, weight_b),
                (&mut weights.c, weight_c),
                (&mut weights.d, weight_d),
                (&mut weights.e, weight_e),
            ] {
                if let Some(value) = flag {
                    *slot = value;
                }
            }
            // reject degenerate weights before opening any stream
            config.weights.normalized()?;

            // the input is released before the output is created, so both
            // may name the same file
            let (store, report) =
                with_input(input.as_deref(), |reader| load_and_reorder(reader, &config))?;
            tracing::info!(
                rows = report.steps.len(),
                row_swaps = report.row_swaps(),
                "reordered"
            );
            store.write_to(open_output(output.as_deref())?)?;
            Ok(())
        }
        Commands::Info { short, input } => {
            let info = with_input(input.as_deref(), |reader| {
                MatrixInfo::from_reader(SmsReader::<_, f64>::open(reader)?)
            })?;
            let mut out = io::stdout().lock();
            let written = if short {
                writeln!(out, "{}", info.short())
            } else {
                write!(out, "{info}")
            };
            written.map_err(|e| Error::io("Error writing to standard output", e))
        }
        Commands::Transpose {
            tall,
            wide,
            input,
            output,
        } => {
            let mode = TransposeMode::from_flags(tall, wide)?;
            let (store, transposed) = with_input(input.as_deref(), |reader| {
                load_and_transpose::<_, Token>(reader, mode)
            })?;
            tracing::info!(transposed, "matrix copied");
            store.write_to(open_output(output.as_deref())?)?;
            Ok(())
        }
    }
}

/// Run `f` on the named input, or on standard input for `-` / no name
fn with_input<T>(path: Option<&str>, f: impl FnOnce(&mut dyn BufRead) -> Result<T>) -> Result<T> {
    match path {
        None | Some("-") => f(&mut io::stdin().lock()),
        Some(path) => {
            let file = SmsFile::open(path)?;
            tracing::debug!(path, mapped = file.is_mapped(), "input opened");
            f(&mut file.as_bytes())
        }
    }
}

/// Open the named output, or standard output for `-` / no name
fn open_output(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        None | Some("-") => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| Error::io(format!("Cannot open file '{path}' for writing"), e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}
