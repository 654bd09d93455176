//! hessqr - eigenvalues of a real square matrix
//!
//! Thin file-in/file-out front end around the `hessqr` library. Reads a
//! dimension n and n² row-major entries, runs the Hessenberg + QR
//! pipeline, and writes one line per diagonal position: real
//! eigenvalues as plain decimals, conjugate pairs as `re +imi` /
//! `re -imi`. Diagnostics go to stderr; results only to the output
//! file.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{debug, error, info};

use hessqr::{eigenvalues, SchurConfig};

mod error;
mod input;
mod output;

use error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "hessqr",
    version,
    about = "Compute the eigenvalues of a real square matrix"
)]
struct Cli {
    /// Input file: n followed by n*n whitespace-separated entries
    input: PathBuf,
    /// Output file: one eigenvalue per line
    output: PathBuf,
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let file = File::open(&cli.input).map_err(|source| CliError::OpenInput {
        path: cli.input.clone(),
        source,
    })?;
    let (matrix, tolerance) = input::read_matrix(BufReader::new(file))?;
    let n = matrix.nrows();
    info!("read {n}x{n} matrix from {}", cli.input.display());
    debug!("zero threshold {:e}", tolerance.eps());

    let out = File::create(&cli.output).map_err(|source| CliError::OpenOutput {
        path: cli.output.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(out);

    if n == 0 {
        // A 0x0 matrix has an empty spectrum; emit an empty file.
        return Ok(());
    }

    let values = eigenvalues(&matrix, &SchurConfig::new(tolerance))?;
    output::write_spectrum(&mut writer, &values)?;
    info!(
        "wrote {} eigenvalue lines to {}",
        values.len(),
        cli.output.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                error::exit::INVALID_INVOCATION
            } else {
                // --help and --version are not failures.
                0
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
