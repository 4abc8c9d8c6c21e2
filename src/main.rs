use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use vect::testing::{left_matrix, right_matrix, LETTERS, SAMPLE, UNSORTED};
use vect::{api_function, drop, head, index, matrix, maximum, minimum, take, zip, Matrix};

mod cli;
use cli::{Cli, Commands};

/// Input for `vect add`.
#[derive(Deserialize)]
struct AddPayload {
    left: Matrix<i64>,
    right: Matrix<i64>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Demo => run_demo(),
        Commands::Api { x } => run_api(x),
        Commands::Add { pretty } => run_add(pretty),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Walk through every operation on valid sample data.
///
/// The data is fixed and well-formed, so any violation here is a bug and
/// aborts the whole run.
fn run_demo() -> Result<()> {
    println!("=== Safe List Operations ===");
    println!("Head: {}", head(&SAMPLE)?);
    println!("Index 0: {}", index(0, &SAMPLE)?);
    println!("Index 2: {}", index(2, &SAMPLE)?);
    println!("Take 3: {:?}", take(3, &SAMPLE)?);
    println!("Drop 2: {:?}", drop(2, &SAMPLE)?);
    println!("Zipped: {:?}", zip(&SAMPLE, &LETTERS)?);

    println!();
    println!("=== Matrix Operations ===");
    let left = left_matrix();
    let right = right_matrix();
    let sum = matrix::add(&left, &right).context("adding sample matrices")?;
    println!("Matrix Add: {}", sum);
    println!("Element at (0,1): {}", matrix::at(0, 1, &left)?);
    println!("Element at (1,2): {}", matrix::at(1, 2, &left)?);

    println!();
    println!("=== Safe Min/Max ===");
    println!("Minimum: {}", minimum(&UNSORTED)?);
    println!("Maximum: {}", maximum(&UNSORTED)?);

    println!();
    println!("✓ All operations completed safely");
    tracing::debug!("demo finished");
    Ok(())
}

fn run_api(x: i64) -> Result<()> {
    let y = api_function(x)?;
    println!("{}", y);
    Ok(())
}

fn run_add(pretty: bool) -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;

    let payload: AddPayload = serde_json::from_str(&input).context("parsing matrices")?;
    tracing::debug!(
        left = ?payload.left.shape(),
        right = ?payload.right.shape(),
        "adding matrices"
    );

    let sum = payload.left.add(&payload.right)?;
    let json = if pretty {
        serde_json::to_string_pretty(&sum)?
    } else {
        serde_json::to_string(&sum)?
    };
    println!("{}", json);
    Ok(())
}
