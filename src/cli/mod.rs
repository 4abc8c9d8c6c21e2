// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the vect command-line interface.
//!
//! Three subcommands: `demo` runs the worked example end to end, `api` evaluates
//! the basic arithmetic example, and `add` reads two matrices as JSON from stdin
//! and prints their sum. Any violation aborts with a non-zero exit.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vect",
    about = "Length- and shape-checked sequence and matrix operations",
    version
)]
pub struct Cli {
    /// Log rejected inputs and each step (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the worked example over the built-in sample data
    Demo,

    /// Evaluate api_function(x) = (x + 1) * 2
    Api {
        /// Input value
        #[arg(allow_negative_numbers = true)]
        x: i64,
    },

    /// Add two matrices read from stdin as {"left": Matrix, "right": Matrix}
    ///
    /// Each matrix is {"rows": R, "cols": C, "data": [[...], ...]}. Shapes are
    /// validated on input and must match for the addition to succeed.
    Add {
        /// Pretty-print the resulting JSON
        #[arg(long)]
        pretty: bool,
    },
}
