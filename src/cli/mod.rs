//! CLI argument definitions for the zoo tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Zoo - turn an arriving-animals manifest into a habitat report.
#[derive(Parser, Debug)]
#[command(name = "zoo")]
#[command(author, version, about = "A CLI tool for turning arriving-animal manifests into habitat reports", long_about = None)]
pub struct Cli {
    /// Output in human-readable format instead of JSON
    #[arg(short = 'H', long = "human", global = true)]
    pub human_readable: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse the manifest and write the habitat report
    Process {
        /// Manifest file, one animal per line
        #[arg(default_value = "arrivingAnimals.txt")]
        input: PathBuf,

        /// Report file to write
        #[arg(short, long, default_value = "zooPopulation.txt")]
        output: PathBuf,

        /// Print the report to stdout instead of writing the output file
        #[arg(long)]
        stdout: bool,

        /// Arrival date for the run, also the default birth anchor (YYYY-MM-DD)
        #[arg(long, env = "ZOO_REFERENCE_DATE", default_value = "2024-03-26")]
        reference_date: String,

        /// Classify manifest clauses by their literal markers instead of position
        #[arg(long)]
        strict_markers: bool,
    },

    /// Parse and enrich every manifest line without writing a report
    Check {
        /// Manifest file, one animal per line
        #[arg(default_value = "arrivingAnimals.txt")]
        input: PathBuf,

        /// Arrival date for the run, also the default birth anchor (YYYY-MM-DD)
        #[arg(long, env = "ZOO_REFERENCE_DATE", default_value = "2024-03-26")]
        reference_date: String,

        /// Classify manifest clauses by their literal markers instead of position
        #[arg(long)]
        strict_markers: bool,
    },
}
