//! Zoo CLI - turn an arriving-animals manifest into a habitat report.

use clap::Parser;
use menagerie::cli::{Cli, Commands};
use menagerie::commands::{self, Output, PipelineOptions};
use menagerie::parser::GrammarMode;
use std::process;

fn main() {
    let cli = Cli::parse();
    let human = cli.human_readable;

    if let Err(e) = run_command(cli.command, human) {
        if human {
            eprintln!("Error: {}", e);
        } else {
            eprintln!(r#"{{"error": "{}"}}"#, e);
        }
        process::exit(1);
    }
}

fn run_command(command: Commands, human: bool) -> Result<(), menagerie::Error> {
    match command {
        Commands::Process {
            input,
            output: output_path,
            stdout,
            reference_date,
            strict_markers,
        } => {
            let opts = pipeline_options(&reference_date, strict_markers)?;
            let result = commands::process(&input, &output_path, stdout, &opts)?;
            output(&result, human);
        }

        Commands::Check {
            input,
            reference_date,
            strict_markers,
        } => {
            let opts = pipeline_options(&reference_date, strict_markers)?;
            let result = commands::check(&input, &opts)?;
            output(&result, human);
        }
    }

    Ok(())
}

fn pipeline_options(
    reference_date: &str,
    strict_markers: bool,
) -> Result<PipelineOptions, menagerie::Error> {
    Ok(PipelineOptions {
        reference_date: commands::parse_reference_date(reference_date)?,
        grammar: if strict_markers {
            GrammarMode::Marker
        } else {
            GrammarMode::Positional
        },
    })
}

fn output<T: Output>(result: &T, human: bool) {
    if human {
        println!("{}", result.to_human());
    } else {
        println!("{}", result.to_json());
    }
}
