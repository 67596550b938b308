//! Element QA CLI
//!
//! Command-line interface for generating element smoke-test suites from
//! registry snapshot files.

#![forbid(unsafe_code)]
#![allow(clippy::doc_markdown)]

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use elem_qa_cli::{build_report, list_elements};
use elem_qa_gen::{default_blacklist, SetupOptions};

#[derive(Parser)]
#[command(name = "elem-qa")]
#[command(about = "Smoke-test pipeline generator for media framework elements", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the smoke-test suite from a registry snapshot
    Generate {
        /// Path to a registry snapshot (YAML, or JSON with a .json extension)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,

        /// Force a discard sink on every generated pipeline
        #[arg(long)]
        mute: bool,

        /// Scenario name to forward to the harness (repeatable)
        #[arg(long = "scenario", value_name = "NAME")]
        scenarios: Vec<String>,
    },

    /// List snapshot elements and their eligibility
    List {
        /// Path to a registry snapshot
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
    },

    /// Print the static blacklist of known-broken cases
    Blacklist,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            snapshot,
            format,
            mute,
            scenarios,
        } => generate(&snapshot, &format, mute, scenarios),
        Commands::List { snapshot } => list(&snapshot),
        Commands::Blacklist => print_blacklist(),
    }
}

fn generate(snapshot: &Path, format: &str, mute: bool, scenarios: Vec<String>) {
    println!("Setting up tests to validate all elements");

    let options = SetupOptions { mute };
    let report = match build_report(snapshot, scenarios, options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!(
        "Generated {} test case(s) from {}",
        report.total_tests(),
        snapshot.display()
    );

    match format {
        "yaml" => match report.to_yaml() {
            Ok(yaml) => println!("{yaml}"),
            Err(e) => eprintln!("{e}"),
        },
        "json" => match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{e}"),
        },
        _ => {
            eprintln!("Unknown format: {format}");
            std::process::exit(1);
        }
    }
}

fn list(snapshot: &Path) {
    let statuses = match list_elements(snapshot) {
        Ok(statuses) => statuses,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!("=== Snapshot Elements ===\n");
    for status in &statuses {
        let marker = if status.eligible { "+" } else { "-" };
        println!(
            "  {marker} {} ({}): {} test case(s)",
            status.name, status.media_class, status.test_cases
        );
    }

    let eligible = statuses.iter().filter(|status| status.eligible).count();
    println!("\n{eligible} of {} element(s) eligible", statuses.len());
}

fn print_blacklist() {
    println!("=== Default Blacklist ===\n");
    for entry in default_blacklist() {
        println!("  {}", entry.pattern);
        println!("    {}", entry.reason);
    }
}
