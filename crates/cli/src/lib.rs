pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "pokedex",
    about = "Pokedex skill operator CLI",
    long_about = "Inspect configuration, check readiness, and exercise the Pokedex skill locally.",
    after_help = "Examples:\n  pokedex doctor --json\n  pokedex lookup Mr. Mime\n  pokedex invoke request.json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
    #[command(about = "Validate config and dictionary readiness checks")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Resolve a monster name and print the skill response payload")]
    Lookup {
        #[arg(required = true, num_args = 1.., help = "Monster name, as it would be spoken")]
        name: Vec<String>,
    },
    #[command(about = "Run a request envelope JSON file through the skill and print the reply")]
    Invoke {
        #[arg(help = "Path to a request envelope JSON file")]
        path: PathBuf,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config => commands::config::run(),
        Command::Doctor { json } => commands::doctor::run(json),
        Command::Lookup { name } => commands::lookup::run(&name.join(" ")),
        Command::Invoke { path } => commands::invoke::run(&path),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
