use challenge_parser::cli::{BuildOptions, ValidateOptions};
use challenge_parser::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "challenge-parser")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build curriculum question data from markdown challenges", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (default: ./challenge-parser.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract questions from challenge files and write a JSON manifest
    Build {
        /// Files, directories or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Write the manifest here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Record failing documents and continue
        #[arg(short, long)]
        keep_going: bool,
    },

    /// Check challenge files without writing output
    Validate {
        /// Files, directories or glob patterns
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Print the parsed markdown tree of a challenge as JSON
    Ast {
        /// Challenge file
        file: PathBuf,
    },

    /// Write a default challenge-parser.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    challenge_parser::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build {
            inputs,
            out,
            keep_going,
        } => {
            challenge_parser::cli::build::run(&BuildOptions {
                inputs,
                out,
                keep_going,
                config: cli.config,
            })?;
        }

        Commands::Validate { inputs, json } => {
            challenge_parser::cli::validate::run(&ValidateOptions {
                inputs,
                json,
                config: cli.config,
            })?;
        }

        Commands::Ast { file } => {
            challenge_parser::cli::ast::run(&file)?;
        }

        Commands::Init { force } => {
            challenge_parser::cli::init::run(force)?;
        }

        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "challenge-parser",
                &mut io::stdout(),
            );
        }
    }

    Ok(())
}
