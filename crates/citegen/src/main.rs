//! citegen CLI
//!
//! Renders citation request files into formatted citations.
//!
//! Usage: citegen process <request.json|request.yaml> [--output text|html|json]

use citegen_core::{CitationRequest, SourceType, Style};
use citegen_processor::{generate_request, io::load_request, ProcessorError};
use clap::{Parser, Subcommand, ValueEnum};
use schemars::schema_for;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate JSON schema for citation request documents
    Schema,
    /// List supported citation styles and source types
    Styles,
    /// Render a citation request file
    Process {
        /// Path to the request file (JSON or YAML)
        #[arg(index = 1)]
        request: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Output::Text)]
        output: Output,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Output {
    Text,
    Html,
    Json,
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Text => write!(f, "text"),
            Output::Html => write!(f, "html"),
            Output::Json => write!(f, "json"),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Schema => {
            let schema = schema_for!(CitationRequest);
            println!("{}", serde_json::to_string_pretty(&schema).unwrap());
        }
        Commands::Styles => {
            println!("styles:");
            for style in Style::ALL {
                println!("  {}", style);
            }
            println!("source types:");
            for source_type in SourceType::ALL {
                println!("  {}", source_type);
            }
        }
        Commands::Process { request, output } => {
            let request = match load_request(&request) {
                Ok(request) => request,
                Err(e) => {
                    eprintln!("Error reading request: {}", e);
                    std::process::exit(1);
                }
            };

            match generate_request(&request) {
                Ok(result) => match output {
                    Output::Text => println!("{}", result.citation_text),
                    Output::Html => println!("{}", result.citation_html),
                    Output::Json => {
                        println!("{}", serde_json::to_string_pretty(&result).unwrap())
                    }
                },
                Err(ProcessorError::Validation(errors)) => {
                    eprintln!("Request is missing required fields:");
                    for error in &errors {
                        eprintln!("  - {}", error);
                    }
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
