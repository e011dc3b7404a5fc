use std::path::PathBuf;
use std::process::ExitCode;

use clap::{error::ErrorKind, CommandFactory, Parser};
use tracing::info;

use blogml_ghost_converter::{convert_file, initialize_tracing, ConvertError};

/// Convert a BlogML export into a Ghost JSON import file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// BlogML XML file to read
    input: PathBuf,
    /// Ghost JSON file to write
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            println!("{}", ConvertError::Usage);
            println!("{}", Cli::command().render_usage());
            return ExitCode::FAILURE;
        }
    };

    initialize_tracing();

    match convert_file(&cli.input, &cli.output) {
        Ok(summary) => {
            info!(
                "Converted {} posts, {} tags, {} post-tag links",
                summary.posts, summary.tags, summary.posts_tags
            );
            println!("Success!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
