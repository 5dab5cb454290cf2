//! selectable-table - render checkbox-selectable HTML tables from JSON

mod document;
mod error;

use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use clap::ArgAction;
use clap::Parser;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::TermLogger;
use simplelog::TerminalMode;
use simplelog::WriteLogger;

use crate::document::RenderDocument;
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "selectable-table",
    version,
    about = "Render a checkbox-selectable HTML table from a JSON render document"
)]
struct Cli {
    /// Render document (JSON); `-` reads standard input
    document: PathBuf,

    /// Write the HTML here instead of standard output
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Write logs to this file instead of standard error
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    let level = level(cli.verbose);
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }
    Ok(())
}

fn read_document(path: &Path) -> Result<String, CliError> {
    let read_err = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new("-") {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .map_err(read_err)?;
        Ok(json)
    } else {
        fs::read_to_string(path).map_err(read_err)
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let json = read_document(&cli.document)?;
    let html = RenderDocument::from_json(&json)?.render()?;

    match &cli.output {
        Some(path) => {
            fs::write(path, html).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
