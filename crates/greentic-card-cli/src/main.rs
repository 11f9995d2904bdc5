use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};
use greentic_card_model::{
    AdaptiveCard, ParseConfig, ParseError, ParseResult, ParseWarning, SchemaVersion,
    serialize_card,
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILTER: &str = "greentic_card=info";

#[derive(Parser)]
#[command(name = "greentic-card")]
#[command(about = "Format and check Adaptive Card JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical form of a card.
    Fmt {
        /// Card file, or `-` for stdin.
        #[arg(long, value_name = "CARD_JSON")]
        card: PathBuf,
        /// Target schema version; overrides GREENTIC_CARD_SCHEMA_VERSION.
        #[arg(long, value_name = "VERSION")]
        schema_version: Option<SchemaVersion>,
    },
    /// Print parse warnings as JSON; fails when the card has errors.
    Check {
        #[arg(long, value_name = "CARD_JSON")]
        card: PathBuf,
        #[arg(long, value_name = "VERSION")]
        schema_version: Option<SchemaVersion>,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            err.exit_code()
        }
    };
    process::exit(exit_code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Fmt {
            card,
            schema_version,
        } => handle_fmt(&card, schema_version),
        Command::Check {
            card,
            schema_version,
        } => handle_check(&card, schema_version),
    }
}

fn handle_fmt(card_path: &Path, schema_version: Option<SchemaVersion>) -> Result<(), CliError> {
    let result = load_card(card_path, schema_version)?;
    for warning in &result.warnings {
        eprintln!("{}", describe_warning(warning));
    }
    write_stdout(&serialize_card(&result.card))
}

fn handle_check(card_path: &Path, schema_version: Option<SchemaVersion>) -> Result<(), CliError> {
    let result = load_card(card_path, schema_version)?;
    let report = serde_json::to_string_pretty(&result.warnings)
        .map_err(|err| CliError::Output(io::Error::other(err)))?;
    write_stdout(&format!("{report}\n"))?;
    let errors = result.warnings.iter().filter(|w| w.is_error()).count();
    info!(
        card = %card_path.display(),
        warnings = result.warnings.len(),
        errors,
        "checked card"
    );
    if result.has_errors() {
        return Err(CliError::Validation { errors });
    }
    Ok(())
}

fn load_card(card_path: &Path, schema_version: Option<SchemaVersion>) -> Result<ParseResult, CliError> {
    let text = read_input(card_path)?;
    let mut config = ParseConfig::from_env();
    if let Some(version) = schema_version {
        config.target_version = version;
    }
    debug!(card = %card_path.display(), target_version = %config.target_version, "parsing card");
    AdaptiveCard::deserialize_with(&text, &config)
        .map_err(|err| CliError::CardParse(card_path.to_path_buf(), err))
}

fn read_input(card_path: &Path) -> Result<String, CliError> {
    let read = if card_path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(card_path)
    };
    read.map_err(|err| CliError::CardFile(card_path.to_path_buf(), err.into()))
}

fn write_stdout(text: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(CliError::Output)
}

fn describe_warning(warning: &ParseWarning) -> String {
    let path = if warning.path.is_empty() { "/" } else { &warning.path };
    let level = if warning.is_error() { "error" } else { "warning" };
    format!("{level}: {path}: {}", warning.message)
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("card file failed ({0}): {1}")]
    CardFile(PathBuf, #[source] anyhow::Error),
    #[error("card parse failed ({0}): {1}")]
    CardParse(PathBuf, #[source] ParseError),
    #[error("validation failed: {errors} error(s)")]
    Validation { errors: usize },
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::CardFile(_, _) => 1,
            CliError::Output(_) => 1,
            CliError::Validation { .. } => 2,
            CliError::CardParse(_, _) => 3,
        }
    }
}
