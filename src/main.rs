use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use apikey_header::auth::{ApiKeyExtractor, AuthError};
use apikey_header::config::ExtractorConfig;
use apikey_header::http::parser::{ParserError, parse_headers};

/// Reads a raw HTTP header block from stdin and prints the API key
/// carried in its `Authorization: ApiKey <token>` header.
#[derive(Parser, Debug)]
#[command(name = "apikey-header", version)]
struct Cli {
    /// TOML config file (header name, scheme, parser limits)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParserError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Auth(_) => 1,
            CliError::Stdin(_) | CliError::Parse(_) => 2,
        }
    }
}

/// Parses `input` and returns the extracted key.
fn run(input: &str, config: &ExtractorConfig) -> Result<String, CliError> {
    let headers = parse_headers(input, &config.parser_limits())?;
    tracing::debug!(count = headers.len(), "parsed header block");

    let extractor = ApiKeyExtractor::from_config(config);
    let key = extractor.extract(&headers).inspect_err(|err| {
        tracing::info!(
            header = extractor.header_name(),
            scheme = extractor.scheme(),
            %err,
            "no api key extracted"
        );
    })?;

    Ok(key.to_string())
}

fn read_stdin() -> Result<String, CliError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ExtractorConfig::from_file(path),
        None => ExtractorConfig::default(),
    };

    match read_stdin().and_then(|input| run(&input, &config)) {
        Ok(key) => {
            println!("{key}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
