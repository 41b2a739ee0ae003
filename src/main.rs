//! CLI for listing Google Cloud Text-to-Speech voices.
//!
//! Reads the API key from a local env file, fetches the voice catalog for one
//! language code and prints the total count plus every voice in the selected
//! family. Diagnostics go to stderr; any failure exits with status 1.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gcloud_tts_voices::{
    constants, env_file::load_api_key, error::Result, report::write_report, voice::VoicesClient,
};

/// List Google Cloud Text-to-Speech voices for a language, filtered by voice family
#[derive(Parser)]
#[command(name = "list-voices", version, about, long_about = None)]
struct Cli {
    /// Env file holding the API key
    #[arg(long, value_name = "PATH", default_value = constants::DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// BCP-47 language code to query
    #[arg(long, value_name = "CODE", default_value = constants::DEFAULT_LANGUAGE_CODE)]
    language_code: String,

    /// Substring marking the voice family to report (case-sensitive)
    #[arg(long, value_name = "MARKER", default_value = constants::DEFAULT_VOICE_FAMILY)]
    voice_family: String,

    /// Voices endpoint to query
    #[arg(long, value_name = "URL", default_value = constants::VOICES_ENDPOINT, hide = true)]
    endpoint: String,
}

fn run(cli: &Cli) -> Result<()> {
    let api_key = load_api_key(&cli.env_file, constants::API_KEY_NAME)?;
    let voices =
        VoicesClient::with_endpoint(cli.endpoint.as_str())
            .get_voices_list(&api_key, &cli.language_code)?;
    write_report(&mut io::stdout().lock(), &voices, &cli.voice_family)?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
