use std::process::ExitCode;

use clap::Parser;
use cockney::CockneyError;
use cockney_cli::{CockneyCli, run};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> ExitCode {
    let cli = CockneyCli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            match error.downcast_ref::<CockneyError>() {
                Some(CockneyError::SourceUnavailable { word, reason }) => {
                    eprintln!(
                        "Could not reach the rhyme service while looking up '{word}': {reason}"
                    );
                    eprintln!("Check your network connection, or pass --rhymes to work offline.");
                }
                _ => eprintln!("Error: {error:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
