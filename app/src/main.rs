use std::{env, error::Error, process::ExitCode};

use tracing_subscriber::EnvFilter;

mod config;
mod preview;
mod query;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = config::Config::load()?;
    init_logging(config.log_filter());
    let request = preview::PreviewRequest::from_args(env::args().skip(1))?;
    let _span = tracing::info_span!("[Preview]", operation = %request.operation()).entered();
    let header = preview::render(&request, config.header_options())?;
    println!("{}", serde_json::to_string_pretty(&header)?);
    Ok(())
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
