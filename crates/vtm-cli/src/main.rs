use clap::Parser;
use vtm_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Parse first: a usage error must exit before any filesystem work.
    let args = Cli::parse();

    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli::run(args).await {
        eprintln!("vtm error: {:#}", err);
        std::process::exit(1);
    }
}
