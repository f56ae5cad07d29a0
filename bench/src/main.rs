mod args;

use crate::args::Args;
use clap::Parser;
use lambda_runtime::{service_fn, Error};
use messaging_bench::{handler, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();
    logging::init();

    if args.local {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from: {}", path.display());
        }
        info!("Starting the benchmarks...");
        handler::run_benchmarks().await?;
        info!("Finished the benchmarks.");
        return Ok(());
    }

    info!("Waiting for Lambda invocations...");
    lambda_runtime::run(service_fn(handler::handle_event)).await
}
