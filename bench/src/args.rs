use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Run the benchmarks once and exit instead of serving Lambda invocations.
    /// Variables from a `.env` file in the working directory are loaded first.
    #[arg(long)]
    pub local: bool,
}
