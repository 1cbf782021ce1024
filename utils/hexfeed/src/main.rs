use clap::Parser;
use tracing_subscriber::EnvFilter;

use hexfeed::cli::{run, Args};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args, &mut std::io::stdout().lock()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
