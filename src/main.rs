use clap::Parser;
use tracing_subscriber::EnvFilter;

use mytools::cli::Args;
use mytools::commands::{CommandRunner, RunContext};
use mytools::config::ConfigFile;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins over -v; logs go to stderr so stdout stays scriptable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level())),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = ConfigFile::load(args.config.as_deref())?;
    let ctx = RunContext::new(args.database_url, config);
    let output = args.command.run(&ctx, args.format)?;
    println!("{}", output);
    Ok(())
}
