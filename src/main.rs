use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use unit_data_download::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Download units data of the given game version from CommunityDragon", long_about = None)]
struct Cli {
    /// Game version to download units data for (e.g. latest, pbe, 11.1)
    version: String,

    /// Folder to save units data to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FOLDER)]
    output: PathBuf,

    /// Pause after each unit request, in milliseconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_DELAY.as_millis() as u64)]
    delay: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let report = run(&Client::new(), &cli.version, &cli.output, Duration::from_millis(cli.delay), |update| {
        if let Some(line) = update.console_line() {
            println!("{line}");
        }
    })?;

    println!("{}", report.summary());

    Ok(())
}
