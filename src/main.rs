use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flowtag::{report, FlowAggregator, FlowTagError, TagResolver};

/// Classify flow-log records by destination port and protocol and
/// write per-tag and per-(port, protocol) counts.
#[derive(Parser)]
#[command(name = "flowtag", version)]
struct Cli {
    /// Comma-delimited mapping file ((dstport, protocol) -> tag)
    map_file: PathBuf,
    /// Whitespace-delimited flow-log file
    flow_log_file: PathBuf,
    /// Path the text report is written to
    output_file: PathBuf,
}

fn run(cli: &Cli) -> Result<(), FlowTagError> {
    let resolver = TagResolver::from_file(&cli.map_file)?;
    info!(entries = resolver.len(), "tag map loaded");

    let mut aggregator = FlowAggregator::new(&resolver);
    aggregator.process(&cli.flow_log_file)?;

    report::write_report_file(
        aggregator.tag_counts(),
        aggregator.port_protocol_counts(),
        &cli.output_file,
    )?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => {
            println!(
                "Processing complete. Results written to {}",
                cli.output_file.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
