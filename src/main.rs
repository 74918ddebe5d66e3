use anyhow::Context;
use colored::*;
use indicatif::HumanDuration;

use route_table_analyzer::Config;
use route_table_analyzer::app::services::analyzer::{RouteTableAnalyzer, RunStats};

fn main() -> anyhow::Result<()> {
    setup_logging();

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let analyzer = RouteTableAnalyzer::new(Config::in_dir(cwd));

    let stats = analyzer
        .process_directory()
        .context("Route table analysis run failed")?;

    print_summary(&stats);
    Ok(())
}

/// Set up structured logging to stderr. `RUST_LOG` overrides the default
/// filter when set.
fn setup_logging() {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("route_table_analyzer=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Print the run report to stdout
fn print_summary(stats: &RunStats) {
    println!(
        "{}",
        "Route table analysis complete".bright_green().bold()
    );
    println!(
        "  {} {}",
        "Workbooks discovered:".bright_cyan(),
        stats.files_discovered
    );
    println!(
        "  {} {}",
        "Processed:".bright_cyan(),
        stats.files_processed
    );
    println!("  {} {}", "Skipped:".bright_cyan(), stats.files_skipped);
    println!(
        "  {} {}",
        "Result records:".bright_cyan(),
        stats.records_written
    );
    println!(
        "  {} {}",
        "Main-line sections:".bright_cyan(),
        stats.mainline_sections
    );
    println!(
        "  {} {}",
        "Elapsed:".bright_cyan(),
        HumanDuration(stats.elapsed)
    );
}
