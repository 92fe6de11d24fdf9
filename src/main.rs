use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mrt_shops::cli::{Cli, Commands};
use mrt_shops::config::Config;
use mrt_shops::domain::{mrt_lines, Line, Source, StationCatalog};
use mrt_shops::errors::{ShopError, ShopResult};
use mrt_shops::services::{plan, CrawlService};
use mrt_shops::sources::HttpFetcher;
use mrt_shops::storage::SourceSinks;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run() -> ShopResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env()?;
    let lines = mrt_lines();

    match cli.command {
        Commands::Lines => cmd_lines(&lines),
        Commands::Stations { lines: names } => cmd_stations(&lines, &names),
        Commands::Run {
            sources,
            lines: names,
            output_dir,
            dry_run,
        } => {
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            cmd_run(&config, &lines, &names, &sources, dry_run)
        }
    }
}

fn select_catalog(lines: &[Line], names: &[String]) -> ShopResult<StationCatalog> {
    if names.is_empty() {
        Ok(StationCatalog::build(lines))
    } else {
        StationCatalog::for_lines(lines, names)
    }
}

fn select_sources(requested: &[Source]) -> Vec<Source> {
    if requested.is_empty() {
        return Source::ALL.to_vec();
    }

    let mut selected = Vec::new();
    for source in requested {
        if !selected.contains(source) {
            selected.push(*source);
        }
    }
    selected
}

fn cmd_lines(lines: &[Line]) -> ShopResult<()> {
    println!("MRT lines:\n");
    for line in lines {
        println!("  {} ({} stations)", line.name, line.stations.len());
    }
    println!();
    println!(
        "{} unique stations in total.",
        StationCatalog::build(lines).len()
    );

    Ok(())
}

fn cmd_stations(lines: &[Line], names: &[String]) -> ShopResult<()> {
    let catalog = select_catalog(lines, names)?;

    if catalog.is_empty() {
        println!("No stations selected.");
        return Ok(());
    }

    for station in catalog.sorted() {
        println!("{}", station);
    }

    Ok(())
}

fn cmd_run(
    config: &Config,
    lines: &[Line],
    names: &[String],
    sources: &[Source],
    dry_run: bool,
) -> ShopResult<()> {
    let catalog = select_catalog(lines, names)?;
    let sources = select_sources(sources);

    if dry_run {
        for source in &sources {
            println!("{} ({} requests):", source, catalog.len());
            for task in plan(*source, &catalog) {
                println!("  [DRY RUN] {}", task.request());
            }
            println!();
        }
        println!(
            "Dry run complete. Would send {} requests.",
            catalog.len() * sources.len()
        );
        return Ok(());
    }

    let fetcher = HttpFetcher::new(config)?;
    let sinks = SourceSinks::open(&config.output_dir, &sources)?;
    let service = CrawlService::new(fetcher, sinks, config.concurrency)?;

    println!(
        "Searching {} stations on {} source(s)...\n",
        catalog.len(),
        sources.len()
    );

    let results = service.crawl_all(&sources, &catalog);

    let mut sink_errors = 0;
    for (source, stats) in &results {
        println!("{}:", source);
        println!("  Output: {}", config.output_dir.join(source.output_file_name()).display());
        println!(
            "  {} written, {} fetch failures, {} write errors ({} stations)",
            stats.written, stats.failed, stats.sink_errors, stats.planned
        );
        println!();
        sink_errors += stats.sink_errors;
    }

    if sink_errors > 0 {
        return Err(ShopError::Io(io::Error::other(format!(
            "{} rows could not be written",
            sink_errors
        ))));
    }

    println!("Done.");
    Ok(())
}
