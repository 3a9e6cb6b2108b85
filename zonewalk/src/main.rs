//! zonewalk: print the direction codes leading from one location to another.

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zonewalk_route::{JsonFileSource, MemoryZoneCache, Route, RouteFinder, initialize};

use config::{FileConfig, Overrides, Settings};

#[derive(Parser, Debug)]
#[command(name = "zonewalk", version)]
#[command(about = "Find a walking route between two locations, possibly in different zones")]
struct Args {
    /// JSON file holding an array of zone definitions
    #[arg(long, short = 'z')]
    zones: Option<PathBuf>,

    /// TOML file with default settings (zones, minimal, max_height)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Zone the walk starts in
    from_zone: String,

    /// Location name the walk starts at
    from_location: String,

    /// Zone the walk ends in
    to_zone: String,

    /// Location name the walk ends at
    to_location: String,

    /// Prefer short paths inside each zone over the first path found
    #[arg(long, short = 'm')]
    minimal: bool,

    /// Depth limit of the minimal search
    #[arg(long)]
    max_height: Option<usize>,

    /// Print each zone crossed and the locations visited
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Print the route as JSON
    #[arg(long, conflicts_with = "verbose")]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether a route was found.
async fn run(args: Args) -> Result<bool> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(
        file,
        Overrides {
            zones: args.zones.clone(),
            minimal: args.minimal,
            max_height: args.max_height,
        },
    )?;

    let cache = MemoryZoneCache::new();
    let report = initialize(&JsonFileSource::new(&settings.zones), &cache)
        .await
        .with_context(|| format!("failed to load zones from {}", settings.zones.display()))?;
    for failed in &report.failed {
        eprintln!("warning: zone {:?} not loaded: {}", failed.name, failed.reason);
    }
    log::info!("{} zones loaded", report.loaded.len());

    let finder = RouteFinder::with_config(cache, settings.search);
    let route = finder
        .find_route(
            &args.from_zone,
            &args.from_location,
            &args.to_zone,
            &args.to_location,
            settings.strategy,
        )
        .await;

    let Some(route) = route else {
        eprintln!(
            "no route from {}/{} to {}/{}",
            args.from_zone, args.from_location, args.to_zone, args.to_location
        );
        return Ok(false);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else if args.verbose {
        print_hops(&route);
    } else {
        println!("{}", route.codes);
    }
    Ok(true)
}

fn print_hops(route: &Route) {
    for hop in &route.hops {
        println!("{}: {}  [{}]", hop.zone, hop.locations.join(" -> "), hop.codes);
    }
    println!("{}", route.codes);
}
