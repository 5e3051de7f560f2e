use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use esports_atlas::atlas;
use esports_atlas::config::Config;
use esports_atlas::error::Result;
use esports_atlas::flags::{self, FlagSource};
use esports_atlas::geography::Topology;
use esports_atlas::logging;
use esports_atlas::region::{self, Region};
use esports_atlas::registry;
use esports_atlas::resolver;

#[derive(Parser)]
#[command(
    name = "esports-atlas",
    version,
    about = "Country identity tooling for the esports world map"
)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check every map shape resolves against the registry
    Verify {
        /// Read the topology from a local file instead of the network
        #[arg(long)]
        atlas_file: Option<PathBuf>,
        /// Bypass the on-disk topology cache
        #[arg(long)]
        refresh: bool,
    },
    /// Resolve a numeric code, alpha-2 code, or country name
    Lookup {
        /// The identifier to resolve
        input: String,
        /// Optional display name to resolve alongside the identifier
        #[arg(long)]
        name: Option<String>,
    },
    /// Probe the flag provider cascade over the network
    ProbeFlags {
        /// Alpha-2 code to probe
        #[arg(long, conflicts_with = "preload")]
        code: Option<String>,
        /// Probe the staggered preload plan instead of a single code
        #[arg(long)]
        preload: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load();

    match cli.command {
        Command::Verify { atlas_file, refresh } => {
            let topology = match atlas_file {
                Some(path) => atlas::load_topology_from_file(&path)?,
                None => atlas::load_topology(&config, refresh).await?,
            };
            verify(&topology);
        }
        Command::Lookup { input, name } => lookup(&input, name.as_deref()),
        Command::ProbeFlags { code, preload } => {
            if preload {
                probe_preload().await;
            } else if let Some(code) = code {
                probe_code(&code).await;
            } else {
                eprintln!("pass --code <ALPHA2> or --preload");
            }
        }
    }

    Ok(())
}

/// Markers in shape names that usually indicate an abbreviated form
/// the matching tables need to know about.
const ABBREVIATION_MARKERS: [&str; 5] = ["dem.", "rep.", "eq.", "n.", "s."];

fn verify(topology: &Topology) {
    let records = &topology.objects.countries.geometries;
    println!(
        "atlas verification: {} shapes ({})",
        records.len(),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let mut resolved = 0usize;
    let mut unresolved: Vec<String> = Vec::new();
    let mut unassigned = 0usize;
    let mut region_counts: Vec<(Region, usize)> = Region::ALL
        .iter()
        .filter(|r| !r.is_parent() || **r == Region::Europe)
        .map(|&r| (r, 0))
        .collect();

    for record in records {
        let name = record.display_name();
        match record.alpha2() {
            Some(alpha2) => {
                resolved += 1;
                match record.region() {
                    Some(region) => {
                        if let Some(slot) = region_counts.iter_mut().find(|(r, _)| *r == region) {
                            slot.1 += 1;
                        }
                    }
                    None => unassigned += 1,
                }
                let lower = name.to_lowercase();
                if ABBREVIATION_MARKERS.iter().any(|marker| lower.contains(marker))
                    && registry::name_to_alpha2(&name).is_none()
                {
                    warn!(
                        shape = %name,
                        code = %alpha2,
                        "abbreviated shape name resolved only via fallback rules"
                    );
                }
            }
            None => unresolved.push(name),
        }
    }

    println!("resolved: {resolved}");
    println!("unresolved: {}", unresolved.len());
    println!("region-less (valid): {unassigned}");
    for (region, count) in region_counts {
        println!("  {:<20} {count}", region.label());
    }
    for name in &unresolved {
        println!("  unresolved shape: {name}");
    }

    if unresolved.is_empty() {
        info!("all shapes resolved");
    } else {
        warn!(count = unresolved.len(), "some shapes did not resolve");
    }
}

fn lookup(input: &str, name: Option<&str>) {
    let alpha2 = match name {
        Some(name) => resolver::resolve_with_name(Some(input), name),
        None => resolver::resolve(input),
    };

    let Some(alpha2) = alpha2 else {
        println!("{input}: unresolved");
        return;
    };

    println!("alpha-2:  {alpha2}");
    if let Some(numeric) = resolver::alpha2_to_numeric(alpha2) {
        println!("numeric:  {numeric}");
    }
    if let Some(canonical) = registry::canonical_name(alpha2) {
        println!("name:     {canonical}");
    }
    match region::region_of(alpha2) {
        Some(region) => println!("region:   {}", region.label()),
        None => println!("region:   (none)"),
    }
    for source in FlagSource::ALL {
        println!("flag:     {}", flags::flag_url(Some(alpha2), "", source));
    }
}

async fn probe_code(code: &str) {
    let lower = code.to_lowercase();
    let client = reqwest::Client::new();
    for source in FlagSource::ALL {
        let url = source
            .template()
            .replace("{code}", &lower)
            .replace("{CODE}", &lower.to_uppercase());
        match client.get(&url).send().await {
            Ok(response) => println!("{:?}: {} -> {}", source, url, response.status()),
            Err(error) => println!("{source:?}: {url} -> error: {error}"),
        }
    }
}

async fn probe_preload() {
    let client = reqwest::Client::new();
    for tier in flags::preload_plan() {
        info!(
            delay_secs = tier.delay.as_secs(),
            count = tier.codes.len(),
            "preload tier"
        );
        tokio::time::sleep(tier.delay).await;
        for code in tier.codes {
            let url = FlagSource::Primary.template().replace("{code}", code);
            match client.get(&url).send().await {
                Ok(response) => println!("{code}: {}", response.status()),
                Err(error) => println!("{code}: error: {error}"),
            }
        }
    }
}
