//! Road lookup client.
//!
//! Finds the current position, reverse geocodes it, infers the Indian road
//! type and asks the government data proxy for related records.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use roadinfo::config::ClientConfig;
use roadinfo::govdata::ProxyClient;
use roadinfo::location::{FixedLocation, IpLocation, LocationProvider};
use roadinfo::nominatim::ReverseGeocoder;
use roadinfo::pipeline::RoadLookup;

#[derive(Parser, Debug)]
#[command(name = "lookup")]
#[command(about = "Identify the road at a location and fetch government road data")]
struct Args {
    /// Latitude (uses IP geolocation when omitted)
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Nominatim base URL (overrides config)
    #[arg(long)]
    nominatim_url: Option<String>,

    /// Government data proxy endpoint (overrides config)
    #[arg(long)]
    proxy_url: Option<String>,

    /// Seconds allowed for the location fix (overrides config)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => ClientConfig::load_from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(url) = args.nominatim_url {
        config.geocoder.url = url;
    }
    if let Some(url) = args.proxy_url {
        config.proxy.url = url;
    }
    if let Some(secs) = args.timeout_secs {
        config.location.timeout_secs = secs;
    }

    let locator: Box<dyn LocationProvider> = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Box::new(FixedLocation::new(lat, lon)),
        _ => {
            info!("No coordinates given, using IP geolocation");
            Box::new(IpLocation::new(&config.location.ip_url, &config.geocoder.user_agent)?)
        }
    };

    let geocoder = ReverseGeocoder::new(&config.geocoder.url, &config.geocoder.user_agent)?;
    let proxy = ProxyClient::new(&config.proxy.url)?;

    let lookup = RoadLookup::new(locator, geocoder, proxy, config.location.timeout());
    let report = lookup.run().await;

    if let Some(alert) = &report.alert {
        eprintln!("{}", alert);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    Ok(())
}
