use clap::{Parser, Subcommand};
use n2yo_client::Location;

/// Query the N2YO satellite tracking API.
///
/// N2YO_API_KEY and N2YO_API_URL in the environment (or `.env`) override
/// the config file.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "n2yo", version)]
pub struct Cli {
    /// TOML config file (defaults to ./n2yo.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Observer latitude in degrees, overrides the configured location
    #[arg(long, allow_negative_numbers = true, requires_all = ["lon", "alt"])]
    pub lat: Option<f64>,

    /// Observer longitude in degrees
    #[arg(long, allow_negative_numbers = true, requires_all = ["lat", "alt"])]
    pub lon: Option<f64>,

    /// Observer altitude in meters
    #[arg(long, allow_negative_numbers = true, requires_all = ["lat", "lon"])]
    pub alt: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Two line elements; several ids are fetched concurrently
    Tle {
        #[arg(required = true)]
        norad_ids: Vec<u32>,
    },
    /// Future positions, one per second
    Positions { norad_id: u32, seconds: u32 },
    /// Optically visible passes
    #[command(name = "visualpasses", alias = "visual-passes")]
    VisualPasses {
        norad_id: u32,
        days: u32,
        min_visibility_seconds: u32,
    },
    /// Passes above a minimum elevation
    #[command(name = "radiopasses", alias = "radio-passes")]
    RadioPasses {
        norad_id: u32,
        days: u32,
        min_elevation_degrees: u32,
    },
    /// Objects within a radius (degrees) of the observer's zenith
    Above {
        search_radius_degrees: u32,
        category_id: u32,
    },
    /// List category ids for `above`
    Categories,
}

impl Cli {
    /// Per-call location from `--lat/--lon/--alt`
    pub fn location(&self) -> Option<Location> {
        match (self.lat, self.lon, self.alt) {
            (Some(lat), Some(lon), Some(alt)) => Some(Location::new(lat, lon, alt)),
            _ => None,
        }
    }
}
