use crate::utils::constants::{ARCGIS_URL, DEFAULT_CLOSEST_COUNT, DEFAULT_OUTPUT_FILE, NOMINATIM_URL};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cinemap")]
#[command(about = "Maps filming locations for a year, ranked by distance from you")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Release year of the films to map")]
    pub film_year: u16,

    #[arg(help = "Latitude of the origin point (decimal degrees or DD:MM:SS)")]
    pub latitude: String,

    #[arg(help = "Longitude of the origin point (decimal degrees or DD:MM:SS)")]
    pub longitude: String,

    #[arg(help = "Path to the filmography export (locations.list format)")]
    pub dataset: PathBuf,

    #[arg(
        short,
        long,
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Output HTML file"
    )]
    pub output: PathBuf,

    #[arg(
        long,
        default_value_t = DEFAULT_CLOSEST_COUNT,
        help = "Number of closest locations to map"
    )]
    pub closest: usize,

    #[arg(long, default_value = NOMINATIM_URL, help = "Nominatim base URL")]
    pub nominatim_url: String,

    #[arg(long, default_value = ARCGIS_URL, help = "ArcGIS geocoder base URL")]
    pub arcgis_url: String,

    #[arg(
        long,
        help = "User-Agent sent to Nominatim [default: cinemap/<version>]"
    )]
    pub user_agent: Option<String>,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
