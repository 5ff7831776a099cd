use crate::cli::args::Cli;
use crate::error::Result;
use crate::geocoding::{ArcGisClient, FallbackGeocoder, GeocoderSource, NominatimClient};
use crate::models::{FilmSite, GeoPoint};
use crate::processors::SiteRanker;
use crate::readers::FilmographyReader;
use crate::utils::coordinates::{parse_coordinate, validate_geographic_range};
use crate::utils::progress::ProgressReporter;
use crate::writers::MapWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub async fn run(cli: Cli) -> Result<()> {
    init_logger(cli.verbose);

    let latitude = parse_coordinate(&cli.latitude)?;
    let longitude = parse_coordinate(&cli.longitude)?;
    validate_geographic_range(latitude, longitude)?;
    let origin = GeoPoint::new(latitude, longitude);

    println!("Mapping films released in {}", cli.film_year);
    println!("Dataset: {}", cli.dataset.display());
    println!("Origin: {:.4}, {:.4}", origin.latitude, origin.longitude);

    let reader = FilmographyReader::new();
    let entries = reader.read_films(&cli.dataset, cli.film_year)?;
    println!("Found {} entries for {}", entries.len(), cli.film_year);

    let user_agent = cli
        .user_agent
        .unwrap_or_else(|| format!("cinemap/{}", env!("CARGO_PKG_VERSION")));
    let geocoder = FallbackGeocoder::new(
        NominatimClient::new(&cli.nominatim_url, &user_agent),
        ArcGisClient::new(&cli.arcgis_url),
    );

    let progress = ProgressReporter::new(entries.len() as u64, "Geocoding locations...");

    let mut sites = Vec::new();
    let mut nominatim_count = 0usize;
    let mut arcgis_count = 0usize;
    let mut dropped_count = 0usize;

    // one request in flight at a time, in file order
    for entry in entries {
        match geocoder.geocode(&entry.location).await? {
            Some((point, source)) => {
                match source {
                    GeocoderSource::Nominatim => nominatim_count += 1,
                    GeocoderSource::ArcGis => arcgis_count += 1,
                }
                sites.push(FilmSite::new(entry, point, &origin));
            }
            None => {
                tracing::warn!("no result for '{}', dropping entry", entry.location);
                dropped_count += 1;
            }
        }
        progress.increment(1);
    }

    progress.finish_with_message(&format!("Geocoded {} locations", sites.len()));

    let ranker = SiteRanker::new().with_closest_count(cli.closest);
    let ranked = ranker.rank(sites);

    let writer = MapWriter::new();
    writer.write_map(&origin, &ranked, cli.film_year, &cli.output)?;

    println!(
        "\nGeocoded via Nominatim: {}, via ArcGIS: {}, dropped: {}",
        nominatim_count, arcgis_count, dropped_count
    );
    println!(
        "Mapped {} closest sites and {} USA sites",
        ranked.closest.len(),
        ranked.usa.len()
    );
    println!("Map written to {}", cli.output.display());

    Ok(())
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cinemap=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cinemap=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
