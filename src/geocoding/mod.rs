pub mod arcgis;
pub mod fallback;
pub mod nominatim;

pub use arcgis::ArcGisClient;
pub use fallback::FallbackGeocoder;
pub use nominatim::NominatimClient;

/// Which service resolved a location, for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocoderSource {
    Nominatim,
    ArcGis,
}
