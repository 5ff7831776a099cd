use crate::models::{FilmEntry, GeoPoint};

/// A geocoded filming location with its distance from the origin point.
///
/// The distance is computed in the constructor, so a site without
/// coordinates cannot carry a distance.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmSite {
    pub title: String,
    pub location: String,
    pub point: GeoPoint,
    pub distance_km: f64,
}

impl FilmSite {
    pub fn new(entry: FilmEntry, point: GeoPoint, origin: &GeoPoint) -> Self {
        let distance_km = origin.distance_km(&point);
        Self {
            title: entry.title,
            location: entry.location,
            point,
            distance_km,
        }
    }

    /// The location text names the USA (substring match, as the
    /// locations export spells it)
    pub fn is_usa(&self) -> bool {
        self.location.contains("USA")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, location: &str) -> FilmEntry {
        FilmEntry::new(title.to_string(), location.to_string())
    }

    #[test]
    fn test_distance_computed_on_construction() {
        let origin = GeoPoint::new(51.5074, -0.1278); // London
        let edinburgh = GeoPoint::new(55.9533, -3.1883);
        let site = FilmSite::new(
            entry("Trainspotting", "Edinburgh, Scotland, UK"),
            edinburgh,
            &origin,
        );

        assert!((site.distance_km - 534.0).abs() < 10.0);
    }

    #[test]
    fn test_usa_detection() {
        let origin = GeoPoint::new(0.0, 0.0);
        let point = GeoPoint::new(34.0522, -118.2437);

        let usa = FilmSite::new(entry("Heat", "Los Angeles, California, USA"), point, &origin);
        assert!(usa.is_usa());

        let abroad = FilmSite::new(entry("Amelie", "Paris, France"), point, &origin);
        assert!(!abroad.is_usa());
    }
}
