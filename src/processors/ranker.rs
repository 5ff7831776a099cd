use crate::models::FilmSite;
use crate::utils::constants::DEFAULT_CLOSEST_COUNT;

/// The two marker sets the map shows for a year
#[derive(Debug, Clone)]
pub struct RankedSites {
    /// Closest sites, ascending by distance from the origin
    pub closest: Vec<FilmSite>,
    /// Every site whose location names the USA, in file order
    pub usa: Vec<FilmSite>,
}

pub struct SiteRanker {
    closest_count: usize,
}

impl SiteRanker {
    pub fn new() -> Self {
        Self {
            closest_count: DEFAULT_CLOSEST_COUNT,
        }
    }

    pub fn with_closest_count(mut self, closest_count: usize) -> Self {
        self.closest_count = closest_count;
        self
    }

    /// Select the closest sites and the USA sites. A site can appear in
    /// both sets.
    pub fn rank(&self, sites: Vec<FilmSite>) -> RankedSites {
        let usa: Vec<FilmSite> = sites.iter().filter(|s| s.is_usa()).cloned().collect();

        let mut closest = sites;
        // stable: equal distances keep file order
        closest.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        closest.truncate(self.closest_count);

        RankedSites { closest, usa }
    }
}

impl Default for SiteRanker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilmEntry, GeoPoint};
    use pretty_assertions::assert_eq;

    fn site(title: &str, location: &str, distance_km: f64) -> FilmSite {
        // constructor computes the distance; tests pin it directly
        let mut site = FilmSite::new(
            FilmEntry::new(title.to_string(), location.to_string()),
            GeoPoint::new(0.0, 0.0),
            &GeoPoint::new(0.0, 0.0),
        );
        site.distance_km = distance_km;
        site
    }

    #[test]
    fn test_ascending_order_and_truncation() {
        let sites = vec![
            site("C", "Rome, Italy", 300.0),
            site("A", "Paris, France", 100.0),
            site("B", "Berlin, Germany", 200.0),
        ];

        let ranked = SiteRanker::new().with_closest_count(2).rank(sites);

        let titles: Vec<&str> = ranked.closest.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_ties_keep_file_order() {
        let sites = vec![
            site("first", "Paris, France", 100.0),
            site("second", "Paris, France", 100.0),
        ];

        let ranked = SiteRanker::new().rank(sites);

        assert_eq!(ranked.closest[0].title, "first");
        assert_eq!(ranked.closest[1].title, "second");
    }

    #[test]
    fn test_usa_selection_is_independent_of_distance() {
        let sites = vec![
            site("far", "New York City, New York, USA", 9000.0),
            site("near", "Paris, France", 10.0),
        ];

        let ranked = SiteRanker::new().with_closest_count(1).rank(sites);

        assert_eq!(ranked.closest.len(), 1);
        assert_eq!(ranked.closest[0].title, "near");
        assert_eq!(ranked.usa.len(), 1);
        assert_eq!(ranked.usa[0].title, "far");
    }

    #[test]
    fn test_site_can_appear_in_both_sets() {
        let sites = vec![site("both", "Boston, Massachusetts, USA", 5.0)];

        let ranked = SiteRanker::new().rank(sites);

        assert_eq!(ranked.closest.len(), 1);
        assert_eq!(ranked.usa.len(), 1);
    }

    #[test]
    fn test_fewer_sites_than_requested() {
        let sites = vec![site("only", "Paris, France", 100.0)];

        let ranked = SiteRanker::new().with_closest_count(10).rank(sites);

        assert_eq!(ranked.closest.len(), 1);
        assert!(ranked.usa.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let ranked = SiteRanker::new().rank(Vec::new());
        assert!(ranked.closest.is_empty());
        assert!(ranked.usa.is_empty());
    }
}
