use crate::error::Result;
use crate::geocoding::{ArcGisClient, GeocoderSource, NominatimClient};
use crate::models::GeoPoint;

/// Primary/fallback geocoder composition: Nominatim first, ArcGIS when
/// Nominatim has no result for the place
pub struct FallbackGeocoder {
    primary: NominatimClient,
    secondary: ArcGisClient,
}

impl FallbackGeocoder {
    pub fn new(primary: NominatimClient, secondary: ArcGisClient) -> Self {
        Self { primary, secondary }
    }

    /// Resolve a place, reporting which service answered. `Ok(None)` means
    /// both services came up empty; transport errors propagate.
    pub async fn geocode(&self, place: &str) -> Result<Option<(GeoPoint, GeocoderSource)>> {
        if let Some(point) = self.primary.geocode(place).await? {
            return Ok(Some((point, GeocoderSource::Nominatim)));
        }

        tracing::debug!("Nominatim had no result for '{}', trying ArcGIS", place);

        Ok(self
            .secondary
            .geocode(place)
            .await?
            .map(|point| (point, GeocoderSource::ArcGis)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn geocoder(nominatim: &MockServer, arcgis: &MockServer) -> FallbackGeocoder {
        FallbackGeocoder::new(
            NominatimClient::new(&nominatim.base_url(), "cinemap-tests"),
            ArcGisClient::new(&arcgis.base_url()),
        )
    }

    #[tokio::test]
    async fn test_primary_hit_leaves_fallback_untouched() {
        let nominatim = MockServer::start();
        let arcgis = MockServer::start();

        nominatim.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .json_body(serde_json::json!([{"lat": "50.45", "lon": "30.52"}]));
        });
        let arcgis_mock = arcgis.mock(|when, then| {
            when.method(GET).path("/findAddressCandidates");
            then.status(200).json_body(serde_json::json!({"candidates": []}));
        });

        let (point, source) = geocoder(&nominatim, &arcgis)
            .geocode("Kyiv, Ukraine")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(source, GeocoderSource::Nominatim);
        assert!((point.latitude - 50.45).abs() < 1e-7);
        arcgis_mock.assert_hits(0);
    }

    #[tokio::test]
    async fn test_fallback_answers_on_empty_primary() {
        let nominatim = MockServer::start();
        let arcgis = MockServer::start();

        nominatim.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200).json_body(serde_json::json!([]));
        });
        arcgis.mock(|when, then| {
            when.method(GET).path("/findAddressCandidates");
            then.status(200).json_body(serde_json::json!({
                "candidates": [{"location": {"x": -118.2437, "y": 34.0522}}]
            }));
        });

        let (point, source) = geocoder(&nominatim, &arcgis)
            .geocode("Los Angeles, California, USA")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(source, GeocoderSource::ArcGis);
        assert!((point.longitude - -118.2437).abs() < 1e-7);
    }

    #[tokio::test]
    async fn test_both_empty_yields_none() {
        let nominatim = MockServer::start();
        let arcgis = MockServer::start();

        nominatim.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200).json_body(serde_json::json!([]));
        });
        arcgis.mock(|when, then| {
            when.method(GET).path("/findAddressCandidates");
            then.status(200).json_body(serde_json::json!({"candidates": []}));
        });

        let result = geocoder(&nominatim, &arcgis)
            .geocode("Nowhereville")
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_primary_transport_error_propagates() {
        let nominatim = MockServer::start();
        let arcgis = MockServer::start();

        nominatim.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(503);
        });
        let arcgis_mock = arcgis.mock(|when, then| {
            when.method(GET).path("/findAddressCandidates");
            then.status(200).json_body(serde_json::json!({"candidates": []}));
        });

        let result = geocoder(&nominatim, &arcgis).geocode("Kyiv, Ukraine").await;

        assert!(result.is_err());
        arcgis_mock.assert_hits(0);
    }
}
