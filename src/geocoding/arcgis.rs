use crate::error::Result;
use crate::models::GeoPoint;
use reqwest::Client;
use serde::Deserialize;

/// ArcGIS World Geocoding Service client
pub struct ArcGisClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct CandidatesReply {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    location: CandidateLocation,
}

// x is longitude, y is latitude
#[derive(Debug, Deserialize)]
struct CandidateLocation {
    x: f64,
    y: f64,
}

impl ArcGisClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a place name to coordinates; `Ok(None)` means no candidates
    pub async fn geocode(&self, place: &str) -> Result<Option<GeoPoint>> {
        let url = format!("{}/findAddressCandidates", self.base_url);

        tracing::debug!("querying ArcGIS for '{}'", place);
        let response = self
            .client
            .get(&url)
            .query(&[("f", "json"), ("singleLine", place), ("maxLocations", "1")])
            .send()
            .await?
            .error_for_status()?;

        let reply: CandidatesReply = response.json().await?;

        Ok(reply
            .candidates
            .first()
            .map(|c| GeoPoint::new(c.location.y, c.location.x)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_geocode_hit() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/findAddressCandidates")
                .query_param("f", "json")
                .query_param("singleLine", "Los Angeles, California, USA")
                .query_param("maxLocations", "1");
            then.status(200).json_body(serde_json::json!({
                "candidates": [{"location": {"x": -118.2437, "y": 34.0522}}]
            }));
        });

        let client = ArcGisClient::new(&server.base_url());
        let point = client
            .geocode("Los Angeles, California, USA")
            .await
            .unwrap()
            .unwrap();

        mock.assert();
        assert!((point.latitude - 34.0522).abs() < 1e-7);
        assert!((point.longitude - -118.2437).abs() < 1e-7);
    }

    #[tokio::test]
    async fn test_geocode_no_candidates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/findAddressCandidates");
            then.status(200).json_body(serde_json::json!({"candidates": []}));
        });

        let client = ArcGisClient::new(&server.base_url());
        assert!(client.geocode("Nowhereville").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_geocode_missing_candidates_key() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/findAddressCandidates");
            then.status(200).json_body(serde_json::json!({}));
        });

        let client = ArcGisClient::new(&server.base_url());
        assert!(client.geocode("Nowhereville").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_geocode_http_error_propagates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/findAddressCandidates");
            then.status(500);
        });

        let client = ArcGisClient::new(&server.base_url());
        assert!(client.geocode("Kyiv, Ukraine").await.is_err());
    }
}
