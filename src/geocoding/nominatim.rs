use crate::error::{CinemapError, Result};
use crate::models::GeoPoint;
use reqwest::Client;
use serde::Deserialize;

/// Nominatim search client (OpenStreetMap data)
///
/// The usage policy requires an identifying User-Agent on every request.
pub struct NominatimClient {
    client: Client,
    base_url: String,
    user_agent: String,
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimClient {
    pub fn new(base_url: &str, user_agent: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    /// Resolve a place name to coordinates; `Ok(None)` means the service
    /// found nothing
    pub async fn geocode(&self, place: &str) -> Result<Option<GeoPoint>> {
        let url = format!("{}/search", self.base_url);

        tracing::debug!("querying Nominatim for '{}'", place);
        let response = self
            .client
            .get(&url)
            .query(&[("q", place), ("format", "jsonv2"), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?
            .error_for_status()?;

        let places: Vec<NominatimPlace> = response.json().await?;

        match places.first() {
            Some(found) => {
                let latitude = parse_decimal_string(&found.lat)?;
                let longitude = parse_decimal_string(&found.lon)?;
                Ok(Some(GeoPoint::new(latitude, longitude)))
            }
            None => Ok(None),
        }
    }
}

// Nominatim returns lat/lon as decimal strings
fn parse_decimal_string(value: &str) -> Result<f64> {
    value.parse::<f64>().map_err(|_| {
        CinemapError::InvalidCoordinate(format!("Non-numeric coordinate in reply: '{}'", value))
    })
}
