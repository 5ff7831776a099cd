use crate::error::Result;
use crate::models::{FilmSite, GeoPoint};
use crate::processors::RankedSites;
use crate::utils::constants::{
    AWESOME_MARKERS_CSS_URL, AWESOME_MARKERS_JS_URL, CLOSEST_MARKER_COLOR, CLOSEST_MARKER_ICON,
    DEFAULT_ZOOM, FONT_AWESOME_CSS_URL, LEAFLET_CSS_URL, LEAFLET_JS_URL, ORIGIN_MARKER_COLOR,
    ORIGIN_MARKER_ICON, OSM_ATTRIBUTION, OSM_TILE_URL, POPUP_MAX_WIDTH, USA_MARKER_COLOR,
    USA_MARKER_ICON,
};
use std::path::Path;

/// Renders the ranked sites as a self-contained Leaflet HTML document
pub struct MapWriter {
    zoom: u8,
}

impl MapWriter {
    pub fn new() -> Self {
        Self { zoom: DEFAULT_ZOOM }
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Render the map and write it to `path`, creating parent directories
    /// as needed
    pub fn write_map(
        &self,
        origin: &GeoPoint,
        ranked: &RankedSites,
        year: u16,
        path: &Path,
    ) -> Result<()> {
        let html = self.render(origin, ranked, year)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, html)?;

        tracing::debug!("wrote map to {}", path.display());

        Ok(())
    }

    fn render(&self, origin: &GeoPoint, ranked: &RankedSites, year: u16) -> Result<String> {
        let closest_name = format!("Closest film sets in {}", year);
        let usa_name = format!("{} films located in the USA", year);

        let mut markers = String::new();
        markers.push_str(&origin_marker(origin)?);

        markers.push_str("var closestSets = L.featureGroup();\n");
        for site in &ranked.closest {
            markers.push_str(&site_marker(
                site,
                "closestSets",
                CLOSEST_MARKER_COLOR,
                CLOSEST_MARKER_ICON,
            )?);
        }
        markers.push_str("closestSets.addTo(map);\n");

        markers.push_str("var usaSets = L.featureGroup();\n");
        for site in &ranked.usa {
            markers.push_str(&site_marker(
                site,
                "usaSets",
                USA_MARKER_COLOR,
                USA_MARKER_ICON,
            )?);
        }
        markers.push_str("usaSets.addTo(map);\n");

        markers.push_str("var overlays = {};\n");
        markers.push_str(&format!(
            "overlays[{}] = usaSets;\n",
            serde_json::to_string(&usa_name)?
        ));
        markers.push_str(&format!(
            "overlays[{}] = closestSets;\n",
            serde_json::to_string(&closest_name)?
        ));
        markers.push_str("L.control.layers(null, overlays).addTo(map);\n");

        let generated = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<!-- Generated by cinemap {version} on {generated} -->
<title>Film sets in {year}</title>
<link rel="stylesheet" href="{leaflet_css}" />
<link rel="stylesheet" href="{awesome_markers_css}" />
<link rel="stylesheet" href="{font_awesome_css}" />
<script src="{leaflet_js}"></script>
<script src="{awesome_markers_js}"></script>
<style>
html, body, #map {{ height: 100%; width: 100%; margin: 0; }}
</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map("map").setView([{lat}, {lon}], {zoom});
L.tileLayer("{tile_url}", {{
    maxZoom: 19,
    attribution: {attribution}
}}).addTo(map);
{markers}</script>
</body>
</html>
"#,
            version = env!("CARGO_PKG_VERSION"),
            generated = generated,
            year = year,
            leaflet_css = LEAFLET_CSS_URL,
            awesome_markers_css = AWESOME_MARKERS_CSS_URL,
            font_awesome_css = FONT_AWESOME_CSS_URL,
            leaflet_js = LEAFLET_JS_URL,
            awesome_markers_js = AWESOME_MARKERS_JS_URL,
            lat = origin.latitude,
            lon = origin.longitude,
            zoom = self.zoom,
            tile_url = OSM_TILE_URL,
            attribution = serde_json::to_string(OSM_ATTRIBUTION)?,
            markers = markers,
        ))
    }
}

impl Default for MapWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn origin_marker(origin: &GeoPoint) -> Result<String> {
    Ok(format!(
        "L.marker([{lat}, {lon}], {{icon: L.AwesomeMarkers.icon({{icon: \"{icon}\", prefix: \"fa\", markerColor: \"{color}\"}})}}).addTo(map).bindPopup({popup}, {{maxWidth: 150}});\n",
        lat = origin.latitude,
        lon = origin.longitude,
        icon = ORIGIN_MARKER_ICON,
        color = ORIGIN_MARKER_COLOR,
        popup = serde_json::to_string("<h5>You are here</h5>")?,
    ))
}

fn site_marker(site: &FilmSite, group: &str, color: &str, icon: &str) -> Result<String> {
    let popup = format!(
        "<h4>Films information:</h4>\n<i>Films names</i>: {}<br>\n<i>Films locations</i>: {}\n",
        escape_html(&site.title),
        escape_html(&site.location),
    );

    Ok(format!(
        "L.marker([{lat}, {lon}], {{icon: L.AwesomeMarkers.icon({{icon: \"{icon}\", prefix: \"fa\", markerColor: \"{color}\"}})}}).bindPopup({popup}, {{maxWidth: {width}}}).addTo({group});\n",
        lat = site.point.latitude,
        lon = site.point.longitude,
        icon = icon,
        color = color,
        // JSON string literal keeps quotes and backslashes out of the script
        popup = serde_json::to_string(&popup)?,
        width = POPUP_MAX_WIDTH,
        group = group,
    ))
}

// Titles from the export can carry angle brackets and ampersands
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
