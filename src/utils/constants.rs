/// Filmography export layout (IMDb locations.list)
pub const BANNER_LINE_COUNT: usize = 14;
pub const TRAILER_LINE_COUNT: usize = 1;

/// Geocoding service endpoints
pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const ARCGIS_URL: &str =
    "https://geocode.arcgis.com/arcgis/rest/services/World/GeocodeServer";

/// Ranking defaults
pub const DEFAULT_CLOSEST_COUNT: usize = 10;

/// Map rendering defaults
pub const DEFAULT_OUTPUT_FILE: &str = "web_map.html";
pub const DEFAULT_ZOOM: u8 = 2;
pub const POPUP_MAX_WIDTH: u32 = 300;

/// Marker styling (Leaflet.awesome-markers colours, Font Awesome icons)
pub const ORIGIN_MARKER_COLOR: &str = "beige";
pub const ORIGIN_MARKER_ICON: &str = "user";
pub const CLOSEST_MARKER_COLOR: &str = "lightred";
pub const CLOSEST_MARKER_ICON: &str = "film";
pub const USA_MARKER_COLOR: &str = "darkblue";
pub const USA_MARKER_ICON: &str = "flag";

/// Browser-side map stack, pinned CDN builds
pub const LEAFLET_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS_URL: &str = "https://cdn.jsdelivr.net/npm/leaflet@1.9.4/dist/leaflet.js";
pub const AWESOME_MARKERS_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css";
pub const AWESOME_MARKERS_JS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.min.js";
pub const FONT_AWESOME_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
