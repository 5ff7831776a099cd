pub mod film;
pub mod geo;
pub mod site;

pub use film::FilmEntry;
pub use geo::GeoPoint;
pub use site::FilmSite;
