pub mod constants;
pub mod coordinates;
pub mod progress;

pub use constants::*;
pub use coordinates::{dms_to_decimal, haversine_distance, parse_coordinate};
pub use progress::ProgressReporter;
