pub mod filmography_reader;

pub use filmography_reader::FilmographyReader;
