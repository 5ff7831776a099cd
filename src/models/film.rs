use validator::Validate;

/// A filmography row that matched the requested year, before geocoding
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct FilmEntry {
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(length(min = 1))]
    pub location: String,
}

impl FilmEntry {
    pub fn new(title: String, location: String) -> Self {
        Self { title, location }
    }
}
