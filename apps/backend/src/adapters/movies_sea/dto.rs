//! DTOs for movies_sea adapter.

use time::OffsetDateTime;

/// DTO for creating a new movie.
#[derive(Debug, Clone)]
pub struct MovieCreate {
    pub title: String,
    pub release: OffsetDateTime,
}

impl MovieCreate {
    pub fn new(title: impl Into<String>, release: OffsetDateTime) -> Self {
        Self {
            title: title.into(),
            release,
        }
    }
}

/// DTO for updating a movie.
#[derive(Debug, Clone)]
pub struct MovieUpdate {
    pub id: i32,
    pub title: String,
    pub release: OffsetDateTime,
}
