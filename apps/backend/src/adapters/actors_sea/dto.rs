//! DTOs for actors_sea adapter.

/// DTO for creating a new actor.
#[derive(Debug, Clone)]
pub struct ActorCreate {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

impl ActorCreate {
    pub fn new(name: impl Into<String>, age: i32, gender: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            gender: gender.into(),
        }
    }
}

/// DTO for updating an actor. Age is not updatable.
#[derive(Debug, Clone)]
pub struct ActorUpdate {
    pub id: i32,
    pub name: String,
    pub gender: String,
}
