pub mod actors;
pub mod movies;

pub use actors::Entity as Actors;
pub use actors::Model as Actor;
pub use movies::Entity as Movies;
pub use movies::Model as Movie;
