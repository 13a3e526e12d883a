//! Database entities

pub mod actor;
pub mod movie;

pub use actor::Entity as Actor;
pub use movie::Entity as Movie;

pub mod prelude {
    pub use super::actor::Entity as Actor;
    pub use super::movie::Entity as Movie;
}
