use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use greenroom_db::entities::{actor, movie};

/// Actor record as served by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Actor {
    /// Actor id
    pub id: i32,
    /// Actor's full name
    pub name: String,
    /// Age in years
    pub age: i32,
    /// Gender as free text
    pub gender: String,
}

impl From<actor::Model> for Actor {
    fn from(model: actor::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
            gender: model.gender,
        }
    }
}

/// Movie record as served by the API
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    /// Movie id
    pub id: i32,
    /// Movie title
    pub title: String,
    /// Theatrical release date
    pub release_date: NaiveDate,
}

impl From<movie::Model> for Movie {
    fn from(model: movie::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            release_date: model.release_date,
        }
    }
}

/// Actor fields accepted on create and update.
///
/// Everything is optional at the wire level; POST checks each required field
/// itself so a missing one is a 400 rather than a deserialization rejection,
/// and PATCH applies only the fields that are present.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ActorPayload {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

/// Movie fields accepted on create and update. `date` is accepted as an
/// alias for `release_date`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct MoviePayload {
    pub title: Option<String>,
    #[serde(alias = "date")]
    pub release_date: Option<NaiveDate>,
}

/// Index response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndexResponse {
    pub success: bool,
}

/// List of actors
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActorListResponse {
    pub success: bool,
    pub number_actors: usize,
    pub actors: Vec<Actor>,
}

/// A single actor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActorResponse {
    pub success: bool,
    pub actor: Actor,
}

/// Response after creating an actor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddedActorResponse {
    pub success: bool,
    pub added_actor: Actor,
}

/// Response after updating an actor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatedActorResponse {
    pub success: bool,
    pub updated_actor: Actor,
}

/// Response after deleting an actor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedActorResponse {
    pub success: bool,
    pub deleted_actor: Actor,
}

/// List of movies
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovieListResponse {
    pub success: bool,
    pub number_movies: usize,
    pub movies: Vec<Movie>,
}

/// A single movie
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovieResponse {
    pub success: bool,
    pub movie: Movie,
}

/// Response after creating a movie
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddedMovieResponse {
    pub success: bool,
    pub added_movie: Movie,
}

/// Response after updating a movie
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdatedMovieResponse {
    pub success: bool,
    pub updated_movie: Movie,
}

/// Response after deleting a movie
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedMovieResponse {
    pub success: bool,
    pub deleted_movie: Movie,
}

/// Error envelope: `success` is always false, `error` is the numeric HTTP
/// status, `message` the failure description.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: String,
}
