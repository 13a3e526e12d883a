use axum::extract::{FromRequest, Path, State};
use axum::{Extension, Json};
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, NotSet, Set};
use std::sync::Arc;
use tracing::{debug, info};

use greenroom_auth::Claims;
use greenroom_db::entities::{actor, movie};

use crate::error::ApiError;
use crate::models::*;
use crate::AppState;

/// JSON extractor whose rejections render the response envelope: an
/// unreadable body is a 400, a body with wrongly-typed fields a 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Public index route
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = IndexResponse)
    ),
    tag = "system"
)]
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse { success: true })
}

// Actors ------------------------------

/// List all actors
#[utoipa::path(
    get,
    path = "/actors",
    responses(
        (status = 200, description = "List of actors", body = ActorListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Insufficient permission", body = ErrorBody)
    ),
    tag = "actors"
)]
pub async fn list_actors(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
) -> Result<Json<ActorListResponse>, ApiError> {
    debug!("listing actors");

    let actors = actor::Entity::find().all(&state.db).await?;
    let actors: Vec<Actor> = actors.into_iter().map(Actor::from).collect();

    Ok(Json(ActorListResponse {
        success: true,
        number_actors: actors.len(),
        actors,
    }))
}

/// Get a specific actor by id
#[utoipa::path(
    get,
    path = "/actors/{id}",
    params(
        ("id" = i32, Path, description = "Actor id")
    ),
    responses(
        (status = 200, description = "Actor record", body = ActorResponse),
        (status = 404, description = "Actor not found", body = ErrorBody)
    ),
    tag = "actors"
)]
pub async fn get_actor(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<ActorResponse>, ApiError> {
    debug!("getting actor: {}", id);

    let found = actor::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(ActorResponse {
        success: true,
        actor: found.into(),
    }))
}

/// Create an actor
#[utoipa::path(
    post,
    path = "/actors",
    request_body = ActorPayload,
    responses(
        (status = 200, description = "Actor created", body = AddedActorResponse),
        (status = 400, description = "Required fields missing", body = ErrorBody)
    ),
    tag = "actors"
)]
pub async fn create_actor(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
    AppJson(payload): AppJson<ActorPayload>,
) -> Result<Json<AddedActorResponse>, ApiError> {
    let name = payload.name.ok_or(ApiError::BadRequest)?;
    let age = payload.age.ok_or(ApiError::BadRequest)?;
    let gender = payload.gender.ok_or(ApiError::BadRequest)?;

    let inserted = actor::ActiveModel {
        id: NotSet,
        name: Set(name),
        age: Set(age),
        gender: Set(gender),
    }
    .insert(&state.db)
    .await?;

    info!(id = inserted.id, "added actor");

    Ok(Json(AddedActorResponse {
        success: true,
        added_actor: inserted.into(),
    }))
}

/// Update an actor. Only the fields present in the body change.
#[utoipa::path(
    patch,
    path = "/actors/{id}",
    params(
        ("id" = i32, Path, description = "Actor id")
    ),
    request_body = ActorPayload,
    responses(
        (status = 200, description = "Actor updated", body = UpdatedActorResponse),
        (status = 404, description = "Actor not found", body = ErrorBody)
    ),
    tag = "actors"
)]
pub async fn update_actor(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<ActorPayload>,
) -> Result<Json<UpdatedActorResponse>, ApiError> {
    let existing = actor::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound)?;

    let mut update: actor::ActiveModel = existing.into();
    if let Some(name) = payload.name {
        update.name = Set(name);
    }
    if let Some(age) = payload.age {
        update.age = Set(age);
    }
    if let Some(gender) = payload.gender {
        update.gender = Set(gender);
    }

    let updated = update.update(&state.db).await?;

    info!(id = updated.id, "updated actor");

    Ok(Json(UpdatedActorResponse {
        success: true,
        updated_actor: updated.into(),
    }))
}

/// Delete an actor. Existence is checked before the delete.
#[utoipa::path(
    delete,
    path = "/actors/{id}",
    params(
        ("id" = i32, Path, description = "Actor id")
    ),
    responses(
        (status = 200, description = "Actor deleted", body = DeletedActorResponse),
        (status = 404, description = "Actor not found", body = ErrorBody)
    ),
    tag = "actors"
)]
pub async fn delete_actor(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedActorResponse>, ApiError> {
    let existing = actor::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound)?;

    let deleted: Actor = existing.clone().into();
    existing.delete(&state.db).await?;

    info!(id = deleted.id, "deleted actor");

    Ok(Json(DeletedActorResponse {
        success: true,
        deleted_actor: deleted,
    }))
}

// Movies ------------------------------

/// List all movies
#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "List of movies", body = MovieListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 403, description = "Insufficient permission", body = ErrorBody)
    ),
    tag = "movies"
)]
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
) -> Result<Json<MovieListResponse>, ApiError> {
    debug!("listing movies");

    let movies = movie::Entity::find().all(&state.db).await?;
    let movies: Vec<Movie> = movies.into_iter().map(Movie::from).collect();

    Ok(Json(MovieListResponse {
        success: true,
        number_movies: movies.len(),
        movies,
    }))
}

/// Get a specific movie by id
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie id")
    ),
    responses(
        (status = 200, description = "Movie record", body = MovieResponse),
        (status = 404, description = "Movie not found", body = ErrorBody)
    ),
    tag = "movies"
)]
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<MovieResponse>, ApiError> {
    debug!("getting movie: {}", id);

    let found = movie::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(MovieResponse {
        success: true,
        movie: found.into(),
    }))
}

/// Create a movie
#[utoipa::path(
    post,
    path = "/movies",
    request_body = MoviePayload,
    responses(
        (status = 200, description = "Movie created", body = AddedMovieResponse),
        (status = 400, description = "Required fields missing", body = ErrorBody)
    ),
    tag = "movies"
)]
pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
    AppJson(payload): AppJson<MoviePayload>,
) -> Result<Json<AddedMovieResponse>, ApiError> {
    let title = payload.title.ok_or(ApiError::BadRequest)?;
    let release_date = payload.release_date.ok_or(ApiError::BadRequest)?;

    let inserted = movie::ActiveModel {
        id: NotSet,
        title: Set(title),
        release_date: Set(release_date),
    }
    .insert(&state.db)
    .await?;

    info!(id = inserted.id, "added movie");

    Ok(Json(AddedMovieResponse {
        success: true,
        added_movie: inserted.into(),
    }))
}

/// Update a movie. Only the fields present in the body change.
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie id")
    ),
    request_body = MoviePayload,
    responses(
        (status = 200, description = "Movie updated", body = UpdatedMovieResponse),
        (status = 404, description = "Movie not found", body = ErrorBody)
    ),
    tag = "movies"
)]
pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<MoviePayload>,
) -> Result<Json<UpdatedMovieResponse>, ApiError> {
    let existing = movie::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound)?;

    let mut update: movie::ActiveModel = existing.into();
    if let Some(title) = payload.title {
        update.title = Set(title);
    }
    if let Some(release_date) = payload.release_date {
        update.release_date = Set(release_date);
    }

    let updated = update.update(&state.db).await?;

    info!(id = updated.id, "updated movie");

    Ok(Json(UpdatedMovieResponse {
        success: true,
        updated_movie: updated.into(),
    }))
}

/// Delete a movie. Existence is checked before the delete.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie id")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = DeletedMovieResponse),
        (status = 404, description = "Movie not found", body = ErrorBody)
    ),
    tag = "movies"
)]
pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Extension(_claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedMovieResponse>, ApiError> {
    let existing = movie::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or(ApiError::NotFound)?;

    let deleted: Movie = existing.clone().into();
    existing.delete(&state.db).await?;

    info!(id = deleted.id, "deleted movie");

    Ok(Json(DeletedMovieResponse {
        success: true,
        deleted_movie: deleted,
    }))
}

/// Fallback for unknown paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
