//! Integration tests for greenroom-db
//!
//! Tests database operations with real SQLite in-memory database

use chrono::NaiveDate;
use greenroom_db::{connect, entities::actor, entities::movie, migrate};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet, Set};

/// Helper to create a test database
async fn setup_test_db() -> sea_orm::DatabaseConnection {
    let db = connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    migrate(&db).await.expect("Failed to run migrations");

    db
}

#[tokio::test]
async fn test_database_connection() {
    let db = connect("sqlite::memory:").await.expect("Failed to connect");

    let backend = db.get_database_backend();
    assert!(matches!(backend, sea_orm::DatabaseBackend::Sqlite));
}

#[tokio::test]
async fn test_migrations_run_successfully() {
    let db = connect("sqlite::memory:").await.expect("Failed to connect");

    let result = migrate(&db).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_create_and_fetch_actor() {
    let db = setup_test_db().await;

    let new_actor = actor::ActiveModel {
        id: NotSet,
        name: Set("John Doe".to_string()),
        age: Set(35),
        gender: Set("male".to_string()),
    };

    let inserted = new_actor.insert(&db).await.expect("Failed to insert actor");
    assert!(inserted.id > 0);
    assert_eq!(inserted.name, "John Doe");

    let fetched = actor::Entity::find_by_id(inserted.id)
        .one(&db)
        .await
        .expect("Failed to query actor")
        .expect("Actor should exist");

    assert_eq!(fetched.name, "John Doe");
    assert_eq!(fetched.age, 35);
    assert_eq!(fetched.gender, "male");
}

#[tokio::test]
async fn test_update_actor() {
    let db = setup_test_db().await;

    let inserted = actor::ActiveModel {
        id: NotSet,
        name: Set("Jane Smith".to_string()),
        age: Set(28),
        gender: Set("female".to_string()),
    }
    .insert(&db)
    .await
    .expect("Failed to insert actor");

    let mut update: actor::ActiveModel = inserted.clone().into();
    update.age = Set(29);
    let updated = update.update(&db).await.expect("Failed to update actor");

    assert_eq!(updated.id, inserted.id);
    assert_eq!(updated.age, 29);
    assert_eq!(updated.name, "Jane Smith");
}

#[tokio::test]
async fn test_delete_actor_is_gone() {
    let db = setup_test_db().await;

    let inserted = actor::ActiveModel {
        id: NotSet,
        name: Set("One Shot".to_string()),
        age: Set(50),
        gender: Set("male".to_string()),
    }
    .insert(&db)
    .await
    .expect("Failed to insert actor");

    let id = inserted.id;
    inserted.delete(&db).await.expect("Failed to delete actor");

    let found = actor::Entity::find_by_id(id)
        .one(&db)
        .await
        .expect("Failed to query actor");
    assert!(found.is_none());
}

#[tokio::test]
async fn test_create_and_list_movies() {
    let db = setup_test_db().await;

    let release = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    movie::ActiveModel {
        id: NotSet,
        title: Set("The Late Call".to_string()),
        release_date: Set(release),
    }
    .insert(&db)
    .await
    .expect("Failed to insert movie");

    movie::ActiveModel {
        id: NotSet,
        title: Set("Second Billing".to_string()),
        release_date: Set(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()),
    }
    .insert(&db)
    .await
    .expect("Failed to insert movie");

    let all = movie::Entity::find()
        .all(&db)
        .await
        .expect("Failed to list movies");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].release_date, release);
}

#[tokio::test]
async fn test_find_missing_id_returns_none() {
    let db = setup_test_db().await;

    let found = actor::Entity::find_by_id(999)
        .one(&db)
        .await
        .expect("Failed to query actor");
    assert!(found.is_none());

    let found = movie::Entity::find_by_id(999)
        .one(&db)
        .await
        .expect("Failed to query movie");
    assert!(found.is_none());
}
