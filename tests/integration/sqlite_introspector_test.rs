// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use panel_support::application::context::PanelContext;
use panel_support::application::use_cases::relationship_guesser::RelationshipGuesser;
use panel_support::domain::models::column::ColumnType;
use panel_support::domain::models::model::DeclaredModel;
use panel_support::domain::models::relationship::RelationshipGuess;
use panel_support::domain::repositories::model_registry::ModelRegistry;
use panel_support::domain::repositories::schema_repository::{SchemaError, SchemaIntrospector};
use panel_support::infrastructure::database::schema_introspector::SeaOrmSchemaIntrospector;
use panel_support::infrastructure::observability::tracing_channel::RecordingChannel;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;

const SCHEMA: &[&str] = &[
    "CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, email VARCHAR(255) NOT NULL, name TEXT)",
    "CREATE TABLE categories (id INTEGER PRIMARY KEY, title TEXT NOT NULL)",
    "CREATE TABLE posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id BIGINT NOT NULL,
        category_id INTEGER,
        body TEXT,
        published_at TIMESTAMP
    )",
    "CREATE TABLE post_tag (post_id INTEGER NOT NULL, tag_id INTEGER NOT NULL, PRIMARY KEY (tag_id, post_id))",
];

/// 单连接的内存数据库，保证所有语句落在同一个库上
async fn memory_db() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    for statement in SCHEMA {
        db.execute_unprepared(statement).await.unwrap();
    }
    Arc::new(db)
}

#[tokio::test]
async fn test_list_table_details_reads_columns_and_primary_key() {
    let introspector = SeaOrmSchemaIntrospector::new(memory_db().await);

    let posts = introspector.list_table_details("posts").await.unwrap();

    let names: Vec<&str> = posts.column_names().collect();
    assert_eq!(names, vec!["id", "user_id", "category_id", "body", "published_at"]);
    assert_eq!(posts.primary_key_column(), Some("id"));
    assert_eq!(posts.column("user_id").unwrap().column_type, ColumnType::BigInt);
    assert_eq!(posts.column("category_id").unwrap().column_type, ColumnType::Integer);
    assert_eq!(posts.column("published_at").unwrap().column_type, ColumnType::DateTime);
    assert!(!posts.column("user_id").unwrap().nullable);
    assert!(posts.column("category_id").unwrap().nullable);
    assert!(posts.column("body").unwrap().comment.is_none());

    let users = introspector.list_table_details("users").await.unwrap();
    assert_eq!(users.column("email").unwrap().column_type, ColumnType::String);
}

#[tokio::test]
async fn test_composite_primary_key_keeps_key_order() {
    let introspector = SeaOrmSchemaIntrospector::new(memory_db().await);

    let pivot = introspector.list_table_details("post_tag").await.unwrap();

    assert_eq!(
        pivot.primary_key.unwrap().columns,
        vec!["tag_id".to_string(), "post_id".to_string()]
    );
}

#[tokio::test]
async fn test_missing_table_is_an_error() {
    let introspector = SeaOrmSchemaIntrospector::new(memory_db().await);

    let result = introspector.list_table_details("comments").await;

    assert!(matches!(result, Err(SchemaError::TableNotFound(table)) if table == "comments"));
}

#[tokio::test]
async fn test_has_table() {
    let introspector = SeaOrmSchemaIntrospector::new(memory_db().await);

    assert!(introspector.has_table("users").await.unwrap());
    assert!(introspector.has_table("categories").await.unwrap());
    assert!(!introspector.has_table("category").await.unwrap());
}

#[tokio::test]
async fn test_guesses_relationships_against_live_schema() {
    let registry = Arc::new(ModelRegistry::new());
    registry.register(
        DeclaredModel::new("app::models::Post", "posts")
            .belongs_to("user", "app::models::User")
            .belongs_to("category", "app::models::Category"),
    );
    registry.register(DeclaredModel::new("app::models::User", "users"));
    registry.register(DeclaredModel::new("app::models::Category", "categories"));

    let db = memory_db().await;
    let channel = Arc::new(RecordingChannel::new());
    let introspector = Arc::new(SeaOrmSchemaIntrospector::new(db.clone()));
    let context = PanelContext::new(registry, introspector).with_operator(channel.clone());
    let guesser = RelationshipGuesser::new(Arc::new(context));
    let posts = SeaOrmSchemaIntrospector::new(db)
        .list_table_details("posts")
        .await
        .unwrap();

    let user_id = posts.column("user_id").unwrap();
    assert_eq!(
        guesser.guess(user_id, "app::models::Post").await,
        Some(RelationshipGuess {
            accessor: "user".to_string(),
            table: Some("users".to_string()),
            title_column: "name".to_string(),
        })
    );

    let category_id = posts.column("category_id").unwrap();
    assert_eq!(
        guesser.guess(category_id, "app::models::Post").await,
        Some(RelationshipGuess {
            accessor: "category".to_string(),
            table: Some("categories".to_string()),
            title_column: "title".to_string(),
        })
    );

    let body = posts.column("body").unwrap();
    assert_eq!(guesser.guess(body, "app::models::Post").await, None);
    assert!(channel.messages().is_empty());
}

