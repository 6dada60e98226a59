// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{context, table, StaticIntrospector};
use panel_support::application::use_cases::schema_reader::SchemaReader;
use panel_support::domain::models::model::DeclaredModel;
use panel_support::domain::repositories::model_registry::ModelRegistry;

#[tokio::test]
async fn test_reads_registered_model_table() {
    let registry = ModelRegistry::new();
    registry.register(DeclaredModel::new("app::models::Post", "posts"));
    let introspector =
        StaticIntrospector::new().with_table(table("posts", &["id", "title"], &["id"]));
    let (context, channel) = context(registry, introspector);
    let reader = SchemaReader::new(context);

    let schema = reader.get_model_table("app::models::Post").await.unwrap();
    assert_eq!(schema.name, "posts");
    assert_eq!(schema.primary_key_column(), Some("id"));
    assert!(channel.messages().is_empty());
}

#[tokio::test]
async fn test_unknown_model_is_absent_without_warning() {
    let (context, channel) = context(ModelRegistry::new(), StaticIntrospector::new());
    let reader = SchemaReader::new(context);

    assert!(reader.get_model("app::models::Missing").is_none());
    assert!(reader.get_model_table("app::models::Missing").await.is_none());
    assert!(channel.messages().is_empty());
}

#[tokio::test]
async fn test_missing_table_warns() {
    let registry = ModelRegistry::new();
    registry.register(DeclaredModel::new("app::models::Post", "posts"));
    let (context, channel) = context(registry, StaticIntrospector::new());
    let reader = SchemaReader::new(context);

    assert!(reader.get_model_table("app::models::Post").await.is_none());
    assert_eq!(
        channel.messages(),
        vec![
            "Unable to read table schema for model [app::models::Post]: Table [posts] does not exist"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn test_unconfigured_connection_warns() {
    let registry = ModelRegistry::new();
    registry.register(
        DeclaredModel::new("app::models::Event", "events").on_connection("analytics"),
    );
    let introspector =
        StaticIntrospector::new().with_table(table("events", &["id"], &["id"]));
    let (context, channel) = context(registry, introspector);
    let reader = SchemaReader::new(context);

    assert!(reader.get_model_table("app::models::Event").await.is_none());
    let messages = channel.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Database connection [analytics] is not configured"));
}
