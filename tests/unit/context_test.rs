// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{table, StaticIntrospector};
use panel_support::application::context::PanelContext;
use panel_support::application::use_cases::schema_reader::SchemaReader;
use panel_support::domain::models::model::DeclaredModel;
use panel_support::domain::repositories::model_registry::ModelRegistry;
use panel_support::domain::services::plural_rules::PluralRules;
use std::sync::Arc;

struct NoPlurals;

impl PluralRules for NoPlurals {
    fn plural_index(&self, _locale: &str, _count: u64) -> usize {
        0
    }
}

fn empty_context() -> PanelContext {
    PanelContext::new(
        Arc::new(ModelRegistry::new()),
        Arc::new(StaticIntrospector::new()),
    )
}

#[test]
fn test_locale_pluralization_follows_context_locale() {
    assert_eq!(empty_context().locale(), "en");
    assert!(empty_context().locale_has_pluralization());
    assert!(!empty_context().with_locale("ja").locale_has_pluralization());
    assert!(empty_context().with_locale("ru_RU").locale_has_pluralization());
}

#[test]
fn test_custom_plural_rules() {
    let context = empty_context().with_plural_rules(Arc::new(NoPlurals));
    assert!(!context.locale_has_pluralization());
}

#[test]
fn test_unknown_connection_is_an_error() {
    let context = empty_context();
    assert!(context.introspector(None).is_ok());
    assert!(context.introspector(Some("analytics")).is_err());
}

#[tokio::test]
async fn test_named_connection_is_used_for_model() {
    let registry = Arc::new(ModelRegistry::new());
    registry.register(
        DeclaredModel::new("app::models::Event", "events").on_connection("analytics"),
    );
    let analytics =
        StaticIntrospector::new().with_table(table("events", &["id", "name"], &["id"]));
    let context = PanelContext::new(registry, Arc::new(StaticIntrospector::new()))
        .with_connection("analytics", Arc::new(analytics));
    let reader = SchemaReader::new(Arc::new(context));

    let schema = reader.get_model_table("app::models::Event").await.unwrap();
    assert!(schema.has_column("name"));
}
