// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use panel_support::domain::models::model::{
    DeclaredModel, MethodSignature, ModelError, PanelModel, ReturnType, Visibility,
};
use panel_support::domain::models::relationship::{RelationKind, Relationship};
use panel_support::domain::services::relationship_enumerator::get_model_relationships;
use serde_json::json;

/// 每个方法都会返回关联，用来验证过滤条件
struct EagerModel {
    methods: Vec<MethodSignature>,
}

impl EagerModel {
    fn new() -> Self {
        Self {
            methods: vec![
                MethodSignature::new("author"),
                MethodSignature::new("query").as_static(),
                MethodSignature::new("scopePublished").with_parameters(1),
                MethodSignature::new("secret").with_visibility(Visibility::Protected),
                MethodSignature::new("hidden").with_visibility(Visibility::Private),
                MethodSignature::new("explode"),
                MethodSignature::new("summary").returns(ReturnType::Named("String".into())),
            ],
        }
    }
}

impl PanelModel for EagerModel {
    fn class_name(&self) -> &str {
        "app::models::Post"
    }

    fn table(&self) -> &str {
        "posts"
    }

    fn methods(&self) -> &[MethodSignature] {
        &self.methods
    }

    fn relationship(&self, method: &str) -> Result<Option<Relationship>, ModelError> {
        match method {
            "explode" => Err(ModelError::Invocation {
                method: method.to_string(),
                reason: "undefined index".to_string(),
            }),
            "summary" => Ok(None),
            _ => Ok(Some(Relationship::new(
                RelationKind::BelongsTo,
                "app::models::User",
            ))),
        }
    }
}

#[test]
fn test_only_public_instance_accessors_are_invoked() {
    let relationships = get_model_relationships(&EagerModel::new());

    assert_eq!(relationships.len(), 1);
    let author = &relationships["author"];
    assert_eq!(author.kind, "BelongsTo");
    assert_eq!(author.model, "app::models::User");
}

#[test]
fn test_declared_model_relationships_serialize() {
    let post = DeclaredModel::new("app::models::Post", "posts")
        .belongs_to("author", "app::models::User")
        .has_many("comments", "app::models::Comment")
        .belongs_to_many("tags", "app::models::Tag")
        .method(MethodSignature::new("excerpt"));

    let relationships = get_model_relationships(&post);

    assert_eq!(
        serde_json::to_value(&relationships).unwrap(),
        json!({
            "author": { "type": "BelongsTo", "model": "app::models::User" },
            "comments": { "type": "HasMany", "model": "app::models::Comment" },
            "tags": { "type": "BelongsToMany", "model": "app::models::Tag" },
        })
    );
}

#[test]
fn test_model_without_methods_has_no_relationships() {
    let post = DeclaredModel::new("app::models::Post", "posts");
    assert!(get_model_relationships(&post).is_empty());
}
