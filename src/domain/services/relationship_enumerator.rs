// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::model::PanelModel;
use crate::domain::models::relationship::RelationshipSummary;
use std::collections::BTreeMap;
use tracing::debug;

/// 列出模型声明的全部关联
///
/// 只考虑公开、非静态、无参数的方法。逐个调用模型的关联钩子，
/// 返回关联的方法以方法名为键记录关联类型与关联模型；
/// 调用失败的方法直接跳过。
pub fn get_model_relationships(model: &dyn PanelModel) -> BTreeMap<String, RelationshipSummary> {
    let mut relationships = BTreeMap::new();

    for method in model.methods().iter().filter(|m| m.is_plain_accessor()) {
        match model.relationship(&method.name) {
            Ok(Some(relationship)) => {
                relationships.insert(method.name.clone(), relationship.into());
            }
            Ok(None) => {}
            Err(e) => {
                debug!(
                    "Skipping method {} on {}: {}",
                    method.name,
                    model.class_name(),
                    e
                );
            }
        }
    }

    relationships
}
