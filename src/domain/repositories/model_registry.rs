// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::model::PanelModel;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// 模型注册表
///
/// 以完整类型名为键保存模型声明，调用方在每次请求时按名称解析。
#[derive(Default)]
pub struct ModelRegistry {
    models: DashMap<String, Arc<dyn PanelModel>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册模型，同名模型会被替换
    pub fn register<M>(&self, model: M)
    where
        M: PanelModel + 'static,
    {
        self.register_arc(Arc::new(model));
    }

    /// 注册已共享的模型
    pub fn register_arc(&self, model: Arc<dyn PanelModel>) {
        let class_name = model.class_name().to_string();
        debug!("Registering model {} (table {})", class_name, model.table());
        self.models.insert(class_name, model);
    }

    /// 按类型名解析模型
    ///
    /// 未注册时返回 `None`。
    pub fn resolve(&self, identifier: &str) -> Option<Arc<dyn PanelModel>> {
        self.models
            .get(identifier)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// 类型名已注册时原样返回，否则返回 `None`
    pub fn get_model(&self, identifier: &str) -> Option<String> {
        self.models
            .contains_key(identifier)
            .then(|| identifier.to_string())
    }

    /// 已注册的模型数量
    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
