// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::context::PanelContext;
use crate::domain::models::table::TableSchema;
use std::sync::Arc;
use tracing::debug;

/// 模型结构读取用例
///
/// 把模型类型名解析为模型声明，再通过模型所用连接读取它的表结构。
pub struct SchemaReader {
    context: Arc<PanelContext>,
}

impl SchemaReader {
    pub fn new(context: Arc<PanelContext>) -> Self {
        Self { context }
    }

    /// 类型名已注册时原样返回
    pub fn get_model(&self, model: &str) -> Option<String> {
        self.context.registry().get_model(model)
    }

    /// 读取模型对应的表结构
    ///
    /// # 参数
    ///
    /// * `model` - 模型完整类型名
    ///
    /// # 返回值
    ///
    /// * `Some(TableSchema)` - 读取成功
    /// * `None` - 模型未注册，或读取失败（此时会输出一条运维警告）
    pub async fn get_model_table(&self, model: &str) -> Option<TableSchema> {
        let Some(resolved) = self.context.registry().resolve(model) else {
            debug!("Model {} is not registered", model);
            return None;
        };

        let result = match self.context.introspector(resolved.connection_name()) {
            Ok(introspector) => introspector.list_table_details(resolved.table()).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(schema) => Some(schema),
            Err(e) => {
                self.context.operator().warn(&format!(
                    "Unable to read table schema for model [{}]: {}",
                    model, e
                ));
                None
            }
        }
    }
}
