// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use panel_support::application::context::PanelContext;
use panel_support::domain::models::column::{Column, ColumnType};
use panel_support::domain::models::table::TableSchema;
use panel_support::domain::repositories::model_registry::ModelRegistry;
use panel_support::domain::repositories::schema_repository::{SchemaError, SchemaIntrospector};
use panel_support::infrastructure::observability::tracing_channel::RecordingChannel;
use sea_orm::DbErr;
use std::collections::HashMap;
use std::sync::Arc;

/// 内存中的表结构读取器
#[derive(Default)]
pub struct StaticIntrospector {
    tables: HashMap<String, TableSchema>,
    failing: bool,
}

impl StaticIntrospector {
    pub fn new() -> Self {
        Self::default()
    }

    /// 所有调用都返回连接错误
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn with_table(mut self, schema: TableSchema) -> Self {
        self.tables.insert(schema.name.clone(), schema);
        self
    }

    fn check(&self) -> Result<(), SchemaError> {
        if self.failing {
            return Err(SchemaError::Database(DbErr::Custom(
                "connection refused".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SchemaIntrospector for StaticIntrospector {
    async fn list_table_details(&self, table: &str) -> Result<TableSchema, SchemaError> {
        self.check()?;
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| SchemaError::TableNotFound(table.to_string()))
    }

    async fn has_table(&self, table: &str) -> Result<bool, SchemaError> {
        self.check()?;
        Ok(self.tables.contains_key(table))
    }
}

/// 只有列名的表结构，列类型统一为字符串
pub fn table(name: &str, columns: &[&str], primary_key: &[&str]) -> TableSchema {
    TableSchema::new(
        name,
        columns
            .iter()
            .map(|c| Column::new(*c, ColumnType::String))
            .collect(),
    )
    .with_primary_key(primary_key.iter().copied())
}

/// 构建带记录通道的上下文
pub fn context(
    registry: ModelRegistry,
    introspector: StaticIntrospector,
) -> (Arc<PanelContext>, Arc<RecordingChannel>) {
    let channel = Arc::new(RecordingChannel::new());
    let context = PanelContext::new(Arc::new(registry), Arc::new(introspector))
        .with_operator(channel.clone());
    (Arc::new(context), channel)
}
