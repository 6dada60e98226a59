// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::table::TableSchema;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 结构读取错误
#[derive(Error, Debug)]
pub enum SchemaError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 表不存在
    #[error("Table [{0}] does not exist")]
    TableNotFound(String),
    /// 不支持的数据库驱动
    #[error("Unsupported database backend: {0}")]
    UnsupportedBackend(String),
    /// 未配置的连接
    #[error("Database connection [{0}] is not configured")]
    ConnectionNotConfigured(String),
}

/// 数据库结构读取特质
///
/// 读取实时的表与列元数据，具体实现由基础设施层提供。
#[async_trait]
pub trait SchemaIntrospector: Send + Sync {
    /// 读取表的完整结构
    ///
    /// # 参数
    ///
    /// * `table` - 表名
    ///
    /// # 返回值
    ///
    /// * `Ok(TableSchema)` - 表结构，包括列与主键
    /// * `Err(SchemaError)` - 表不存在或读取失败
    async fn list_table_details(&self, table: &str) -> Result<TableSchema, SchemaError>;

    /// 检查表是否存在
    async fn has_table(&self, table: &str) -> Result<bool, SchemaError>;
}
