// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::column::Column;
use serde::Serialize;
use serde_json::{Map, Value};

/// 单列检查结果
#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    /// 列名
    pub name: String,
    /// 归一化后的存储类型
    #[serde(rename = "type")]
    pub column_type: String,
    pub nullable: bool,
    /// 注释中声明的属性，仅在指定属性为 true 时存在
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    /// 猜测的关联目标表
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_table: Option<String>,
    /// 目标表的标题列
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_column: Option<String>,
}

impl ColumnReport {
    pub fn from_column(column: &Column) -> Self {
        Self {
            name: column.name.clone(),
            column_type: column.column_type.to_string(),
            nullable: column.nullable,
            properties: None,
            related_table: None,
            title_column: None,
        }
    }
}

/// 整张表的检查结果
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    pub table: String,
    pub label: String,
    pub primary_key: Vec<String>,
    pub columns: Vec<ColumnReport>,
}
