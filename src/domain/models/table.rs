// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::column::Column;
use serde::{Deserialize, Serialize};

/// 主键
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKey {
    /// 主键列，按声明顺序排列
    pub columns: Vec<String>,
}

/// 数据表结构快照
///
/// 每次调用时即时读取，不做缓存。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// 表名
    pub name: String,
    /// 列，按声明顺序排列
    pub columns: Vec<Column>,
    /// 主键，没有声明时为空
    pub primary_key: Option<PrimaryKey>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            primary_key: None,
        }
    }

    /// 设置主键列
    pub fn with_primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        self.primary_key = if columns.is_empty() {
            None
        } else {
            Some(PrimaryKey { columns })
        };
        self
    }

    /// 所有列名
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// 是否存在指定列
    pub fn has_column(&self, name: &str) -> bool {
        self.column_names().any(|c| c == name)
    }

    /// 按名称查找列
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// 主键的第一列
    pub fn primary_key_column(&self) -> Option<&str> {
        self.primary_key
            .as_ref()
            .and_then(|pk| pk.columns.first())
            .map(String::as_str)
    }
}
