// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 列存储类型
///
/// 由数据库声明的类型名归一化得到，方言差异（`int4`、`INTEGER`、
/// `bigserial` 等）在这里被折叠成同一个变体。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    SmallInt,
    Integer,
    BigInt,
    Boolean,
    Decimal,
    Float,
    String,
    Text,
    Date,
    DateTime,
    Time,
    Json,
    Guid,
    Binary,
    /// 无法识别的类型，保留原始声明
    Other(String),
}

impl ColumnType {
    /// 根据 SQL 声明的类型名解析
    ///
    /// 忽略大小写以及 `varchar(255)`、`numeric(10, 2)` 之类的长度参数。
    pub fn from_sql(declared: &str) -> Self {
        let lowered = declared.trim().to_ascii_lowercase();
        let base = lowered
            .split('(')
            .next()
            .unwrap_or_default()
            .trim()
            .trim_end_matches(" unsigned");

        match base {
            "smallint" | "int2" | "tinyint" | "smallserial" | "serial2" => ColumnType::SmallInt,
            "integer" | "int" | "int4" | "mediumint" | "serial" | "serial4" => ColumnType::Integer,
            "bigint" | "int8" | "bigserial" | "serial8" => ColumnType::BigInt,
            "boolean" | "bool" => ColumnType::Boolean,
            "numeric" | "decimal" | "money" => ColumnType::Decimal,
            "real" | "float" | "float4" | "float8" | "double" | "double precision" => {
                ColumnType::Float
            }
            "varchar" | "character varying" | "char" | "character" | "nvarchar" | "nchar"
            | "bpchar" | "citext" => ColumnType::String,
            "text" | "tinytext" | "mediumtext" | "longtext" | "clob" => ColumnType::Text,
            "date" => ColumnType::Date,
            "datetime"
            | "timestamp"
            | "timestamptz"
            | "timestamp without time zone"
            | "timestamp with time zone" => ColumnType::DateTime,
            "time" | "timetz" | "time without time zone" | "time with time zone" => {
                ColumnType::Time
            }
            "json" | "jsonb" => ColumnType::Json,
            "uuid" | "uniqueidentifier" => ColumnType::Guid,
            "blob" | "bytea" | "binary" | "varbinary" | "longblob" => ColumnType::Binary,
            _ => ColumnType::Other(declared.trim().to_string()),
        }
    }

    /// 是否为整数或大整数类型
    ///
    /// 外键猜测只把这两种类型视为可能的关联列。
    pub fn is_integer_key(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::BigInt)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColumnType::SmallInt => write!(f, "smallint"),
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::BigInt => write!(f, "bigint"),
            ColumnType::Boolean => write!(f, "boolean"),
            ColumnType::Decimal => write!(f, "decimal"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::String => write!(f, "string"),
            ColumnType::Text => write!(f, "text"),
            ColumnType::Date => write!(f, "date"),
            ColumnType::DateTime => write!(f, "datetime"),
            ColumnType::Time => write!(f, "time"),
            ColumnType::Json => write!(f, "json"),
            ColumnType::Guid => write!(f, "guid"),
            ColumnType::Binary => write!(f, "binary"),
            ColumnType::Other(declared) => write!(f, "{}", declared),
        }
    }
}

/// 列描述
///
/// 由结构读取服务产生，本库只读不改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// 列名
    pub name: String,
    /// 存储类型
    pub column_type: ColumnType,
    /// 列注释，部分数据库不支持
    pub comment: Option<String>,
    /// 是否允许为空
    pub nullable: bool,
}

impl Column {
    /// 创建一个可为空、无注释的列
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            comment: None,
            nullable: true,
        }
    }

    /// 设置列注释
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// 设置是否允许为空
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}
