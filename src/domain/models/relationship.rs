// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 关联类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    BelongsTo,
    BelongsToMany,
    HasOne,
    HasMany,
    HasOneThrough,
    HasManyThrough,
    MorphTo,
    MorphOne,
    MorphMany,
    MorphToMany,
}

impl RelationKind {
    /// 关联类型的短名称，例如 `BelongsTo`
    pub fn short_name(&self) -> &'static str {
        match self {
            RelationKind::BelongsTo => "BelongsTo",
            RelationKind::BelongsToMany => "BelongsToMany",
            RelationKind::HasOne => "HasOne",
            RelationKind::HasMany => "HasMany",
            RelationKind::HasOneThrough => "HasOneThrough",
            RelationKind::HasManyThrough => "HasManyThrough",
            RelationKind::MorphTo => "MorphTo",
            RelationKind::MorphOne => "MorphOne",
            RelationKind::MorphMany => "MorphMany",
            RelationKind::MorphToMany => "MorphToMany",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for RelationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BelongsTo" => Ok(RelationKind::BelongsTo),
            "BelongsToMany" => Ok(RelationKind::BelongsToMany),
            "HasOne" => Ok(RelationKind::HasOne),
            "HasMany" => Ok(RelationKind::HasMany),
            "HasOneThrough" => Ok(RelationKind::HasOneThrough),
            "HasManyThrough" => Ok(RelationKind::HasManyThrough),
            "MorphTo" => Ok(RelationKind::MorphTo),
            "MorphOne" => Ok(RelationKind::MorphOne),
            "MorphMany" => Ok(RelationKind::MorphMany),
            "MorphToMany" => Ok(RelationKind::MorphToMany),
            _ => Err(format!("Invalid relation kind: {}", s)),
        }
    }
}

/// 模型声明的关联
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// 关联类型
    pub kind: RelationKind,
    /// 关联模型的完整类型名
    pub related: String,
}

impl Relationship {
    pub fn new(kind: RelationKind, related: impl Into<String>) -> Self {
        Self {
            kind,
            related: related.into(),
        }
    }
}

/// 关联枚举结果中的一项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipSummary {
    /// 关联类型短名称
    #[serde(rename = "type")]
    pub kind: String,
    /// 关联模型的完整类型名
    pub model: String,
}

impl From<Relationship> for RelationshipSummary {
    fn from(relationship: Relationship) -> Self {
        Self {
            kind: relationship.kind.short_name().to_string(),
            model: relationship.related,
        }
    }
}

/// 从列名推断出的归属关联
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipGuess {
    /// 关联访问方法名
    pub accessor: String,
    /// 目标表名，对应的表不存在时为空
    pub table: Option<String>,
    /// 用于展示关联记录的标题列
    pub title_column: String,
}
