// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::schema_reader::SchemaReader;
use crate::application::context::PanelContext;
use crate::domain::models::column::Column;
use crate::domain::models::model::ReturnType;
use crate::domain::models::relationship::{RelationKind, RelationshipGuess};
use crate::domain::repositories::schema_repository::SchemaError;
use crate::utils::inflector::{camel, plural, strip_id_suffix};
use std::sync::Arc;
use tracing::debug;

/// 无法读取结构或没有主键时使用的标题列
pub const DEFAULT_TITLE_COLUMN: &str = "id";

/// 优先作为标题列的列名，按顺序尝试
pub const TITLE_COLUMN_CANDIDATES: [&str; 2] = ["name", "title"];

/// 归属关联猜测用例
///
/// 根据外键列名推断关联访问方法、目标表与标题列。
/// 所有结果都是启发式的，失败时返回空而不是报错。
pub struct RelationshipGuesser {
    context: Arc<PanelContext>,
    schema_reader: SchemaReader,
}

impl RelationshipGuesser {
    pub fn new(context: Arc<PanelContext>) -> Self {
        let schema_reader = SchemaReader::new(context.clone());
        Self {
            context,
            schema_reader,
        }
    }

    /// 猜测关联访问方法名
    ///
    /// 先按去掉 `_id` 的列名查找方法，找不到再尝试小驼峰形式。
    /// 方法未声明返回类型且列为整数类型时直接接受，
    /// 否则返回类型必须恰好是归属关联。
    ///
    /// # 参数
    ///
    /// * `column` - 外键列
    /// * `model` - 拥有该列的模型类型名
    pub fn guess_relationship_name(&self, column: &Column, model: &str) -> Option<String> {
        let resolved = self.context.registry().resolve(model)?;

        let mut candidate = strip_id_suffix(&column.name).to_string();
        if !resolved.has_method(&candidate) {
            candidate = camel(&candidate);
        }
        if !resolved.has_method(&candidate) {
            return None;
        }

        let method = match resolved.method(&candidate) {
            Ok(method) => method,
            Err(e) => {
                debug!("Cannot inspect {} on {}: {}", candidate, model, e);
                return None;
            }
        };

        match &method.return_type {
            None if column.column_type.is_integer_key() => Some(candidate),
            Some(ReturnType::Relation(RelationKind::BelongsTo)) => Some(candidate),
            _ => None,
        }
    }

    /// 猜测关联的目标表名
    ///
    /// 依次尝试复数形式与原始形式，都不存在时返回 `None`。
    /// 检查出错时只发出一次警告并放弃后续尝试。
    pub async fn guess_relationship_table_name(&self, column: &Column) -> Option<String> {
        let table = strip_id_suffix(&column.name);
        let plural_table = plural(table);

        match self.table_exists(&plural_table).await {
            Ok(true) => return Some(plural_table),
            Ok(false) => {}
            Err(e) => {
                self.warn_table_check(&plural_table, &e);
                return None;
            }
        }

        match self.table_exists(table).await {
            Ok(true) => Some(table.to_string()),
            Ok(false) => None,
            Err(e) => {
                self.warn_table_check(table, &e);
                None
            }
        }
    }

    /// 猜测模型的标题列
    ///
    /// 优先 `name`，其次 `title`，否则使用主键的第一列；
    /// 无法读取表结构时返回 `id`。
    pub async fn guess_relationship_title_column_name(&self, model: &str) -> String {
        let Some(schema) = self.schema_reader.get_model_table(model).await else {
            return DEFAULT_TITLE_COLUMN.to_string();
        };

        TITLE_COLUMN_CANDIDATES
            .iter()
            .find(|candidate| schema.has_column(candidate))
            .map(|candidate| candidate.to_string())
            .or_else(|| schema.primary_key_column().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_TITLE_COLUMN.to_string())
    }

    /// 完整猜测一列对应的归属关联
    ///
    /// 访问方法名是必需的；标题列在关联模型上猜测，
    /// 关联模型未知时使用 `id`。
    pub async fn guess(&self, column: &Column, model: &str) -> Option<RelationshipGuess> {
        let accessor = self.guess_relationship_name(column, model)?;
        let table = self.guess_relationship_table_name(column).await;

        let related = self
            .context
            .registry()
            .resolve(model)
            .and_then(|resolved| resolved.relationship(&accessor).ok().flatten())
            .map(|relationship| relationship.related);

        let title_column = match related {
            Some(related) => self.guess_relationship_title_column_name(&related).await,
            None => DEFAULT_TITLE_COLUMN.to_string(),
        };

        Some(RelationshipGuess {
            accessor,
            table,
            title_column,
        })
    }

    async fn table_exists(&self, table: &str) -> Result<bool, SchemaError> {
        self.context.default_introspector()?.has_table(table).await
    }

    fn warn_table_check(&self, table: &str, error: &SchemaError) {
        self.context.operator().warn(&format!(
            "Unable to check whether table [{}] exists: {}",
            table, error
        ));
    }
}
