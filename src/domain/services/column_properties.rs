// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::column::Column;
use serde_json::{Map, Value};
use tracing::debug;

/// 读取列注释中的 JSON 属性
///
/// 列注释可以是一个 JSON 对象，例如 `{"translatable": true}`。
/// 只有当 `property` 存在且值为布尔 `true` 时才返回整个对象；
/// 注释缺失、JSON 格式错误或不是对象时都返回 `None`。
///
/// # 参数
///
/// * `column` - 列描述
/// * `property` - 需要为 `true` 的属性名
pub fn get_column_property(column: &Column, property: &str) -> Option<Map<String, Value>> {
    let comment = column.comment.as_deref()?;

    let properties = match serde_json::from_str::<Value>(comment) {
        Ok(Value::Object(properties)) => properties,
        Ok(_) => return None,
        Err(e) => {
            debug!(
                "Ignoring non-JSON comment on column {}: {}",
                column.name, e
            );
            return None;
        }
    };

    match properties.get(property) {
        Some(Value::Bool(true)) => Some(properties),
        _ => None,
    }
}
