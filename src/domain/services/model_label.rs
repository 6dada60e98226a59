// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::inflector::{class_basename, kebab};

/// 由模型类型名生成可读标签
///
/// 取类型名最后一段，转为短横线形式后再把短横线换成空格，
/// 例如 `app::models::BlogPost` -> `blog post`。
pub fn get_model_label(model: &str) -> String {
    kebab(class_basename(model)).replace('-', " ")
}
