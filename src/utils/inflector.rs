// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use convert_case::{Boundary, Converter, Pattern};

/// 外键列名后缀
pub const FOREIGN_KEY_SUFFIX: &str = "_id";

/// 在非空白字符与紧随其后的 ASCII 大写字母之间断词
const BEFORE_UPPERCASE: Boundary = Boundary::Custom {
    condition: precedes_uppercase,
    start: 1,
    len: 0,
};

fn precedes_uppercase(graphemes: &[&str]) -> bool {
    match graphemes {
        [current, next, ..] => {
            !current.trim().is_empty()
                && next.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        }
        _ => false,
    }
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn studly_words(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| upper_first(word)).collect()
}

/// 去掉列名末尾的 `_id` 后缀
///
/// 没有该后缀时原样返回。
pub fn strip_id_suffix(column: &str) -> &str {
    column.strip_suffix(FOREIGN_KEY_SUFFIX).unwrap_or(column)
}

/// 转换为小驼峰形式，例如 `blog_author` -> `blogAuthor`
///
/// 只在 `_`、`-` 与空格处断词，每个词只改首字母，
/// 数字与连续大写保持原样（`data-v-7ba5bd90` -> `dataV7ba5bd90`）。
pub fn camel(value: &str) -> String {
    let studly = Converter::new()
        .set_boundaries(&[Boundary::Underscore, Boundary::Hyphen, Boundary::Space])
        .set_patterns(&[Pattern::Custom(studly_words)])
        .convert(value);

    lower_first(&studly)
}

/// 转换为小写短横线形式，例如 `BlogPost` -> `blog-post`
///
/// 在空格处以及每个大写字母之前断词，数字不单独成词
/// （`Oauth2Client` -> `oauth2-client`）。
pub fn kebab(value: &str) -> String {
    Converter::new()
        .set_boundaries(&[Boundary::Space, BEFORE_UPPERCASE])
        .set_patterns(&[Pattern::RemoveEmpty, Pattern::Lowercase])
        .set_delimiter("-")
        .convert(value)
}

/// 英文复数形式
pub fn plural(word: &str) -> String {
    pluralizer::pluralize(word, 2, false)
}

/// 取类型路径的最后一段
///
/// 同时识别 `::` 与 `\` 两种分隔符，
/// 例如 `app::models::BlogPost` 与 `App\Models\BlogPost` 都返回 `BlogPost`。
pub fn class_basename(type_name: &str) -> &str {
    let tail = type_name.rsplit("::").next().unwrap_or(type_name);
    tail.rsplit('\\').next().unwrap_or(tail)
}
