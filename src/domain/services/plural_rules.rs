// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 复数规则特质
///
/// 给定语言区域与数量，返回该数量使用的复数形式下标。
pub trait PluralRules: Send + Sync {
    fn plural_index(&self, locale: &str, count: u64) -> usize;
}

/// 内置的复数形式选择器
///
/// 先去掉区域后缀（`en_US` -> `en`），`pt_BR` 单独归入 0/1 为单数的规则；
/// 未收录的语言返回 0。
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageSelector;

impl MessageSelector {
    pub fn new() -> Self {
        Self
    }

    fn language(locale: &str) -> &str {
        if locale == "pt_BR" {
            return "xbr";
        }
        if locale.len() > 3 {
            if let Some((language, _)) = locale.rsplit_once('_') {
                return language;
            }
        }
        locale
    }
}

impl PluralRules for MessageSelector {
    fn plural_index(&self, locale: &str, count: u64) -> usize {
        let n = count;
        match Self::language(locale) {
            "az" | "bo" | "dz" | "id" | "ja" | "jv" | "ka" | "km" | "kn" | "ko" | "ms" | "th"
            | "tr" | "vi" | "zh" => 0,

            "af" | "bn" | "bg" | "ca" | "da" | "de" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "fi" | "fo" | "fur" | "fy" | "gl" | "gu" | "ha" | "he" | "hu" | "is"
            | "it" | "ku" | "lb" | "ml" | "mn" | "mr" | "nah" | "nb" | "ne" | "nl" | "nn"
            | "no" | "oc" | "om" | "or" | "pa" | "pap" | "ps" | "pt" | "so" | "sq" | "sv"
            | "sw" | "ta" | "te" | "tk" | "ur" | "zu" => usize::from(n != 1),

            "am" | "bh" | "fil" | "fr" | "gun" | "hi" | "hy" | "ln" | "mg" | "nso" | "xbr"
            | "ti" | "wa" => usize::from(n > 1),

            "be" | "bs" | "hr" | "ru" | "sh" | "sr" | "uk" => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(10..20).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }

            "cs" | "sk" => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },

            "ga" => match n {
                1 => 0,
                2 => 1,
                _ => 2,
            },

            "lt" => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if n % 10 >= 2 && !(10..20).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }

            "sl" => match n % 100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },

            "mk" => usize::from(n % 10 != 1),

            "mt" => {
                if n == 1 {
                    0
                } else if n == 0 || (2..=10).contains(&(n % 100)) {
                    1
                } else if (11..20).contains(&(n % 100)) {
                    2
                } else {
                    3
                }
            }

            "lv" => {
                if n == 0 {
                    0
                } else if n % 10 == 1 && n % 100 != 11 {
                    1
                } else {
                    2
                }
            }

            "pl" => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }

            "cy" => match n {
                1 => 0,
                2 => 1,
                8 | 11 => 2,
                _ => 3,
            },

            "ro" => {
                if n == 1 {
                    0
                } else if n == 0 || (1..20).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }

            "ar" => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&(n % 100)) => 3,
                _ if (11..=99).contains(&(n % 100)) => 4,
                _ => 5,
            },

            _ => 0,
        }
    }
}

/// 语言区域是否区分单复数
///
/// 以数量 10 为样本，复数下标大于 0 即认为存在复数变化。
pub fn locale_has_pluralization(rules: &dyn PluralRules, locale: &str) -> bool {
    rules.plural_index(locale, 10) > 0
}
