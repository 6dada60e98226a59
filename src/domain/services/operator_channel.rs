// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 面向运维人员的提示通道
///
/// 结构读取失败等可恢复的问题通过这里告知使用者，而不是向上返回错误。
pub trait OperatorChannel: Send + Sync {
    /// 输出一条警告
    fn warn(&self, message: &str);
}
