// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 上下文
///
/// 显式传递注册表、连接、语言区域与运维通道
pub mod context;

/// 数据传输对象
pub mod dto;

/// 用例
///
/// 结构读取与归属关联猜测
pub mod use_cases;
