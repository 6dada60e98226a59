// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 提供数据库连接、表结构读取与运维提示通道的具体实现
pub mod database;
pub mod observability;
