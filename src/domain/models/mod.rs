// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了库的核心数据结构，包括：
/// - 列（column）：列名、存储类型与注释
/// - 表（table）：表结构快照与主键
/// - 关联（relationship）：关联类型、关联声明与猜测结果
/// - 模型（model）：面板模型特质与声明式模型
pub mod column;
pub mod model;
pub mod relationship;
pub mod table;
