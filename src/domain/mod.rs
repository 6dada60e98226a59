// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含库的核心数据结构与规则，包括：
/// - 领域模型（models）：列、表、关联与面板模型
/// - 仓库接口（repositories）：模型注册表与结构读取接口
/// - 服务（services）：关联枚举、标签、复数规则等无状态辅助函数
pub mod models;
pub mod repositories;
pub mod services;
