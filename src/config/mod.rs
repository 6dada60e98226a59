// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理库与命令行工具的配置设置，包括数据库、语言区域与日志配置
pub mod settings;
