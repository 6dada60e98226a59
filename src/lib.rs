// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含上下文与结构读取、关联猜测等用例
pub mod application;

/// 配置模块
///
/// 处理数据库、语言区域与日志配置
pub mod config;

/// 领域模块
///
/// 包含列、表、关联与面板模型，以及注册表和结构读取接口
pub mod domain;

/// 基础设施模块
///
/// 提供基于 SeaORM 的表结构读取与运维提示通道
pub mod infrastructure;

/// 表示层模块
///
/// 处理视图组件属性
pub mod presentation;

/// 工具模块
///
/// 提供字符串变形与遥测初始化
pub mod utils;
