// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 包含的接口：
/// - 模型注册表（model_registry）：按类型名解析模型声明
/// - 结构读取（schema_repository）：读取数据表结构与表是否存在
///
/// 结构读取的具体实现由基础设施层提供。
pub mod model_registry;
pub mod schema_repository;
