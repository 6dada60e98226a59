// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// 提供数据库连接池与基于 SeaORM 的表结构读取
pub mod connection;
pub mod schema_introspector;
