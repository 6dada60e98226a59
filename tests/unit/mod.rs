// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 单元测试
///
/// 使用内存中的表结构读取器测试用例层与领域服务
pub mod context_test;
pub mod relationship_enumerator_test;
pub mod schema_reader_test;
