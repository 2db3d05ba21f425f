// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 编排领域对象完成具体用例，并定义对外的数据传输对象。
pub mod dto;
pub mod use_cases;
