// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 项目实体
///
/// 用户注册的待监测站点。所有权通过身份提供方的用户ID表达，
/// 删除项目会级联清理其全部爬取产物。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// 项目唯一标识符
    pub id: i32,
    /// 所有者ID，身份提供方颁发的用户主体标识
    pub owner_id: String,
    /// 爬取起始URL
    pub url: String,
}
