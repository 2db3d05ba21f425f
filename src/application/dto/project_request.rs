// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建项目请求
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateProjectRequestDto {
    #[validate(url)]
    pub url: String,
}

/// 更新项目请求
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct UpdateProjectRequestDto {
    #[validate(url)]
    pub url: String,
}
