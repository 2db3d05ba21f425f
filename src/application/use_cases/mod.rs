// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod crawl_use_case;
pub mod project_use_case;
pub mod subscription_use_case;
