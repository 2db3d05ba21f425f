// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod billing_handler;
pub mod crawl_handler;
pub mod notification_handler;
pub mod project_handler;
pub mod subscription_handler;
