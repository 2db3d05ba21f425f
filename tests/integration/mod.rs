// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod billing_webhook_test;
pub mod helpers;
pub mod identity_test;
pub mod project_api_test;
pub mod subscription_test;
