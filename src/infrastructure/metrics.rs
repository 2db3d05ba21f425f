// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;

/// 初始化指标系统
///
/// 安装Prometheus导出器并注册应用指标。
pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    builder
        .install()
        .expect("failed to install Prometheus recorder");

    describe_counter!(
        "crawl_enqueued_total",
        "Total number of crawl jobs enqueued"
    );
    describe_counter!(
        "billing_events_total",
        "Total number of billing webhook events accepted"
    );
    describe_counter!(
        "auth_failures_total",
        "Total number of rejected bearer tokens"
    );
}
