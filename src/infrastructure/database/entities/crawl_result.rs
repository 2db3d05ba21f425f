// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

/// 爬取结果实体
///
/// 每页一行，仅由外部爬虫进程写入。指标列可为NULL
/// （爬虫未能测量）；html与抓取时间是爬虫的原始产出，
/// 指标投影不读取它们。
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "crawl_result")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_id: i32,
    pub url: String,
    pub ttfb_ms: Option<f64>,
    pub render_time_ms: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub html: Option<String>,
    pub time_crawled: Option<ChronoDateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
