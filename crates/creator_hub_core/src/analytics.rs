//! crates/creator_hub_core/src/analytics.rs
//!
//! Pure aggregation helpers behind the revenue-summary, content-performance
//! and idea-search endpoints. Everything here operates on already-parsed
//! documents; the handlers own the store round-trip.

use crate::domain::{ContentPerformance, Idea, PaymentStatus, Revenue};
use crate::ports::StoredDocument;
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// At most this many entries per top-content ranking.
const TOP_CONTENT_LIMIT: usize = 10;

//=========================================================================================
// Revenue Summaries
//=========================================================================================

/// Revenue totals for one "%Y-%m" month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRevenueSummary {
    pub month: String,
    pub total_received: f64,
    pub total_pending: f64,
    pub count: usize,
}

/// Groups revenue records by payment month, newest month first. Anything not
/// yet Received counts toward the pending total.
pub fn monthly_revenue_summary(revenues: &[Revenue]) -> Vec<MonthlyRevenueSummary> {
    let mut months: BTreeMap<String, MonthlyRevenueSummary> = BTreeMap::new();
    for revenue in revenues {
        let month = revenue.payment_date.format("%Y-%m").to_string();
        let entry = months
            .entry(month.clone())
            .or_insert_with(|| MonthlyRevenueSummary {
                month,
                total_received: 0.0,
                total_pending: 0.0,
                count: 0,
            });
        match revenue.payment_status {
            PaymentStatus::Received => entry.total_received += revenue.amount,
            PaymentStatus::Pending => entry.total_pending += revenue.amount,
        }
        entry.count += 1;
    }
    months.into_values().rev().collect()
}

/// Received revenue totals for one source category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRevenueSummary {
    pub category: String,
    pub total: f64,
    pub count: usize,
}

/// Groups Received revenue by source category, category-sorted.
pub fn revenue_by_category(revenues: &[Revenue]) -> Vec<CategoryRevenueSummary> {
    let mut categories: BTreeMap<String, CategoryRevenueSummary> = BTreeMap::new();
    for revenue in revenues {
        if revenue.payment_status != PaymentStatus::Received {
            continue;
        }
        let entry = categories
            .entry(revenue.source_category.clone())
            .or_insert_with(|| CategoryRevenueSummary {
                category: revenue.source_category.clone(),
                total: 0.0,
                count: 0,
            });
        entry.total += revenue.amount;
        entry.count += 1;
    }
    categories.into_values().collect()
}

//=========================================================================================
// Content Performance
//=========================================================================================

/// One content record with its derived engagement rate.
#[derive(Debug, Clone, Serialize)]
pub struct RankedContent {
    pub id: Uuid,
    pub content_title: String,
    pub content_type: String,
    pub platform: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub engagement_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct ContentRanking {
    pub top_by_views: Vec<RankedContent>,
    pub top_by_engagement: Vec<RankedContent>,
}

/// Engagement as a percentage of views; zero-view content scores zero.
pub fn engagement_rate(perf: &ContentPerformance) -> f64 {
    if perf.views == 0 {
        return 0.0;
    }
    (perf.likes + perf.comments + perf.shares) as f64 / perf.views as f64 * 100.0
}

/// Ranks content by raw views and by engagement rate, at most ten each.
pub fn rank_top_content(entries: &[(StoredDocument, ContentPerformance)]) -> ContentRanking {
    let mut ranked: Vec<RankedContent> = entries
        .iter()
        .map(|(doc, perf)| RankedContent {
            id: doc.id,
            content_title: perf.content_title.clone(),
            content_type: perf.content_type.clone(),
            platform: perf.platform.clone(),
            views: perf.views,
            likes: perf.likes,
            comments: perf.comments,
            shares: perf.shares,
            engagement_rate: engagement_rate(perf),
        })
        .collect();

    ranked.sort_by(|a, b| b.views.cmp(&a.views));
    let top_by_views: Vec<RankedContent> =
        ranked.iter().take(TOP_CONTENT_LIMIT).cloned().collect();

    ranked.sort_by(|a, b| b.engagement_rate.total_cmp(&a.engagement_rate));
    let top_by_engagement: Vec<RankedContent> =
        ranked.into_iter().take(TOP_CONTENT_LIMIT).collect();

    ContentRanking {
        top_by_views,
        top_by_engagement,
    }
}

/// One point of the performance-over-time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub title: String,
    pub platform: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
}

/// Flattens performance records into a date-ascending trend series.
pub fn performance_trends(perfs: &[ContentPerformance]) -> Vec<TrendPoint> {
    let mut ordered: Vec<&ContentPerformance> = perfs.iter().collect();
    ordered.sort_by_key(|perf| perf.recorded_date);
    ordered
        .into_iter()
        .map(|perf| TrendPoint {
            date: perf.recorded_date.format("%Y-%m-%d").to_string(),
            title: perf.content_title.clone(),
            platform: perf.platform.clone(),
            views: perf.views,
            likes: perf.likes,
            comments: perf.comments,
        })
        .collect()
}

//=========================================================================================
// Idea Search
//=========================================================================================

/// Case-insensitive substring match over an idea's title, content, category
/// and tags.
pub fn idea_matches(idea: &Idea, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    idea.title.to_lowercase().contains(&needle)
        || idea.content.to_lowercase().contains(&needle)
        || idea.category.to_lowercase().contains(&needle)
        || idea.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
}
