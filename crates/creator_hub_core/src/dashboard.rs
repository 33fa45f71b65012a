//! crates/creator_hub_core/src/dashboard.rs
//!
//! Computes the cross-collection dashboard summary. The snapshot is derived
//! fresh on every call from the full contents of the source collections;
//! nothing here is persisted or cached.

use crate::domain::{CalendarItem, CalendarStatus, PaymentStatus, Revenue, Task, TaskStatus,
    VideoProject};
use crate::ports::{collections, parse_documents, parse_documents_with_source, DocumentStore,
    PortResult, StoredDocument};
use chrono::{DateTime, Datelike, Duration, Utc};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// How far ahead a due date may lie for a task to count as urgent.
const URGENT_WINDOW_DAYS: i64 = 3;
/// At most this many urgent tasks are reported, soonest first.
const URGENT_TASK_LIMIT: usize = 5;

/// The derived summary returned by `GET /dashboard/stats`.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub videos_in_progress: usize,
    pub upcoming_calendar_items: usize,
    pub pending_tasks: usize,
    pub urgent_tasks: Vec<Value>,
    pub total_videos: usize,
    pub total_study_notes: u64,
    pub monthly_income: f64,
    pub pending_payments: f64,
}

/// 00:00 UTC on the first day of `now`'s month.
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .with_day(1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(now)
}

/// Produces read-only summaries across independent collections, against an
/// injected document store.
#[derive(Clone)]
pub struct DashboardAggregator {
    store: Arc<dyn DocumentStore>,
}

impl DashboardAggregator {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Computes the dashboard snapshot as of `now`. Empty collections yield
    /// zero counts and sums; only an unreachable store is an error.
    pub async fn compute_stats(&self, now: DateTime<Utc>) -> PortResult<DashboardStats> {
        // Video projects: "in progress" means at least one stage is still
        // open. A project with no stages at all is therefore NOT in progress.
        let video_docs = self.store.list(collections::VIDEOS).await?;
        let total_videos = video_docs.len();
        let videos_in_progress = parse_documents::<VideoProject>(&video_docs)
            .iter()
            .filter(|v| v.stages.iter().any(|stage| !stage.completed))
            .count();

        let calendar_docs = self.store.list(collections::CALENDAR).await?;
        let upcoming_calendar_items = parse_documents::<CalendarItem>(&calendar_docs)
            .iter()
            .filter(|item| item.scheduled_date >= now && item.status != CalendarStatus::Posted)
            .count();

        let task_docs = self.store.list(collections::TASKS).await?;
        let open_tasks: Vec<(StoredDocument, Task)> =
            parse_documents_with_source::<Task>(task_docs)
                .into_iter()
                .filter(|(_, task)| {
                    matches!(task.status, TaskStatus::Pending | TaskStatus::InProgress)
                })
                .collect();
        let pending_tasks = open_tasks.len();

        // Urgent: open tasks due within the next three days, soonest first.
        let horizon = now + Duration::days(URGENT_WINDOW_DAYS);
        let mut urgent: Vec<(DateTime<Utc>, StoredDocument)> = open_tasks
            .into_iter()
            .filter_map(|(doc, task)| task.due_date.map(|due| (due, doc)))
            .filter(|(due, _)| *due >= now && *due <= horizon)
            .collect();
        urgent.sort_by_key(|(due, _)| *due);
        let urgent_tasks: Vec<Value> = urgent
            .into_iter()
            .take(URGENT_TASK_LIMIT)
            .map(|(_, doc)| doc.into_json())
            .collect();

        let total_study_notes = self.store.count(collections::STUDY_NOTES).await?;

        // Revenue inside the current-month window [month start, now].
        let window_start = month_start(now);
        let revenue_docs = self.store.list(collections::REVENUE).await?;
        let mut monthly_income = 0.0;
        let mut pending_payments = 0.0;
        for revenue in parse_documents::<Revenue>(&revenue_docs) {
            if revenue.payment_date < window_start || revenue.payment_date > now {
                continue;
            }
            match revenue.payment_status {
                PaymentStatus::Received => monthly_income += revenue.amount,
                PaymentStatus::Pending => pending_payments += revenue.amount,
            }
        }

        Ok(DashboardStats {
            videos_in_progress,
            upcoming_calendar_items,
            pending_tasks,
            urgent_tasks,
            total_videos,
            total_study_notes,
            monthly_income,
            pending_payments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    #[test]
    fn month_start_truncates_to_first_day_midnight() {
        assert_eq!(
            month_start(at("2026-08-15T13:45:12Z")),
            at("2026-08-01T00:00:00Z")
        );
        assert_eq!(
            month_start(at("2026-08-01T00:00:00Z")),
            at("2026-08-01T00:00:00Z")
        );
    }
}
