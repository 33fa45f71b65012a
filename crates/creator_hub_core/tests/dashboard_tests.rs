mod common;

use chrono::{DateTime, Duration, Utc};
use common::MemoryStore;
use creator_hub_core::ports::collections;
use creator_hub_core::DashboardAggregator;
use serde_json::json;
use std::sync::Arc;

fn at(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 timestamp")
}

fn setup() -> (Arc<MemoryStore>, DashboardAggregator) {
    let store = Arc::new(MemoryStore::new());
    let aggregator = DashboardAggregator::new(store.clone());
    (store, aggregator)
}

fn video(title: &str, stages: serde_json::Value) -> serde_json::Value {
    json!({
        "title": title,
        "description": "",
        "stages": stages,
        "due_date": null,
        "created_date": "2026-01-01T00:00:00Z"
    })
}

fn task(title: &str, status: &str, due_date: Option<DateTime<Utc>>) -> serde_json::Value {
    json!({
        "title": title,
        "description": "",
        "priority": "medium",
        "status": status,
        "due_date": due_date.map(|d| d.to_rfc3339()),
        "category": "",
        "created_date": "2026-01-01T00:00:00Z"
    })
}

fn revenue(amount: f64, status: &str, date: DateTime<Utc>) -> serde_json::Value {
    json!({
        "amount": amount,
        "source_category": "Course Sales",
        "source_detail": "",
        "platform": "",
        "payment_status": status,
        "payment_date": date.to_rfc3339(),
        "description": "",
        "created_date": date.to_rfc3339()
    })
}

#[tokio::test]
async fn empty_collections_yield_zeroes_not_errors() {
    let (_, aggregator) = setup();
    let stats = aggregator.compute_stats(Utc::now()).await.expect("stats");

    assert_eq!(stats.videos_in_progress, 0);
    assert_eq!(stats.upcoming_calendar_items, 0);
    assert_eq!(stats.pending_tasks, 0);
    assert!(stats.urgent_tasks.is_empty());
    assert_eq!(stats.total_videos, 0);
    assert_eq!(stats.total_study_notes, 0);
    assert_eq!(stats.monthly_income, 0.0);
    assert_eq!(stats.pending_payments, 0.0);
}

#[tokio::test]
async fn video_with_open_stage_counts_as_in_progress() {
    let (store, aggregator) = setup();

    store.seed(
        collections::VIDEOS,
        video(
            "done",
            json!([{"name": "Idea", "completed": true, "completed_date": null}]),
        ),
    );
    store.seed(
        collections::VIDEOS,
        video(
            "half way",
            json!([
                {"name": "Idea", "completed": true, "completed_date": null},
                {"name": "Editing", "completed": false, "completed_date": null}
            ]),
        ),
    );
    // No stages at all: not in progress. There is nothing left to complete.
    store.seed(collections::VIDEOS, video("stageless", json!([])));

    let stats = aggregator.compute_stats(Utc::now()).await.expect("stats");
    assert_eq!(stats.total_videos, 3);
    assert_eq!(stats.videos_in_progress, 1);
}

#[tokio::test]
async fn upcoming_calendar_items_exclude_posted_and_past() {
    let (store, aggregator) = setup();
    let now = at("2026-08-06T12:00:00Z");

    let item = |when: DateTime<Utc>, status: &str| {
        json!({
            "title": "post",
            "content_type": "Video",
            "scheduled_date": when.to_rfc3339(),
            "status": status,
            "platform": "",
            "description": "",
            "created_date": "2026-01-01T00:00:00Z"
        })
    };
    store.seed(collections::CALENDAR, item(now + Duration::days(1), "draft"));
    store.seed(collections::CALENDAR, item(now + Duration::days(2), "scheduled"));
    store.seed(collections::CALENDAR, item(now + Duration::days(3), "posted"));
    store.seed(collections::CALENDAR, item(now - Duration::days(1), "draft"));

    let stats = aggregator.compute_stats(now).await.expect("stats");
    assert_eq!(stats.upcoming_calendar_items, 2);
}

#[tokio::test]
async fn urgent_tasks_are_capped_at_five_and_sorted_ascending() {
    let (store, aggregator) = setup();
    let now = at("2026-08-06T12:00:00Z");

    // Seven open tasks inside the three-day window, seeded out of order.
    for hours in [60, 12, 36, 2, 70, 24, 48] {
        store.seed(
            collections::TASKS,
            task(
                &format!("due in {hours}h"),
                "pending",
                Some(now + Duration::hours(hours)),
            ),
        );
    }
    // Outside the window, missing a due date, or already done: never urgent.
    store.seed(
        collections::TASKS,
        task("far out", "pending", Some(now + Duration::days(10))),
    );
    store.seed(collections::TASKS, task("no deadline", "in_progress", None));
    store.seed(
        collections::TASKS,
        task("finished", "completed", Some(now + Duration::hours(1))),
    );

    let stats = aggregator.compute_stats(now).await.expect("stats");
    assert_eq!(stats.pending_tasks, 9);
    assert_eq!(stats.urgent_tasks.len(), 5);

    let due_dates: Vec<DateTime<Utc>> = stats
        .urgent_tasks
        .iter()
        .map(|t| t["due_date"].as_str().unwrap().parse().unwrap())
        .collect();
    let mut sorted = due_dates.clone();
    sorted.sort();
    assert_eq!(due_dates, sorted);
    // The five soonest: 2, 12, 24, 36, 48 hours out.
    assert_eq!(due_dates[0], now + Duration::hours(2));
    assert_eq!(due_dates[4], now + Duration::hours(48));
}

#[tokio::test]
async fn revenue_window_is_current_month_up_to_now() {
    let (store, aggregator) = setup();
    let now = at("2026-08-15T12:00:00Z");

    store.seed(collections::REVENUE, revenue(100.0, "Received", at("2026-08-01T00:00:00Z")));
    store.seed(collections::REVENUE, revenue(40.0, "Pending", at("2026-08-10T00:00:00Z")));
    // Last month: excluded even though still pending.
    store.seed(collections::REVENUE, revenue(75.0, "Pending", at("2026-07-28T00:00:00Z")));
    // Later this month than `now`: outside the window.
    store.seed(collections::REVENUE, revenue(33.0, "Received", at("2026-08-20T00:00:00Z")));

    let stats = aggregator.compute_stats(now).await.expect("stats");
    assert_eq!(stats.monthly_income, 100.0);
    assert_eq!(stats.pending_payments, 40.0);
}

#[tokio::test]
async fn totals_count_whole_collections() {
    let (store, aggregator) = setup();

    store.seed(collections::VIDEOS, video("one", json!([])));
    store.seed(collections::VIDEOS, video("two", json!([])));
    for i in 0..3 {
        store.seed(
            collections::STUDY_NOTES,
            json!({
                "title": format!("note {i}"),
                "subject": "Rust",
                "content": "",
                "progress_percentage": 0,
                "created_date": "2026-01-01T00:00:00Z",
                "updated_date": "2026-01-01T00:00:00Z"
            }),
        );
    }

    let stats = aggregator.compute_stats(Utc::now()).await.expect("stats");
    assert_eq!(stats.total_videos, 2);
    assert_eq!(stats.total_study_notes, 3);
}
