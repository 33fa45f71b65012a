mod common;

use chrono::{DateTime, Duration, Utc};
use common::MemoryStore;
use creator_hub_core::ports::{collections, PortError};
use creator_hub_core::RecurringScheduler;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

fn at(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 timestamp")
}

fn template(frequency: &str, next_due: DateTime<Utc>, is_active: bool) -> serde_json::Value {
    json!({
        "title": "Publish weekly newsletter",
        "description": "Write and schedule the issue",
        "priority": "high",
        "category": "Content",
        "frequency": frequency,
        "frequency_detail": "",
        "next_due_date": next_due.to_rfc3339(),
        "last_generated_date": null,
        "is_active": is_active,
        "created_date": "2026-01-01T00:00:00Z"
    })
}

fn setup() -> (Arc<MemoryStore>, RecurringScheduler) {
    let store = Arc::new(MemoryStore::new());
    let scheduler = RecurringScheduler::new(store.clone());
    (store, scheduler)
}

#[tokio::test]
async fn generate_one_copies_template_and_advances_weekly() {
    let (store, scheduler) = setup();
    let due = at("2026-03-02T09:00:00Z");
    let id = store.seed(collections::RECURRING_TASKS, template("weekly", due, true));

    let now = at("2026-03-04T16:30:00Z");
    let created = scheduler.generate_one(id, now).await.expect("generation");

    // The task copies the template fields and inherits the scheduled date.
    let task = created.into_json();
    assert_eq!(task["title"], "Publish weekly newsletter");
    assert_eq!(task["description"], "Write and schedule the issue");
    assert_eq!(task["priority"], "high");
    assert_eq!(task["category"], "Content");
    assert_eq!(task["status"], "pending");
    assert_eq!(
        task["due_date"].as_str().unwrap().parse::<DateTime<Utc>>().unwrap(),
        due
    );
    assert_eq!(store.len(collections::TASKS), 1);

    // The template advanced by exactly seven days from its prior value, even
    // though `now` was later than that value.
    let advanced = store.snapshot(collections::RECURRING_TASKS, id).unwrap();
    assert_eq!(
        advanced["next_due_date"].as_str().unwrap().parse::<DateTime<Utc>>().unwrap(),
        due + Duration::weeks(1)
    );
    assert_eq!(
        advanced["last_generated_date"].as_str().unwrap().parse::<DateTime<Utc>>().unwrap(),
        now
    );
}

#[tokio::test]
async fn daily_advance_ignores_how_late_generation_runs() {
    let (store, scheduler) = setup();
    let due = at("2026-03-02T09:00:00Z");
    let id = store.seed(collections::RECURRING_TASKS, template("daily", due, true));

    // Ten days late: the cadence must not compound the delay.
    let now = due + Duration::days(10);
    scheduler.generate_one(id, now).await.expect("generation");

    let advanced = store.snapshot(collections::RECURRING_TASKS, id).unwrap();
    assert_eq!(
        advanced["next_due_date"].as_str().unwrap().parse::<DateTime<Utc>>().unwrap(),
        due + Duration::days(1)
    );
}

#[tokio::test]
async fn monthly_advance_is_a_fixed_thirty_days() {
    let (store, scheduler) = setup();
    let due = at("2026-02-01T00:00:00Z");
    let id = store.seed(collections::RECURRING_TASKS, template("monthly", due, true));

    scheduler
        .generate_one(id, at("2026-02-01T08:00:00Z"))
        .await
        .expect("generation");

    let advanced = store.snapshot(collections::RECURRING_TASKS, id).unwrap();
    assert_eq!(
        advanced["next_due_date"].as_str().unwrap().parse::<DateTime<Utc>>().unwrap(),
        due + Duration::days(30)
    );
}

#[tokio::test]
async fn unknown_frequency_advances_like_weekly() {
    let (store, scheduler) = setup();
    let due = at("2026-03-02T09:00:00Z");
    let id = store.seed(
        collections::RECURRING_TASKS,
        template("fortnightly", due, true),
    );

    scheduler
        .generate_one(id, at("2026-03-02T10:00:00Z"))
        .await
        .expect("generation");

    let advanced = store.snapshot(collections::RECURRING_TASKS, id).unwrap();
    assert_eq!(
        advanced["next_due_date"].as_str().unwrap().parse::<DateTime<Utc>>().unwrap(),
        due + Duration::weeks(1)
    );
    // The stored cadence string is untouched.
    assert_eq!(advanced["frequency"], "fortnightly");
}

#[tokio::test]
async fn generate_one_missing_template_is_not_found() {
    let (_, scheduler) = setup();
    let err = scheduler
        .generate_one(Uuid::new_v4(), Utc::now())
        .await
        .expect_err("missing template");
    assert!(matches!(err, PortError::NotFound(_)));
}

#[tokio::test]
async fn auto_generate_materializes_only_due_active_templates() {
    let (store, scheduler) = setup();
    let now = at("2026-08-06T12:00:00Z");

    let due_id = store.seed(
        collections::RECURRING_TASKS,
        template("weekly", now - Duration::hours(1), true),
    );
    let not_due_id = store.seed(
        collections::RECURRING_TASKS,
        template("weekly", now + Duration::hours(1), true),
    );
    let inactive_id = store.seed(
        collections::RECURRING_TASKS,
        template("daily", now - Duration::days(2), false),
    );

    let count = scheduler.auto_generate_due(now).await.expect("batch");
    assert_eq!(count, 1);
    assert_eq!(store.len(collections::TASKS), 1);

    // Only the due, active template advanced.
    let advanced = store.snapshot(collections::RECURRING_TASKS, due_id).unwrap();
    assert_eq!(
        advanced["last_generated_date"].as_str().unwrap().parse::<DateTime<Utc>>().unwrap(),
        now
    );
    let untouched = store.snapshot(collections::RECURRING_TASKS, not_due_id).unwrap();
    assert!(untouched["last_generated_date"].is_null());
    let inactive = store.snapshot(collections::RECURRING_TASKS, inactive_id).unwrap();
    assert!(inactive["last_generated_date"].is_null());
}

#[tokio::test]
async fn auto_generate_processes_every_due_template() {
    let (store, scheduler) = setup();
    let now = at("2026-08-06T12:00:00Z");

    let ids: Vec<Uuid> = (0..4)
        .map(|i| {
            store.seed(
                collections::RECURRING_TASKS,
                template("daily", now - Duration::hours(i + 1), true),
            )
        })
        .collect();

    let count = scheduler.auto_generate_due(now).await.expect("batch");
    assert_eq!(count, 4);
    assert_eq!(store.len(collections::TASKS), 4);
    for id in ids {
        let doc = store.snapshot(collections::RECURRING_TASKS, id).unwrap();
        assert_eq!(
            doc["last_generated_date"].as_str().unwrap().parse::<DateTime<Utc>>().unwrap(),
            now
        );
    }
}

#[tokio::test]
async fn auto_generate_skips_malformed_templates_without_aborting() {
    let (store, scheduler) = setup();
    let now = at("2026-08-06T12:00:00Z");

    // A document missing the required fields entirely.
    store.seed(collections::RECURRING_TASKS, json!({"garbage": true}));
    store.seed(
        collections::RECURRING_TASKS,
        template("daily", now - Duration::hours(1), true),
    );

    let count = scheduler.auto_generate_due(now).await.expect("batch");
    assert_eq!(count, 1);
    assert_eq!(store.len(collections::TASKS), 1);
}
