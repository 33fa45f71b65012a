//! crates/creator_hub_core/src/schedule.rs
//!
//! Turns due recurring templates into concrete tasks and advances their
//! schedules.

use crate::domain::{Frequency, RecurringTask, Task, TaskStatus};
use crate::ports::{collections, DocumentStore, PortError, PortResult, StoredDocument};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// Computes the occurrence that follows `current_due`.
///
/// The advance is always applied to the template's scheduled date, never to
/// the generation timestamp, so a job that runs late still produces
/// fixed-size increments instead of compounding the delay. "monthly" is a
/// fixed 30-day offset, not calendar-month-aware.
pub fn next_occurrence(frequency: &Frequency, current_due: DateTime<Utc>) -> DateTime<Utc> {
    match frequency {
        Frequency::Daily => current_due + Duration::days(1),
        Frequency::Weekly => current_due + Duration::weeks(1),
        Frequency::Monthly => current_due + Duration::days(30),
        // Unrecognized cadences fall back to weekly.
        Frequency::Other(_) => current_due + Duration::weeks(1),
    }
}

/// The fields written back onto a template after a generation event.
#[derive(Serialize)]
struct ScheduleAdvance {
    next_due_date: DateTime<Utc>,
    last_generated_date: DateTime<Utc>,
}

/// Materializes concrete tasks from recurring templates, individually or in
/// batch, against an injected document store.
#[derive(Clone)]
pub struct RecurringScheduler {
    store: Arc<dyn DocumentStore>,
}

impl RecurringScheduler {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Generates one task from the given template and advances its schedule.
    ///
    /// Returns the newly created task document. A missing template is a
    /// `NotFound` error.
    pub async fn generate_one(
        &self,
        template_id: Uuid,
        now: DateTime<Utc>,
    ) -> PortResult<StoredDocument> {
        let doc = self
            .store
            .get(collections::RECURRING_TASKS, template_id)
            .await?;
        let template: RecurringTask = doc.parse()?;
        self.materialize(template_id, &template, now).await
    }

    /// Generates tasks for every active template whose next occurrence is at
    /// or before `now`. Each template is processed independently; one failing
    /// (e.g. deleted between selection and update) is logged and skipped, and
    /// the rest of the batch continues. Returns the number of tasks created.
    pub async fn auto_generate_due(&self, now: DateTime<Utc>) -> PortResult<usize> {
        let docs = self.store.list(collections::RECURRING_TASKS).await?;

        let mut generated = 0;
        for doc in docs {
            let template_id = doc.id;
            let template: RecurringTask = match doc.parse() {
                Ok(template) => template,
                Err(e) => {
                    warn!(%template_id, error = %e, "skipping malformed recurring template");
                    continue;
                }
            };
            if !template.is_active || template.next_due_date > now {
                continue;
            }
            match self.materialize(template_id, &template, now).await {
                Ok(_) => generated += 1,
                Err(e) => {
                    warn!(%template_id, error = %e, "skipping recurring template");
                }
            }
        }
        Ok(generated)
    }

    /// The materialize-and-advance step shared by both operations: insert a
    /// pending task copied from the template, then move the template's
    /// schedule forward. No link back to the template is stored on the task.
    async fn materialize(
        &self,
        template_id: Uuid,
        template: &RecurringTask,
        now: DateTime<Utc>,
    ) -> PortResult<StoredDocument> {
        let task = Task {
            title: template.title.clone(),
            description: template.description.clone(),
            priority: template.priority,
            status: TaskStatus::Pending,
            due_date: Some(template.next_due_date),
            category: template.category.clone(),
            created_date: now,
        };
        let created = self
            .store
            .insert(collections::TASKS, to_document(&task)?)
            .await?;

        let advance = ScheduleAdvance {
            next_due_date: next_occurrence(&template.frequency, template.next_due_date),
            last_generated_date: now,
        };
        self.store
            .update(collections::RECURRING_TASKS, template_id, to_document(&advance)?)
            .await?;

        Ok(created)
    }
}

fn to_document<T: Serialize>(value: &T) -> PortResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| PortError::Unexpected(e.to_string()))
}
