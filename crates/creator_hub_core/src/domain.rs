//! crates/creator_hub_core/src/domain.rs
//!
//! Defines the document models for the application. Every struct here is
//! stored schemalessly as a JSON document; serde defaults fill in whatever a
//! client omits, so the same type serves as both the create payload and the
//! stored shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

//=========================================================================================
// Shared Field Enums
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarStatus {
    #[default]
    Draft,
    Scheduled,
    Posted,
}

/// Payment states serialize with their capitalized variant names ("Pending",
/// "Received"), matching what the revenue documents store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Received,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    #[default]
    Idea,
    Researching,
    Ready,
    Used,
}

/// Recurrence cadence of a template. Unrecognized values are carried verbatim
/// so a round-trip never rewrites user data; advancement treats them as
/// weekly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Other(String),
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Weekly
    }
}

impl From<String> for Frequency {
    fn from(value: String) -> Self {
        match value.as_str() {
            "daily" => Frequency::Daily,
            "weekly" => Frequency::Weekly,
            "monthly" => Frequency::Monthly,
            _ => Frequency::Other(value),
        }
    }
}

impl From<Frequency> for String {
    fn from(value: Frequency) -> Self {
        match value {
            Frequency::Daily => "daily".to_string(),
            Frequency::Weekly => "weekly".to_string(),
            Frequency::Monthly => "monthly".to_string(),
            Frequency::Other(raw) => raw,
        }
    }
}

//=========================================================================================
// Video Projects
//=========================================================================================

/// One step of the production pipeline for a video project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStage {
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
}

impl VideoStage {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            completed: false,
            completed_date: None,
        }
    }
}

fn default_stages() -> Vec<VideoStage> {
    ["Idea", "Script", "PPT", "Recording", "Editing", "Upload"]
        .iter()
        .map(|name| VideoStage::new(name))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_stages")]
    pub stages: Vec<VideoStage>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default = "Utc::now")]
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoProjectPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<VideoStage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

//=========================================================================================
// Study Notes
//=========================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyNote {
    pub title: String,
    pub subject: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub progress_percentage: u8,
    #[serde(default = "Utc::now")]
    pub created_date: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyNotePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<u8>,
}

//=========================================================================================
// Content Calendar
//=========================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarItem {
    pub title: String,
    pub content_type: String,
    pub scheduled_date: DateTime<Utc>,
    #[serde(default)]
    pub status: CalendarStatus,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "Utc::now")]
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CalendarStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

//=========================================================================================
// Tasks
//=========================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: String,
    #[serde(default = "Utc::now")]
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

//=========================================================================================
// Revenue Tracking
//=========================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revenue {
    pub amount: f64,
    /// Course Sales, Freelance, Other...
    pub source_category: String,
    /// Course name, client name...
    #[serde(default)]
    pub source_detail: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub payment_date: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "Utc::now")]
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevenuePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

//=========================================================================================
// Content Performance Analytics
//=========================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPerformance {
    #[serde(default)]
    pub content_id: String,
    pub content_title: String,
    /// Video, Post, Story, Course, Reel...
    pub content_type: String,
    pub platform: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub reach: u64,
    #[serde(default = "Utc::now")]
    pub recorded_date: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentPerformancePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reach: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_date: Option<DateTime<Utc>>,
}

//=========================================================================================
// Idea Bank
//=========================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: IdeaStatus,
    #[serde(default = "Utc::now")]
    pub created_date: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdeaPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IdeaStatus>,
}

//=========================================================================================
// Recurring Task Templates
//=========================================================================================

/// A template describing a repeating obligation. `next_due_date` always holds
/// the next occurrence that has not yet been turned into a concrete task; it
/// only ever moves forward, and only through generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringTask {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub frequency: Frequency,
    /// "Every Monday", "1st of month"...
    #[serde(default)]
    pub frequency_detail: String,
    pub next_due_date: DateTime<Utc>,
    #[serde(default)]
    pub last_generated_date: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "Utc::now")]
    pub created_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecurringTaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_round_trips_unknown_values() {
        let freq = Frequency::from("every other thursday".to_string());
        assert_eq!(
            freq,
            Frequency::Other("every other thursday".to_string())
        );
        assert_eq!(String::from(freq), "every other thursday");
    }

    #[test]
    fn video_project_defaults_to_six_stages() {
        let project: VideoProject =
            serde_json::from_value(serde_json::json!({"title": "Intro to Rust"}))
                .expect("minimal payload should deserialize");
        let names: Vec<&str> = project.stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["Idea", "Script", "PPT", "Recording", "Editing", "Upload"]
        );
        assert!(project.stages.iter().all(|s| !s.completed));
    }

    #[test]
    fn patch_serialization_skips_absent_fields() {
        let patch = TaskPatch {
            status: Some(TaskStatus::Completed),
            ..TaskPatch::default()
        };
        let value = serde_json::to_value(&patch).expect("patch should serialize");
        assert_eq!(value, serde_json::json!({"status": "completed"}));
    }
}
