pub mod analytics;
pub mod dashboard;
pub mod domain;
pub mod ports;
pub mod schedule;

pub use dashboard::{DashboardAggregator, DashboardStats};
pub use domain::{CalendarItem, ContentPerformance, Idea, RecurringTask, Revenue, StudyNote,
    Task, VideoProject};
pub use ports::{DocumentStore, PortError, PortResult, StoredDocument};
pub use schedule::RecurringScheduler;
