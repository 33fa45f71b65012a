//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use creator_hub_core::ports::DocumentStore;
use creator_hub_core::{DashboardAggregator, RecurringScheduler};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all
/// handlers. The store is injected behind the port trait; the two core
/// services hold their own handle to it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub scheduler: RecurringScheduler,
    pub dashboard: DashboardAggregator,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: Arc<Config>) -> Self {
        Self {
            scheduler: RecurringScheduler::new(store.clone()),
            dashboard: DashboardAggregator::new(store.clone()),
            store,
            config,
        }
    }
}
