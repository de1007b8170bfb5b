//! UI Modules
//!
//! - dashboard: alert feed and Active Hazards table, implements `Module`
//! - export: CSV and JSON export of the feed
//! - ops: one-line status reports (`:summary`, `:config`)

pub mod dashboard;
pub mod export;
pub mod ops;
