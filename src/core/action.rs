//! Actions that modules and commands return to the app

use crate::app::Tab;
use crate::domain::feed::HazardStatus;

/// State changes requested by a module or command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Switch view or jump to a record
    Navigate(NavigateTarget),

    /// Mark an alert as seen by the operator
    Acknowledge(String),

    /// Move a hazard through its lifecycle
    SetHazardStatus(String, HazardStatus),

    /// Open the camera feed watching a hazard
    ViewFeed(String),

    /// Copy text to the clipboard
    Copy(String),

    /// Show notification in the command line
    Notify(String, NotifyLevel),

    /// Request quit
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateTarget {
    Tab(Tab),
    /// Select a hazard by id
    Hazard(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyLevel {
    Info,
    Warn,
    Error,
}
