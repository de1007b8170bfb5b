//! Shared context passed to modules

/// Currently selected item in the UI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selected {
    #[default]
    None,
    Hazard(String),
}

/// Read-mostly view of app state handed to modules
#[derive(Debug, Default)]
pub struct Context {
    pub selected: Selected,

    /// Alert ids in the order the dashboard lists them
    pub alert_rows: Vec<String>,

    /// Hazard ids in the dashboard's Active Hazards table
    pub hazard_rows: Vec<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }
}
