//! List filters for the Cameras and Hazards tabs.
//!
//! A row is visible when it matches every predicate that is set. `None` on a
//! predicate is the "All" option. The default filter shows every row.

use super::feed::{Camera, CameraStatus, Hazard, HazardKind, HazardStatus, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Type,
    Severity,
    Status,
    Camera,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterToken {
    KeyValue(FilterKey, String),
    Free(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HazardFilter {
    pub kind: Option<HazardKind>,
    pub severity: Option<Severity>,
    pub status: Option<HazardStatus>,
    /// Camera id, compared case-insensitively
    pub camera: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Camera status chip; `None` is "All"
    pub camera_status: Option<CameraStatus>,
    pub hazard: HazardFilter,
    /// Lowercased search text from the header search box
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("unknown filter key '{0}' (use type, severity, status, camera)")]
    UnknownKey(String),
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

impl FilterKey {
    pub fn title(&self) -> &'static str {
        match self {
            FilterKey::Type => "type",
            FilterKey::Severity => "severity",
            FilterKey::Status => "status",
            FilterKey::Camera => "camera",
        }
    }
}

fn parse_filter_key(key: &str) -> Option<FilterKey> {
    match key.to_lowercase().as_str() {
        "type" | "kind" => Some(FilterKey::Type),
        "severity" | "sev" => Some(FilterKey::Severity),
        "status" | "state" => Some(FilterKey::Status),
        "camera" | "cam" => Some(FilterKey::Camera),
        _ => None,
    }
}

pub fn tokenize(input: &str) -> Vec<FilterToken> {
    input
        .split_whitespace()
        .map(|part| match part.split_once(':') {
            Some((key, value)) => match parse_filter_key(key) {
                Some(key) => FilterToken::KeyValue(key, value.to_string()),
                None => FilterToken::Free(part.to_lowercase()),
            },
            None => FilterToken::Free(part.to_lowercase()),
        })
        .collect()
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn set_search(&mut self, text: &str) {
        let trimmed = text.trim();
        self.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };
    }

    /// Apply `key:value` tokens on top of the current hazard filter.
    ///
    /// `all` as a value clears that predicate. Free words become the search text.
    pub fn apply_tokens(&mut self, input: &str) -> Result<(), FilterError> {
        let mut next = self.clone();
        let mut free = Vec::new();
        for token in tokenize(input) {
            match token {
                FilterToken::KeyValue(key, value) => next.apply_key(key, &value)?,
                FilterToken::Free(word) => {
                    if word.contains(':') {
                        let key = word.split(':').next().unwrap_or_default();
                        return Err(FilterError::UnknownKey(key.to_string()));
                    }
                    free.push(word);
                }
            }
        }
        if !free.is_empty() {
            next.set_search(&free.join(" "));
        }
        *self = next;
        Ok(())
    }

    fn apply_key(&mut self, key: FilterKey, value: &str) -> Result<(), FilterError> {
        let invalid = || FilterError::InvalidValue {
            key: key.title(),
            value: value.to_string(),
        };
        let is_all = value.eq_ignore_ascii_case("all") || value == "*";
        match key {
            FilterKey::Type => {
                self.hazard.kind = if is_all {
                    None
                } else {
                    Some(HazardKind::parse(value).ok_or_else(invalid)?)
                }
            }
            FilterKey::Severity => {
                self.hazard.severity = if is_all {
                    None
                } else {
                    Some(Severity::parse(value).ok_or_else(invalid)?)
                }
            }
            FilterKey::Status => {
                if is_all {
                    self.hazard.status = None;
                    self.camera_status = None;
                } else if let Some(status) = HazardStatus::parse(value) {
                    self.hazard.status = Some(status);
                } else if let Some(status) = CameraStatus::parse(value) {
                    self.camera_status = Some(status);
                } else {
                    return Err(invalid());
                }
            }
            FilterKey::Camera => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(invalid());
                }
                self.hazard.camera = if is_all {
                    None
                } else {
                    Some(value.to_uppercase())
                }
            }
        }
        Ok(())
    }

    pub fn cycle_camera_status(&mut self) {
        self.camera_status = cycle(&CameraStatus::ALL, self.camera_status);
    }

    pub fn cycle_kind(&mut self) {
        self.hazard.kind = cycle(&HazardKind::ALL, self.hazard.kind);
    }

    pub fn cycle_severity(&mut self) {
        self.hazard.severity = cycle(&Severity::ALL, self.hazard.severity);
    }

    pub fn cycle_status(&mut self) {
        self.hazard.status = cycle(&HazardStatus::ALL, self.hazard.status);
    }

    pub fn camera_matches(&self, camera: &Camera) -> bool {
        if let Some(status) = self.camera_status {
            if camera.status != status {
                return false;
            }
        }
        match self.search.as_deref() {
            Some(needle) => {
                contains(&camera.id, needle)
                    || contains(&camera.name, needle)
                    || contains(&camera.location, needle)
            }
            None => true,
        }
    }

    pub fn hazard_matches(&self, hazard: &Hazard) -> bool {
        let filter = &self.hazard;
        if filter.kind.is_some_and(|kind| hazard.kind != kind) {
            return false;
        }
        if filter.severity.is_some_and(|sev| hazard.severity != sev) {
            return false;
        }
        if filter.status.is_some_and(|status| hazard.status != status) {
            return false;
        }
        if let Some(camera) = filter.camera.as_deref() {
            if !hazard.camera.eq_ignore_ascii_case(camera) {
                return false;
            }
        }
        match self.search.as_deref() {
            Some(needle) => {
                contains(&hazard.id, needle)
                    || contains(hazard.kind.as_str(), needle)
                    || contains(&hazard.location, needle)
                    || contains(&hazard.camera, needle)
            }
            None => true,
        }
    }

    /// Short text for the status line, e.g. `type:bird status:tracking "apron"`
    pub fn describe(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(status) = self.camera_status {
            parts.push(format!("cams:{}", status.as_str()));
        }
        if let Some(kind) = self.hazard.kind {
            parts.push(format!("type:{}", kind.as_str()));
        }
        if let Some(severity) = self.hazard.severity {
            parts.push(format!("severity:{}", severity.as_str()));
        }
        if let Some(status) = self.hazard.status {
            parts.push(format!("status:{}", status.as_str()));
        }
        if let Some(camera) = self.hazard.camera.as_deref() {
            parts.push(format!("camera:{camera}"));
        }
        if let Some(search) = self.search.as_deref() {
            parts.push(format!("\"{search}\""));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// All -> first -> ... -> last -> All
fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>) -> Option<T> {
    match current {
        None => options.first().copied(),
        Some(value) => {
            let idx = options.iter().position(|o| *o == value)?;
            options.get(idx + 1).copied()
        }
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
