//! Portable backup document: a complete point-in-time copy of the store,
//! round-trip compatible with previously exported backups.

use crate::error::AppError;
use crate::models::{Habit, LogEntry, Profile, Settings};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The export document. Every section is optional on import: sections
/// absent from a document are left untouched when it is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habits: Option<Vec<Habit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<LogEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Capture a full copy of the given state, stamped with the export time.
    pub fn capture(
        profile: Option<Profile>,
        habits: Vec<Habit>,
        logs: Vec<LogEntry>,
        settings: Settings,
    ) -> Self {
        Self {
            profile,
            habits: Some(habits),
            logs: Some(logs),
            settings: Some(settings),
            export_date: Some(Utc::now()),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(|source| AppError::SlotData {
            slot: "export",
            source,
        })
    }

    /// Parse an export document. A document that is not valid JSON (or not
    /// shaped like a snapshot) is rejected wholesale.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(AppError::MalformedImport)
    }
}
