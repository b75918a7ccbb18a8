use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One habit's status for one calendar day.
///
/// At most one entry exists per (habit, date) pair; repeat logging updates
/// the existing entry in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub habit_id: String,
    pub date: NaiveDate,
    pub completed: bool,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl LogEntry {
    pub fn new(habit_id: &str, date: NaiveDate, completed: bool, notes: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            habit_id: habit_id.to_string(),
            date,
            completed,
            notes: notes.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrite status and notes, stamping the update time.
    pub fn mark(&mut self, completed: bool, notes: &str) {
        self.completed = completed;
        self.notes = notes.to_string();
        self.updated_at = Some(Utc::now());
    }
}
