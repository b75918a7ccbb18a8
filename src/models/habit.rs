use crate::constants::DEFAULT_ICON;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tracking cadence label. Recorded on the habit but not used by the stats
/// engine, which assumes a daily cadence for every habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HabitKind {
    #[default]
    Daily,
    Weekly,
    Custom,
}

/// A user-defined recurring action tracked over time.
///
/// `id` is stable for the habit's lifetime; log entries reference it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(rename = "type", default)]
    pub kind: HabitKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

/// Fields supplied by the caller when creating a habit.
#[derive(Debug, Clone, Default)]
pub struct HabitDraft {
    pub name: String,
    pub icon: Option<String>,
    pub kind: HabitKind,
    pub goal: Option<String>,
}

/// Partial update for a habit; `None` fields keep their current value.
/// An empty goal clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HabitPatch {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub kind: Option<HabitKind>,
    pub goal: Option<String>,
}

impl Habit {
    /// Build a habit from a draft with a fresh id and creation timestamp.
    /// The caller validates the name first.
    pub fn new(draft: HabitDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name.trim().to_string(),
            icon: draft
                .icon
                .filter(|icon| !icon.is_empty())
                .unwrap_or_else(default_icon),
            kind: draft.kind,
            goal: normalize_goal(draft.goal),
            created_at: Utc::now(),
        }
    }

    /// Merge a partial update into this habit.
    pub fn apply(&mut self, patch: HabitPatch) {
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(icon) = patch.icon {
            if !icon.is_empty() {
                self.icon = icon;
            }
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(goal) = patch.goal {
            self.goal = normalize_goal(Some(goal));
        }
    }
}

fn normalize_goal(goal: Option<String>) -> Option<String> {
    goal.map(|g| g.trim().to_string()).filter(|g| !g.is_empty())
}
