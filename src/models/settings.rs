use crate::constants::DEFAULT_REMINDER_TIME;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// App-wide settings singleton. Always present: an absent slot reads as
/// the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: Theme,
    pub notifications: bool,
    pub motivational_messages: bool,
    pub reminder_time: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            notifications: false,
            motivational_messages: true,
            reminder_time: DEFAULT_REMINDER_TIME.to_string(),
        }
    }
}

/// Partial settings update; only present fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsPatch {
    pub theme: Option<Theme>,
    pub notifications: Option<bool>,
    pub motivational_messages: Option<bool>,
    pub reminder_time: Option<String>,
}

impl Settings {
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
        if let Some(motivational) = patch.motivational_messages {
            self.motivational_messages = motivational;
        }
        if let Some(time) = patch.reminder_time {
            self.reminder_time = time;
        }
    }
}
