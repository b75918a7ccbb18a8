// src/constants.rs

/// Icon assigned to habits created without one.
pub const DEFAULT_ICON: &str = "📌";

/// Default daily reminder time (HH:MM, 24-hour format)
pub const DEFAULT_REMINDER_TIME: &str = "09:00";

/// Maximum habit name length
pub const MAX_HABIT_NAME_LEN: usize = 100;

/// Maximum goal length on a habit
pub const MAX_GOAL_LEN: usize = 200;

/// Maximum notes length on a log entry
pub const MAX_NOTES_LEN: usize = 500;

/// Days covered by the weekly insight window
pub const INSIGHT_WINDOW_DAYS: u64 = 7;
