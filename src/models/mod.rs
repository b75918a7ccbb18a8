pub mod habit;
pub mod log_entry;
pub mod profile;
pub mod settings;

pub use habit::{Habit, HabitDraft, HabitKind, HabitPatch};
pub use log_entry::LogEntry;
pub use profile::{FocusArea, Profile, Routine};
pub use settings::{Settings, SettingsPatch, Theme};
