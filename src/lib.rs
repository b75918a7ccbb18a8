//! tally: local-first habit tracking core.
//!
//! The [`store::HabitStore`] is the single source of truth: it holds the
//! in-memory snapshot (profile, habits, logs, settings), applies every
//! mutation, and writes each one through to the [`db::Database`] before
//! returning. The [`stats`] engine recomputes streaks and completion rates
//! from the live log collection on every read, and [`transfer`] moves the
//! whole snapshot in and out as a portable JSON document.
//!
//! The UI layer, notification scheduling, and rendering all live outside
//! this crate and drive it through the store's operations.

pub mod constants;
pub mod dates;
pub mod db;
pub mod error;
pub mod insights;
pub mod models;
pub mod stats;
pub mod store;
#[cfg(test)]
mod test_utils;
pub mod transfer;
pub mod validation;

pub use db::{Database, Slot};
pub use error::AppError;
pub use models::{
    FocusArea, Habit, HabitDraft, HabitKind, HabitPatch, LogEntry, Profile, Routine, Settings,
    SettingsPatch, Theme,
};
pub use store::HabitStore;
pub use transfer::Snapshot;
