//! The habit store: single in-memory source of truth for profile, habits,
//! logs, and settings, with write-through persistence.
//!
//! The store is an owned state object with `&mut self` mutators; it is the
//! only component that writes to the database, so single-writer discipline
//! is enforced by the borrow checker rather than a lock. Every mutator
//! applies the in-memory change first and then persists it: if the write
//! fails, the returned error is a warning that memory and disk have
//! diverged, not a rollback.

use crate::db::{encode, Database, Slot};
use crate::dates;
use crate::error::AppError;
use crate::models::{
    Habit, HabitDraft, HabitPatch, LogEntry, Profile, Settings, SettingsPatch,
};
use crate::stats::{self, HabitStats, OverallStats};
use crate::transfer::Snapshot;
use crate::validation::{validate_goal, validate_habit_name, validate_notes, validate_reminder_time};
use chrono::NaiveDate;
use log::error;

pub struct HabitStore {
    db: Database,
    profile: Option<Profile>,
    habits: Vec<Habit>,
    logs: Vec<LogEntry>,
    settings: Settings,
}

impl HabitStore {
    /// Load the full snapshot from the database. Absent slots read as
    /// empty collections and defaults; a fresh database is not an error.
    pub fn open(db: Database) -> Result<Self, AppError> {
        let profile = db.read_slot(Slot::Profile)?;
        let habits = db.read_slot(Slot::Habits)?.unwrap_or_default();
        let logs = db.read_slot(Slot::Logs)?.unwrap_or_default();
        let settings = db.read_slot(Slot::Settings)?.unwrap_or_default();

        Ok(Self {
            db,
            profile,
            habits,
            logs,
            settings,
        })
    }

    /// Open the store on the platform-default database location.
    pub fn open_default() -> Result<Self, AppError> {
        Self::open(Database::open_default()?)
    }

    // Snapshot accessors

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // Profile

    /// Replace the profile wholesale.
    pub fn set_profile(&mut self, profile: Profile) -> Result<(), AppError> {
        self.profile = Some(profile);
        self.persist_profile()
    }

    // Habits

    /// Create a habit from the draft and return it.
    pub fn add_habit(&mut self, mut draft: HabitDraft) -> Result<Habit, AppError> {
        draft.name = validate_habit_name(&draft.name)?.to_string();
        if let Some(goal) = &draft.goal {
            validate_goal(goal)?;
        }

        let habit = Habit::new(draft);
        self.habits.push(habit.clone());
        self.persist_habits()?;
        Ok(habit)
    }

    /// Merge a partial update into the habit with this id. Returns `false`
    /// (and changes nothing) when the id is unknown.
    pub fn update_habit(&mut self, id: &str, patch: HabitPatch) -> Result<bool, AppError> {
        if let Some(name) = &patch.name {
            validate_habit_name(name)?;
        }
        if let Some(goal) = &patch.goal {
            validate_goal(goal)?;
        }

        let Some(habit) = self.habits.iter_mut().find(|habit| habit.id == id) else {
            return Ok(false);
        };
        habit.apply(patch);
        self.persist_habits()?;
        Ok(true)
    }

    /// Delete a habit and every log entry that references it. The two
    /// collections are persisted in a single transaction so the cascade
    /// cannot half-apply on disk. Returns `false` when the id is unknown.
    pub fn delete_habit(&mut self, id: &str) -> Result<bool, AppError> {
        let habit_count = self.habits.len();
        self.habits.retain(|habit| habit.id != id);
        if self.habits.len() == habit_count {
            return Ok(false);
        }
        self.logs.retain(|log| log.habit_id != id);

        let entries = [
            (Slot::Habits, encode(Slot::Habits, &self.habits)?),
            (Slot::Logs, encode(Slot::Logs, &self.logs)?),
        ];
        self.db.write_slots(&entries).map_err(|e| {
            error!("Failed to persist cascade delete of habit {id}: {e}");
            e
        })?;
        Ok(true)
    }

    // Logs

    /// Upsert the log entry for (habit, date): the first log for a pair
    /// creates the entry, any later log updates it in place. Logging the
    /// same arguments twice leaves state identical except the update stamp.
    pub fn log_habit(
        &mut self,
        habit_id: &str,
        date: NaiveDate,
        completed: bool,
        notes: &str,
    ) -> Result<LogEntry, AppError> {
        validate_notes(notes)?;
        if self.habit(habit_id).is_none() {
            return Err(AppError::NotFound { entity: "Habit" });
        }

        let entry = if let Some(existing) = self
            .logs
            .iter_mut()
            .find(|log| log.habit_id == habit_id && log.date == date)
        {
            existing.mark(completed, notes);
            existing.clone()
        } else {
            let entry = LogEntry::new(habit_id, date, completed, notes);
            self.logs.push(entry.clone());
            entry
        };

        self.persist_logs()?;
        Ok(entry)
    }

    /// The log entry for (habit, date), if one exists. Pure lookup.
    pub fn habit_log(&self, habit_id: &str, date: NaiveDate) -> Option<&LogEntry> {
        self.logs
            .iter()
            .find(|log| log.habit_id == habit_id && log.date == date)
    }

    /// Every log entry dated `date`.
    pub fn logs_on(&self, date: NaiveDate) -> Vec<&LogEntry> {
        self.logs.iter().filter(|log| log.date == date).collect()
    }

    pub fn today_logs(&self) -> Vec<&LogEntry> {
        self.logs_on(dates::today())
    }

    // Settings

    /// Merge a partial update into the settings.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<(), AppError> {
        if let Some(time) = &patch.reminder_time {
            validate_reminder_time(time)?;
        }
        self.settings.merge(patch);
        self.persist_settings()
    }

    // Reset

    /// Clear everything: no profile, no habits, no logs, default settings.
    pub fn reset_all(&mut self) -> Result<(), AppError> {
        self.profile = None;
        self.habits.clear();
        self.logs.clear();
        self.settings = Settings::default();

        self.db.clear().map_err(|e| {
            error!("Failed to persist reset: {e}");
            e
        })
    }

    // Stats

    pub fn habit_stats(&self, habit_id: &str) -> HabitStats {
        stats::habit_stats(&self.logs, habit_id, dates::today())
    }

    pub fn overall_stats(&self) -> OverallStats {
        stats::overall_stats(&self.habits, &self.logs, dates::today())
    }

    // Import / export

    /// A complete point-in-time copy of the store. Read-only: exporting
    /// changes nothing.
    pub fn export_snapshot(&self) -> Snapshot {
        Snapshot::capture(
            self.profile.clone(),
            self.habits.clone(),
            self.logs.clone(),
            self.settings.clone(),
        )
    }

    pub fn export_json(&self) -> Result<String, AppError> {
        self.export_snapshot().to_json()
    }

    /// Apply a snapshot: each section present in the document overwrites
    /// the matching collection wholesale; absent sections are untouched.
    pub fn import_snapshot(&mut self, snapshot: Snapshot) -> Result<(), AppError> {
        if let Some(profile) = snapshot.profile {
            self.profile = Some(profile);
            self.persist_profile()?;
        }
        if let Some(habits) = snapshot.habits {
            self.habits = habits;
            self.persist_habits()?;
        }
        if let Some(logs) = snapshot.logs {
            self.logs = logs;
            self.persist_logs()?;
        }
        if let Some(settings) = snapshot.settings {
            self.settings = settings;
            self.persist_settings()?;
        }
        Ok(())
    }

    /// Parse and apply an export document. A document that fails to parse
    /// is rejected wholesale and the store is left unchanged.
    pub fn import_json(&mut self, json: &str) -> Result<(), AppError> {
        let snapshot = Snapshot::from_json(json).map_err(|e| {
            log::warn!("Rejected import document: {e}");
            e
        })?;
        self.import_snapshot(snapshot)
    }

    // Write-through helpers

    fn persist_profile(&self) -> Result<(), AppError> {
        match &self.profile {
            Some(profile) => self.db.write_slot(Slot::Profile, profile),
            None => self.db.remove_slot(Slot::Profile),
        }
        .map_err(|e| {
            error!("Failed to persist profile: {e}");
            e
        })
    }

    fn persist_habits(&self) -> Result<(), AppError> {
        self.db.write_slot(Slot::Habits, &self.habits).map_err(|e| {
            error!("Failed to persist habits: {e}");
            e
        })
    }

    fn persist_logs(&self) -> Result<(), AppError> {
        self.db.write_slot(Slot::Logs, &self.logs).map_err(|e| {
            error!("Failed to persist logs: {e}");
            e
        })
    }

    fn persist_settings(&self) -> Result<(), AppError> {
        self.db
            .write_slot(Slot::Settings, &self.settings)
            .map_err(|e| {
                error!("Failed to persist settings: {e}");
                e
            })
    }
}
