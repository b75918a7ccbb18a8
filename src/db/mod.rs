pub mod schema;

use crate::error::AppError;
use directories::ProjectDirs;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The four logical slots the store persists. Each slot holds one opaque
/// JSON blob; there is no relational schema and no migration machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Profile,
    Habits,
    Logs,
    Settings,
}

impl Slot {
    pub const ALL: [Self; 4] = [Self::Profile, Self::Habits, Self::Logs, Self::Settings];

    pub fn key(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Habits => "habits",
            Self::Logs => "logs",
            Self::Settings => "settings",
        }
    }
}

/// Serialize a value into the JSON blob stored under `slot`.
pub fn encode<T: Serialize>(slot: Slot, value: &T) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(|source| AppError::SlotData {
        slot: slot.key(),
        source,
    })
}

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at `path` and ensure the slot table
    /// exists. Opening is idempotent.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(schema::SCHEMA)?;
        Ok(Self { conn })
    }

    /// Open the database at the platform data directory.
    pub fn open_default() -> Result<Self, AppError> {
        let path = default_db_path()?;
        info!("Opening habit database at {}", path.display());
        Self::open(&path)
    }

    /// Read and decode one slot. An absent slot is `Ok(None)`, never an
    /// error; callers treat it as legitimate initial state.
    pub fn read_slot<T: DeserializeOwned>(&self, slot: Slot) -> Result<Option<T>, AppError> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE slot = ?1",
                params![slot.key()],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(json) => {
                let value =
                    serde_json::from_str(&json).map_err(|source| AppError::SlotData {
                        slot: slot.key(),
                        source,
                    })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Encode and write one slot, replacing any previous blob.
    pub fn write_slot<T: Serialize>(&self, slot: Slot, value: &T) -> Result<(), AppError> {
        let json = encode(slot, value)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO slots (slot, value) VALUES (?1, ?2)",
            params![slot.key(), json],
        )?;
        Ok(())
    }

    /// Write several pre-encoded slots inside a single transaction, so a
    /// multi-slot mutation (cascade delete) commits or fails as a unit.
    pub fn write_slots(&mut self, entries: &[(Slot, String)]) -> Result<(), AppError> {
        let tx = self.conn.transaction()?;
        for (slot, json) in entries {
            tx.execute(
                "INSERT OR REPLACE INTO slots (slot, value) VALUES (?1, ?2)",
                params![slot.key(), json],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Delete one slot. Deleting an absent slot is a no-op.
    pub fn remove_slot(&self, slot: Slot) -> Result<(), AppError> {
        self.conn
            .execute("DELETE FROM slots WHERE slot = ?1", params![slot.key()])?;
        Ok(())
    }

    /// Delete every slot.
    pub fn clear(&self) -> Result<(), AppError> {
        self.conn.execute("DELETE FROM slots", [])?;
        Ok(())
    }
}

/// Database location under the platform data directory.
pub fn default_db_path() -> Result<PathBuf, AppError> {
    let proj_dirs = ProjectDirs::from("com", "tally", "Tally").ok_or(AppError::NoProjectDirs)?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;
    Ok(data_dir.join("tally.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_opens() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let _db = Database::open(&db_path).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn test_open_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        {
            let db = Database::open(&db_path).unwrap();
            db.write_slot(Slot::Habits, &vec!["placeholder"]).unwrap();
        }
        let db = Database::open(&db_path).unwrap();
        let names: Option<Vec<String>> = db.read_slot(Slot::Habits).unwrap();
        assert_eq!(names, Some(vec!["placeholder".to_string()]));
    }

    #[test]
    fn test_absent_slot_reads_none() {
        let dir = tempdir().unwrap();
        let db = Database::open(&dir.path().join("test.db")).unwrap();
        let value: Option<Vec<String>> = db.read_slot(Slot::Logs).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_slot_round_trip() {
        let dir = tempdir().unwrap();
        let db = Database::open(&dir.path().join("test.db")).unwrap();

        db.write_slot(Slot::Settings, &("dark", true)).unwrap();
        let value: Option<(String, bool)> = db.read_slot(Slot::Settings).unwrap();
        assert_eq!(value, Some(("dark".to_string(), true)));
    }

    #[test]
    fn test_write_slot_replaces() {
        let dir = tempdir().unwrap();
        let db = Database::open(&dir.path().join("test.db")).unwrap();

        db.write_slot(Slot::Profile, &"first").unwrap();
        db.write_slot(Slot::Profile, &"second").unwrap();

        let value: Option<String> = db.read_slot(Slot::Profile).unwrap();
        assert_eq!(value, Some("second".to_string()));
    }

    #[test]
    fn test_remove_slot() {
        let dir = tempdir().unwrap();
        let db = Database::open(&dir.path().join("test.db")).unwrap();

        db.write_slot(Slot::Profile, &"someone").unwrap();
        db.remove_slot(Slot::Profile).unwrap();

        let value: Option<String> = db.read_slot(Slot::Profile).unwrap();
        assert!(value.is_none());

        // Removing again is a no-op
        db.remove_slot(Slot::Profile).unwrap();
    }

    #[test]
    fn test_clear_removes_every_slot() {
        let dir = tempdir().unwrap();
        let db = Database::open(&dir.path().join("test.db")).unwrap();

        for slot in Slot::ALL {
            db.write_slot(slot, &"data").unwrap();
        }
        db.clear().unwrap();
        for slot in Slot::ALL {
            let value: Option<String> = db.read_slot(slot).unwrap();
            assert!(value.is_none(), "slot {} should be empty", slot.key());
        }
    }

    #[test]
    fn test_write_slots_lands_together() {
        let dir = tempdir().unwrap();
        let mut db = Database::open(&dir.path().join("test.db")).unwrap();

        let entries = [
            (Slot::Habits, encode(Slot::Habits, &vec!["a"]).unwrap()),
            (Slot::Logs, encode(Slot::Logs, &Vec::<String>::new()).unwrap()),
        ];
        db.write_slots(&entries).unwrap();

        let habits: Option<Vec<String>> = db.read_slot(Slot::Habits).unwrap();
        let logs: Option<Vec<String>> = db.read_slot(Slot::Logs).unwrap();
        assert_eq!(habits, Some(vec!["a".to_string()]));
        assert_eq!(logs, Some(Vec::new()));
    }

    #[test]
    fn test_corrupt_slot_surfaces_as_error() {
        let dir = tempdir().unwrap();
        let db = Database::open(&dir.path().join("test.db")).unwrap();

        db.conn
            .execute(
                "INSERT INTO slots (slot, value) VALUES ('habits', 'not json')",
                [],
            )
            .unwrap();

        let result: Result<Option<Vec<String>>, _> = db.read_slot(Slot::Habits);
        assert!(matches!(
            result,
            Err(crate::error::AppError::SlotData { slot: "habits", .. })
        ));
    }
}
