//! Shared test utilities.
//!
//! This module provides common setup functions used across test modules.

#![cfg(test)]

use crate::db::Database;
use crate::store::HabitStore;
use tempfile::{tempdir, TempDir};

/// Create a temporary on-disk test database.
///
/// Returns a tuple of (Database, TempDir). The TempDir must be kept alive
/// for the duration of the test to prevent the database file from being
/// deleted.
pub fn setup_test_db() -> (Database, TempDir) {
    let dir = tempdir().expect("Failed to create temp directory for test DB");
    let db = Database::open(&dir.path().join("test.db")).expect("Failed to open test database");
    (db, dir)
}

/// Create an empty habit store on a temporary database.
pub fn setup_test_store() -> (HabitStore, TempDir) {
    let (db, dir) = setup_test_db();
    let store = HabitStore::open(db).expect("Failed to open test store");
    (store, dir)
}
