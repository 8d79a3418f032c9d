// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::create_test_persistence;
use crate::{DashboardStore, Persistence};

#[test]
fn test_in_memory_database_enforces_foreign_keys() {
    let mut persistence = create_test_persistence();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first = create_test_persistence();
    let mut second = create_test_persistence();

    super::create_test_project(&mut first, "Drone X");

    assert_eq!(first.list_projects().unwrap().len(), 1);
    assert!(second.list_projects().unwrap().is_empty());
}

#[test]
fn test_file_database_runs_migrations() {
    let path = std::env::temp_dir().join(format!("kestrel-test-{}.db", uuid::Uuid::new_v4()));

    {
        let mut persistence = Persistence::new_with_file(&path).unwrap();
        assert!(persistence.list_projects().unwrap().is_empty());
        super::create_test_project(&mut persistence, "Drone X");
    }

    let mut reopened = Persistence::new_with_file(&path).unwrap();
    assert_eq!(reopened.list_projects().unwrap().len(), 1);

    drop(reopened);
    let _ = std::fs::remove_file(&path);
    let _ = std::fs::remove_file(path.with_extension("db-wal"));
    let _ = std::fs::remove_file(path.with_extension("db-shm"));
}
