// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kestrel::{project_stats, recent_log_count, recent_window_start};
use kestrel_domain::{LogDraft, LogId, ProjectId, ProjectLog};
use time::Duration;

use super::{
    create_test_admin, create_test_member, create_test_persistence, create_test_project,
    create_test_today,
};
use crate::{DashboardStore, PersistenceError};

#[test]
fn test_insert_log_records_author_and_date() {
    let mut persistence = create_test_persistence();
    let member = create_test_member(&mut persistence, "Bea");
    let project = create_test_project(&mut persistence, "Drone X");
    let today = create_test_today();
    let draft = LogDraft::new("Calibrated the IMU").unwrap();

    let log = persistence
        .insert_project_log(&project.id, &member.id, &draft, today)
        .unwrap();

    let fetched = persistence.get_project_log(&log.id).unwrap().unwrap();
    assert_eq!(fetched, log);
    assert_eq!(fetched.author_id, member.id);
    assert_eq!(fetched.log_date, today);
    assert_eq!(fetched.created_at, fetched.updated_at);
}

#[test]
fn test_log_for_missing_project_is_rejected() {
    let mut persistence = create_test_persistence();
    let member = create_test_member(&mut persistence, "Bea");
    let draft = LogDraft::new("Orphan").unwrap();

    let result = persistence.insert_project_log(
        &ProjectId::new("missing"),
        &member.id,
        &draft,
        create_test_today(),
    );
    assert!(matches!(
        result,
        Err(PersistenceError::ConstraintViolation(_))
    ));
}

#[test]
fn test_update_log_refreshes_timestamp_and_keeps_author() {
    let mut persistence = create_test_persistence();
    let member = create_test_member(&mut persistence, "Bea");
    let project = create_test_project(&mut persistence, "Drone X");
    let log = persistence
        .insert_project_log(
            &project.id,
            &member.id,
            &LogDraft::new("Draft").unwrap(),
            create_test_today(),
        )
        .unwrap();

    let updated = persistence
        .update_project_log(&log.id, &LogDraft::new("Final").unwrap())
        .unwrap();
    assert_eq!(updated, 1);

    let fetched = persistence.get_project_log(&log.id).unwrap().unwrap();
    assert_eq!(fetched.content, "Final");
    assert_eq!(fetched.author_id, member.id);
    assert_eq!(fetched.log_date, log.log_date);
    assert_eq!(fetched.created_at, log.created_at);
    assert!(fetched.updated_at > log.updated_at);
}

#[test]
fn test_update_and_delete_missing_log() {
    let mut persistence = create_test_persistence();
    let missing = LogId::new("missing");

    let updated = persistence
        .update_project_log(&missing, &LogDraft::new("Nothing").unwrap())
        .unwrap();
    assert_eq!(updated, 0);
    assert_eq!(persistence.delete_project_log(&missing).unwrap(), 0);
}

#[test]
fn test_logs_listed_by_date_with_author_names() {
    let mut persistence = create_test_persistence();
    let admin = create_test_admin(&mut persistence);
    let member = create_test_member(&mut persistence, "Bea");
    let project = create_test_project(&mut persistence, "Drone X");
    let today = create_test_today();

    let older = persistence
        .insert_project_log(
            &project.id,
            &admin.id,
            &LogDraft::new("Older").unwrap(),
            today - Duration::days(3),
        )
        .unwrap();
    let newer = persistence
        .insert_project_log(
            &project.id,
            &member.id,
            &LogDraft::new("Newer").unwrap(),
            today,
        )
        .unwrap();

    let entries = persistence.list_project_logs(&project.id).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].log.id, newer.id);
    assert_eq!(entries[0].author_name, "Bea");
    assert_eq!(entries[1].log.id, older.id);
    assert_eq!(entries[1].author_name, "Ada Admin");
}

#[test]
fn test_recent_count_matches_in_memory_aggregation() {
    let mut persistence = create_test_persistence();
    let member = create_test_member(&mut persistence, "Bea");
    let project = create_test_project(&mut persistence, "Drone X");
    let other = create_test_project(&mut persistence, "Other");
    let today = create_test_today();

    for (project_id, days) in [
        (&project.id, 0),
        (&project.id, 7),
        (&project.id, 8),
        (&project.id, 40),
        (&other.id, 1),
    ] {
        persistence
            .insert_project_log(
                project_id,
                &member.id,
                &LogDraft::new("Entry").unwrap(),
                today - Duration::days(days),
            )
            .unwrap();
    }

    let logs: Vec<ProjectLog> = persistence
        .list_project_logs(&project.id)
        .unwrap()
        .into_iter()
        .chain(persistence.list_project_logs(&other.id).unwrap())
        .map(|entry| entry.log)
        .collect();

    let stored = persistence
        .count_project_logs_since(&project.id, recent_window_start(today))
        .unwrap();
    assert_eq!(stored, 2);
    assert_eq!(stored, recent_log_count(&project.id, &logs, today));

    let links = persistence.list_project_members(&project.id).unwrap();
    let stats = project_stats(&project.id, &links, &logs, today);
    assert_eq!(
        stats.member_count,
        persistence.count_project_members(&project.id).unwrap()
    );
}
