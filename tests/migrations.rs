#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todomaster::db::db::Db;
    use todomaster::db::migrations::{get_db_version, init_with_migrations, MigrationManager};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.temp_dir.path().join("tasks.db")).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), 2);
    }

    #[test]
    fn test_fresh_database_has_no_version() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
    }

    #[test]
    fn test_migration_history() {
        let mut conn = Connection::open_in_memory().unwrap();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        let names: Vec<(u32, String)> = history.into_iter().map(|(version, name, _)| (version, name)).collect();
        assert_eq!(
            names,
            vec![(1, "create_tasks".to_string()), (2, "create_task_tags".to_string())]
        );
        assert_eq!(get_db_version(&conn).unwrap(), 2);
    }

    #[test]
    fn test_migration_idempotency() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();
        init_with_migrations(&mut conn).unwrap();

        let applied: i64 = conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(applied, 2);
    }

    #[test]
    fn test_schema_constraints() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_with_migrations(&mut conn).unwrap();

        let blank = conn.execute(
            "INSERT INTO tasks (description, priority, completed, created_at, updated_at) VALUES ('  ', 'low', 0, '2026-01-11 09:00:00', '2026-01-11 09:00:00')",
            [],
        );
        assert!(blank.is_err());

        let bad_priority = conn.execute(
            "INSERT INTO tasks (description, priority, completed, created_at, updated_at) VALUES ('x', 'urgent', 0, '2026-01-11 09:00:00', '2026-01-11 09:00:00')",
            [],
        );
        assert!(bad_priority.is_err());

        let completed_without_time = conn.execute(
            "INSERT INTO tasks (description, priority, completed, created_at, updated_at) VALUES ('x', 'low', 1, '2026-01-11 09:00:00', '2026-01-11 09:00:00')",
            [],
        );
        assert!(completed_without_time.is_err());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_database_uses_wal(ctx: &mut MigrationTestContext) {
        let db = Db::open(ctx.temp_dir.path().join("tasks.db")).unwrap();

        let mode: String = db.conn.query_row("PRAGMA journal_mode", [], |row| row.get(0)).unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
        let foreign_keys: i64 = db.conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0)).unwrap();
        assert_eq!(foreign_keys, 1);
        db.close().unwrap();
    }
}
