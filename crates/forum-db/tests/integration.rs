use forum_db::{create_pool, run_migrations, DbRuntimeSettings};

#[test]
fn db_initialization_works() {
    let pool = create_pool(":memory:", DbRuntimeSettings::default()).expect("failed to create pool");
    let conn = pool.get().expect("failed to get connection");
    let applied = run_migrations(&conn).expect("failed to run migrations");
    assert_eq!(applied, 1);

    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name")
        .expect("failed to prepare table listing query");
    let tables: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .expect("failed to execute table listing query")
        .map(|r| r.expect("failed to read table name"))
        .collect();

    assert_eq!(
        tables,
        vec![
            "_forum_migrations",
            "question_followers",
            "question_likes",
            "questions",
            "replies",
            "users",
        ]
    );
}

#[test]
fn on_disk_database_persists_across_pools() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("forum.db");
    let db_path = db_path.to_str().expect("path should be valid UTF-8");

    {
        let pool = create_pool(db_path, DbRuntimeSettings::default()).expect("failed to create pool");
        let conn = pool.get().expect("failed to get connection");
        run_migrations(&conn).expect("failed to run migrations");
        conn.execute("INSERT INTO users (fname, lname) VALUES ('Ada', 'Lovelace')", [])
            .expect("failed to insert user");
    }

    // A fresh pool over the same file sees the schema and the row, and
    // the migration runner has nothing left to do.
    let pool = create_pool(db_path, DbRuntimeSettings::default()).expect("failed to reopen pool");
    let conn = pool.get().expect("failed to get connection");
    assert_eq!(run_migrations(&conn).expect("failed to re-run migrations"), 0);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .expect("failed to count users");
    assert_eq!(count, 1);
}

#[test]
fn foreign_keys_enforced_on_pooled_connections() {
    let pool = create_pool(":memory:", DbRuntimeSettings::default()).expect("failed to create pool");
    let conn = pool.get().expect("failed to get connection");
    run_migrations(&conn).expect("failed to run migrations");

    let err = conn
        .execute(
            "INSERT INTO questions (title, body, user_id) VALUES ('t', 'b', 999)",
            [],
        )
        .expect_err("question with missing author should be rejected");

    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            assert_eq!(e.code, rusqlite::ErrorCode::ConstraintViolation)
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
