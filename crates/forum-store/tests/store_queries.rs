//! End-to-end store tests over a pooled on-disk database.

use forum_db::{create_pool, run_migrations, DbRuntimeSettings};
use forum_store::{
    create_user, find_question_by_id, find_user_by_id, most_liked_questions,
    num_likes_for_question_id,
};

#[test]
fn store_works_over_a_pooled_file_database() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = dir.path().join("forum.db");
    let db_path = db_path.to_str().expect("path should be valid UTF-8");

    let pool = create_pool(db_path, DbRuntimeSettings::default()).expect("failed to create pool");
    let conn = pool.get().expect("failed to get connection");
    run_migrations(&conn).expect("failed to run migrations");

    let asker = create_user(&conn, "Ada", "Lovelace").expect("failed to create user");
    let fan = create_user(&conn, "Alan", "Turing").expect("failed to create user");

    conn.execute(
        "INSERT INTO questions (title, body, user_id) VALUES ('t', 'b', ?1)",
        [asker.id],
    )
    .expect("failed to insert question");
    let question_id = conn.last_insert_rowid();

    conn.execute(
        "INSERT INTO question_likes (question_id, user_id) VALUES (?1, ?2)",
        [question_id, fan.id],
    )
    .expect("failed to insert like");

    // A second pooled connection observes the committed state: no
    // caching, records are rebuilt from current row data on every query.
    let conn2 = pool.get().expect("failed to get second connection");

    let question = find_question_by_id(&conn2, question_id)
        .expect("query should succeed")
        .expect("question should exist");
    let author = question
        .author(&conn2)
        .expect("query should succeed")
        .expect("author should exist");
    assert_eq!(author, asker);

    assert_eq!(
        num_likes_for_question_id(&conn2, question_id).expect("query should succeed"),
        1
    );

    let ranked = most_liked_questions(&conn2, 10).expect("query should succeed");
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].id, question_id);

    assert!(find_user_by_id(&conn2, 999)
        .expect("query should succeed")
        .is_none());
}
