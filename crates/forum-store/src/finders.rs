//! Parameterized finder queries and the single write path.
//!
//! Every finder binds its filter values as query parameters; id values
//! are never interpolated into SQL text. Zero matching rows is not an
//! error: single-row finders return `Ok(None)` and collection finders
//! return an empty `Vec`. Collection order follows the natural result
//! order of the query, with no explicit `ORDER BY`.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StoreError;
use crate::records::{Question, QuestionFollower, QuestionLike, Reply, User};

fn query_one<T>(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
    decode: fn(&Row<'_>) -> rusqlite::Result<T>,
) -> Result<Option<T>, StoreError> {
    Ok(conn.query_row(sql, params, decode).optional()?)
}

fn query_all<T>(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
    decode: fn(&Row<'_>) -> rusqlite::Result<T>,
) -> Result<Vec<T>, StoreError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, decode)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Looks up a user by primary key.
pub fn find_user_by_id(conn: &Connection, id: i64) -> Result<Option<User>, StoreError> {
    query_one(
        conn,
        "SELECT id, fname, lname FROM users WHERE id = ?1",
        params![id],
        User::from_row,
    )
}

/// Looks up a user by exact first and last name.
///
/// Names are not unique; if several users share the pair, the first
/// matching row is returned.
pub fn find_user_by_name(
    conn: &Connection,
    fname: &str,
    lname: &str,
) -> Result<Option<User>, StoreError> {
    query_one(
        conn,
        "SELECT id, fname, lname FROM users WHERE fname = ?1 AND lname = ?2",
        params![fname, lname],
        User::from_row,
    )
}

/// Inserts a new user and returns it with its assigned id.
///
/// Insert-only: there is no update or upsert path, and ids are never
/// reassigned. `last_insert_rowid` is scoped to this connection, so the
/// insert-then-read pair cannot observe another connection's insert.
///
/// # Errors
///
/// Returns `StoreError::Database` if the insert fails.
pub fn create_user(conn: &Connection, fname: &str, lname: &str) -> Result<User, StoreError> {
    conn.execute(
        "INSERT INTO users (fname, lname) VALUES (?1, ?2)",
        params![fname, lname],
    )?;
    let id = conn.last_insert_rowid();

    tracing::debug!(user_id = id, "created user");

    Ok(User {
        id,
        fname: fname.to_string(),
        lname: lname.to_string(),
    })
}

/// Looks up a question by primary key.
pub fn find_question_by_id(conn: &Connection, id: i64) -> Result<Option<Question>, StoreError> {
    query_one(
        conn,
        "SELECT id, title, body, user_id FROM questions WHERE id = ?1",
        params![id],
        Question::from_row,
    )
}

/// All questions authored by the given user.
pub fn find_questions_by_author_id(
    conn: &Connection,
    user_id: i64,
) -> Result<Vec<Question>, StoreError> {
    query_all(
        conn,
        "SELECT id, title, body, user_id FROM questions WHERE user_id = ?1",
        params![user_id],
        Question::from_row,
    )
}

/// Looks up a reply by primary key.
pub fn find_reply_by_id(conn: &Connection, id: i64) -> Result<Option<Reply>, StoreError> {
    query_one(
        conn,
        "SELECT id, body, parent_reply, question_id, user_id FROM replies WHERE id = ?1",
        params![id],
        Reply::from_row,
    )
}

/// All replies written by the given user.
pub fn find_replies_by_user_id(conn: &Connection, user_id: i64) -> Result<Vec<Reply>, StoreError> {
    query_all(
        conn,
        "SELECT id, body, parent_reply, question_id, user_id FROM replies WHERE user_id = ?1",
        params![user_id],
        Reply::from_row,
    )
}

/// All replies on the given question, nested replies included.
pub fn find_replies_by_question_id(
    conn: &Connection,
    question_id: i64,
) -> Result<Vec<Reply>, StoreError> {
    query_all(
        conn,
        "SELECT id, body, parent_reply, question_id, user_id FROM replies WHERE question_id = ?1",
        params![question_id],
        Reply::from_row,
    )
}

/// Direct children of the given reply.
///
/// Takes a concrete parent id: `parent_reply = ?` never matches NULL, so
/// top-level replies are only reachable through the question and user
/// finders.
pub fn find_replies_by_parent_reply_id(
    conn: &Connection,
    parent_reply_id: i64,
) -> Result<Vec<Reply>, StoreError> {
    query_all(
        conn,
        "SELECT id, body, parent_reply, question_id, user_id FROM replies WHERE parent_reply = ?1",
        params![parent_reply_id],
        Reply::from_row,
    )
}

/// Looks up a follow association by its row id.
pub fn find_follow_by_id(
    conn: &Connection,
    id: i64,
) -> Result<Option<QuestionFollower>, StoreError> {
    query_one(
        conn,
        "SELECT question_id, user_id FROM question_followers WHERE id = ?1",
        params![id],
        QuestionFollower::from_row,
    )
}

/// Looks up a like association by its row id.
pub fn find_like_by_id(conn: &Connection, id: i64) -> Result<Option<QuestionLike>, StoreError> {
    query_one(
        conn,
        "SELECT question_id, user_id FROM question_likes WHERE id = ?1",
        params![id],
        QuestionLike::from_row,
    )
}
