//! Aggregate queries: like counts, karma, and follow/like rankings.
//!
//! These are the only queries in the store that join or group. Ranking
//! order is deterministic: count descending, then question id ascending
//! as the tie-break.

use rusqlite::{params, Connection};

use crate::error::StoreError;
use crate::records::{Question, User};

/// Number of likes on a question. 0 for a question with no likes (or no
/// such question at all), never `None`.
pub fn num_likes_for_question_id(conn: &Connection, question_id: i64) -> Result<i64, StoreError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM question_likes WHERE question_id = ?1",
        params![question_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Mean like count across the user's authored questions, using integer
/// division. Returns 0 when the user has authored no questions.
///
/// Counted over a LEFT OUTER JOIN so questions with zero likes weigh
/// into the denominator.
pub fn average_karma(conn: &Connection, user_id: i64) -> Result<i64, StoreError> {
    let (num_questions, num_likes): (i64, i64) = conn.query_row(
        "SELECT COUNT(DISTINCT questions.id), COUNT(question_likes.id)
         FROM questions
         LEFT OUTER JOIN question_likes ON question_likes.question_id = questions.id
         WHERE questions.user_id = ?1",
        params![user_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    if num_questions == 0 {
        return Ok(0);
    }
    Ok(num_likes / num_questions)
}

/// Distinct users following the given question.
pub fn followers_for_question_id(
    conn: &Connection,
    question_id: i64,
) -> Result<Vec<User>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT users.id, users.fname, users.lname
         FROM users
         JOIN question_followers ON question_followers.user_id = users.id
         WHERE question_followers.question_id = ?1",
    )?;
    let rows = stmt.query_map(params![question_id], |row| User::from_row(row))?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Distinct users who liked the given question.
pub fn likers_for_question_id(conn: &Connection, question_id: i64) -> Result<Vec<User>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT users.id, users.fname, users.lname
         FROM users
         JOIN question_likes ON question_likes.user_id = users.id
         WHERE question_likes.question_id = ?1",
    )?;
    let rows = stmt.query_map(params![question_id], |row| User::from_row(row))?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Distinct questions the given user follows.
pub fn followed_questions_for_user_id(
    conn: &Connection,
    user_id: i64,
) -> Result<Vec<Question>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT questions.id, questions.title, questions.body, questions.user_id
         FROM questions
         JOIN question_followers ON question_followers.question_id = questions.id
         WHERE question_followers.user_id = ?1",
    )?;
    let rows = stmt.query_map(params![user_id], |row| Question::from_row(row))?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Distinct questions the given user has liked.
pub fn liked_questions_for_user_id(
    conn: &Connection,
    user_id: i64,
) -> Result<Vec<Question>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT questions.id, questions.title, questions.body, questions.user_id
         FROM questions
         JOIN question_likes ON question_likes.question_id = questions.id
         WHERE question_likes.user_id = ?1",
    )?;
    let rows = stmt.query_map(params![user_id], |row| Question::from_row(row))?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Up to `n` questions with at least one follower, most followed first.
/// Ties are broken by question id ascending.
pub fn most_followed_questions(conn: &Connection, n: i64) -> Result<Vec<Question>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT questions.id, questions.title, questions.body, questions.user_id
         FROM questions
         JOIN question_followers ON question_followers.question_id = questions.id
         GROUP BY questions.id
         ORDER BY COUNT(question_followers.user_id) DESC, questions.id ASC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![n], |row| Question::from_row(row))?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Up to `n` questions with at least one like, most liked first. Ties
/// are broken by question id ascending.
pub fn most_liked_questions(conn: &Connection, n: i64) -> Result<Vec<Question>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT questions.id, questions.title, questions.body, questions.user_id
         FROM questions
         JOIN question_likes ON question_likes.question_id = questions.id
         GROUP BY questions.id
         ORDER BY COUNT(question_likes.user_id) DESC, questions.id ASC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![n], |row| Question::from_row(row))?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}
