//! Record types for the five forum tables.
//!
//! Records are passive value objects decoded from query rows. Decoding is
//! by column name, so a query that renames or drops an expected column
//! fails loudly at decode time instead of silently shifting values.
//!
//! Records are ephemeral: every finder reconstructs them from the current
//! row data, nothing is cached, and no mutation methods exist. Callers
//! re-query to observe changes made elsewhere.
//!
//! Relationship accessors live on the record types but take the
//! [`Connection`] explicitly, so every database round trip is visible at
//! the call site. Each call is a fresh query.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::{finders, rankings};

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub fname: String,
    pub lname: String,
}

/// A row of the `questions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub body: String,
    /// Author of the question.
    pub user_id: i64,
}

/// A row of the `replies` table.
///
/// Replies form a tree per question: `parent_reply` is `None` for a
/// top-level reply and points at another reply otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: i64,
    pub body: String,
    pub parent_reply: Option<i64>,
    pub question_id: i64,
    pub user_id: i64,
}

/// A follow association between a user and a question.
///
/// The pair is the identity; the table's row id exists only for direct
/// lookup and is not carried on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionFollower {
    pub question_id: i64,
    pub user_id: i64,
}

/// A like association between a user and a question, symmetric in
/// structure to [`QuestionFollower`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionLike {
    pub question_id: i64,
    pub user_id: i64,
}

impl User {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            fname: row.get("fname")?,
            lname: row.get("lname")?,
        })
    }

    /// Questions this user has authored.
    pub fn authored_questions(&self, conn: &Connection) -> Result<Vec<Question>, StoreError> {
        finders::find_questions_by_author_id(conn, self.id)
    }

    /// Replies this user has written, across all questions.
    pub fn authored_replies(&self, conn: &Connection) -> Result<Vec<Reply>, StoreError> {
        finders::find_replies_by_user_id(conn, self.id)
    }

    /// Distinct questions this user follows.
    pub fn followed_questions(&self, conn: &Connection) -> Result<Vec<Question>, StoreError> {
        rankings::followed_questions_for_user_id(conn, self.id)
    }

    /// Distinct questions this user has liked.
    pub fn liked_questions(&self, conn: &Connection) -> Result<Vec<Question>, StoreError> {
        rankings::liked_questions_for_user_id(conn, self.id)
    }

    /// Mean like count across this user's questions, integer-divided.
    /// 0 when the user has authored no questions.
    pub fn average_karma(&self, conn: &Connection) -> Result<i64, StoreError> {
        rankings::average_karma(conn, self.id)
    }
}

impl Question {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            body: row.get("body")?,
            user_id: row.get("user_id")?,
        })
    }

    /// The user who asked this question, or `None` if the author row is
    /// gone.
    pub fn author(&self, conn: &Connection) -> Result<Option<User>, StoreError> {
        finders::find_user_by_id(conn, self.user_id)
    }

    /// All replies on this question, top-level and nested alike.
    pub fn replies(&self, conn: &Connection) -> Result<Vec<Reply>, StoreError> {
        finders::find_replies_by_question_id(conn, self.id)
    }

    /// Distinct users following this question.
    pub fn followers(&self, conn: &Connection) -> Result<Vec<User>, StoreError> {
        rankings::followers_for_question_id(conn, self.id)
    }

    /// Distinct users who liked this question.
    pub fn likers(&self, conn: &Connection) -> Result<Vec<User>, StoreError> {
        rankings::likers_for_question_id(conn, self.id)
    }

    /// Number of likes on this question; 0 if none.
    pub fn num_likes(&self, conn: &Connection) -> Result<i64, StoreError> {
        rankings::num_likes_for_question_id(conn, self.id)
    }
}

impl Reply {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            body: row.get("body")?,
            parent_reply: row.get("parent_reply")?,
            question_id: row.get("question_id")?,
            user_id: row.get("user_id")?,
        })
    }

    /// The user who wrote this reply, or `None` if the author row is gone.
    pub fn author(&self, conn: &Connection) -> Result<Option<User>, StoreError> {
        finders::find_user_by_id(conn, self.user_id)
    }

    /// The question this reply belongs to.
    pub fn question(&self, conn: &Connection) -> Result<Option<Question>, StoreError> {
        finders::find_question_by_id(conn, self.question_id)
    }

    /// The reply this one answers. `Ok(None)` for a top-level reply,
    /// without touching the database.
    pub fn parent(&self, conn: &Connection) -> Result<Option<Reply>, StoreError> {
        match self.parent_reply {
            Some(parent_id) => finders::find_reply_by_id(conn, parent_id),
            None => Ok(None),
        }
    }

    /// Direct children of this reply; empty for a leaf.
    pub fn child_replies(&self, conn: &Connection) -> Result<Vec<Reply>, StoreError> {
        finders::find_replies_by_parent_reply_id(conn, self.id)
    }
}

impl QuestionFollower {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            question_id: row.get("question_id")?,
            user_id: row.get("user_id")?,
        })
    }
}

impl QuestionLike {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            question_id: row.get("question_id")?,
            user_id: row.get("user_id")?,
        })
    }
}
