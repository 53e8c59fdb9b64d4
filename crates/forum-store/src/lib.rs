//! Data-access layer for the Q&A forum database.
//!
//! A thin mapping between the fixed forum schema (see `forum-db`) and
//! typed records. Callers obtain a pooled connection from
//! [`forum_db::create_pool`] and pass it to finder functions, which issue
//! parameterized SQL and hydrate rows into [`User`], [`Question`],
//! [`Reply`], [`QuestionFollower`], and [`QuestionLike`] records.
//! Relationship accessors on the records resolve related rows with
//! further queries, lazily and without caching.
//!
//! This is deliberately not an ORM: it supports only the fixed query set
//! this schema needs, with one write path (user creation).
//!
//! # Usage
//!
//! ```rust,ignore
//! use forum_db::{create_pool, run_migrations, DbRuntimeSettings};
//! use forum_store::{create_user, find_question_by_id};
//!
//! let pool = create_pool("forum.db", DbRuntimeSettings::default())?;
//! let conn = pool.get()?;
//! run_migrations(&conn)?;
//!
//! let asker = create_user(&conn, "Ada", "Lovelace")?;
//! if let Some(question) = find_question_by_id(&conn, 1)? {
//!     let author = question.author(&conn)?;
//!     let likes = question.num_likes(&conn)?;
//! }
//! ```

mod error;
mod finders;
mod rankings;
mod records;

pub use error::StoreError;
pub use finders::{
    create_user, find_follow_by_id, find_like_by_id, find_question_by_id,
    find_questions_by_author_id, find_replies_by_parent_reply_id, find_replies_by_question_id,
    find_replies_by_user_id, find_reply_by_id, find_user_by_id, find_user_by_name,
};
pub use rankings::{
    average_karma, followed_questions_for_user_id, followers_for_question_id,
    liked_questions_for_user_id, likers_for_question_id, most_followed_questions,
    most_liked_questions, num_likes_for_question_id,
};
pub use records::{Question, QuestionFollower, QuestionLike, Reply, User};
