//! Database layer for the forum store.
//!
//! Provides SQLite connection pooling (via `r2d2`), WAL-mode
//! initialization, and the embedded SQL migrations that create the forum
//! tables (`users`, `questions`, `replies`, `question_followers`,
//! `question_likes`).
//!
//! # Design decisions
//!
//! - **SQLite**: the forum is a single-file database with one write path;
//!   no external database process is warranted.
//! - **`r2d2` connection pool**: the store's query functions borrow a
//!   `Connection`, never own one. Handing out pooled connections keeps a
//!   single process-wide resource without hidden global state, and lets
//!   each test open its own in-memory database.
//! - **Embedded migrations**: SQL files are compiled in via
//!   `include_str!`, so the schema ships with the code that queries it.

mod migrations;
mod pool;

pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool, DbPool, DbRuntimeSettings, PoolError};
