//! Database schema migrations.
//!
//! Each entry is applied in order inside its own transaction; the
//! `schema_version` table records what has been applied.

/// Ordered list of schema migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: threads and their ordered reply sequences.
    //
    // AUTOINCREMENT keeps ids unique and never reused, so a reply id stays
    // unique within its thread even across deletions. Reply insertion order
    // (ascending id) is the chronological order of the sequence.
    "CREATE TABLE threads (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        board           TEXT NOT NULL,
        text            TEXT NOT NULL,
        created_on      TEXT NOT NULL,
        bumped_on       TEXT NOT NULL,
        reported        INTEGER NOT NULL DEFAULT 0,
        delete_password TEXT NOT NULL
    );
    CREATE INDEX idx_threads_board_bumped ON threads(board, bumped_on DESC);

    CREATE TABLE replies (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        thread_id       INTEGER NOT NULL REFERENCES threads(id) ON DELETE CASCADE,
        text            TEXT NOT NULL,
        created_on      TEXT NOT NULL,
        reported        INTEGER NOT NULL DEFAULT 0,
        delete_password TEXT NOT NULL
    );
    CREATE INDEX idx_replies_thread ON replies(thread_id);",
];
