//! Database schema and migrations for doorman.
//!
//! Migrations are applied sequentially when the database is opened;
//! the schema_version table tracks which have run.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - users table
    r#"
-- One row per account; email uniqueness is enforced here, not in the
-- application layer
CREATE TABLE users (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,           -- salted SHA-256, "<salt>:<hash>"
    created_at    TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at    TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_users_email ON users(email);
"#,
];
