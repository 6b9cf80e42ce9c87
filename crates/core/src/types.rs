/// Internal row identity for users and categories (SQLite `INTEGER PRIMARY KEY`).
pub type DbId = i64;

/// Caller-visible stable identity of an item. Not auto-incremented.
pub type ItemUid = i64;
