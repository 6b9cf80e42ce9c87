//! Storage error classification and the catalog error type.

use inventory_core::error::CoreError;
use sqlx::error::ErrorKind;

/// Which storage constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    Check,
    NotNull,
}

// SQLite extended result codes, used when the driver reports `ErrorKind::Other`.
const SQLITE_CONSTRAINT_CHECK: &str = "275";
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";

/// Classify a sqlx error as a constraint violation, if it is one.
pub fn constraint_kind(err: &sqlx::Error) -> Option<ConstraintKind> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };

    match db_err.kind() {
        ErrorKind::UniqueViolation => return Some(ConstraintKind::Unique),
        ErrorKind::ForeignKeyViolation => return Some(ConstraintKind::ForeignKey),
        ErrorKind::CheckViolation => return Some(ConstraintKind::Check),
        ErrorKind::NotNullViolation => return Some(ConstraintKind::NotNull),
        _ => {}
    }

    match db_err.code().as_deref() {
        Some(SQLITE_CONSTRAINT_UNIQUE | SQLITE_CONSTRAINT_PRIMARYKEY) => {
            Some(ConstraintKind::Unique)
        }
        Some(SQLITE_CONSTRAINT_FOREIGNKEY) => Some(ConstraintKind::ForeignKey),
        Some(SQLITE_CONSTRAINT_CHECK) => Some(ConstraintKind::Check),
        Some(SQLITE_CONSTRAINT_NOTNULL) => Some(ConstraintKind::NotNull),
        _ => None,
    }
}

/// Error returned by every [`Catalog`](crate::catalog::Catalog) operation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A typed domain failure (validation, uniqueness, access, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An unexpected storage failure, carrying the driver error.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// Translate a failed write into the domain taxonomy.
    ///
    /// `on_unique` builds the duplicate error for the table being written;
    /// foreign-key and check failures become `ConstraintViolation`; anything
    /// else stays a storage error.
    pub fn from_write(err: sqlx::Error, on_unique: impl FnOnce() -> CoreError) -> Self {
        match constraint_kind(&err) {
            Some(ConstraintKind::Unique) => CatalogError::Core(on_unique()),
            Some(ConstraintKind::ForeignKey) => CatalogError::Core(CoreError::ConstraintViolation(
                "Referenced category does not exist".into(),
            )),
            Some(ConstraintKind::Check | ConstraintKind::NotNull) => {
                CatalogError::Core(CoreError::ConstraintViolation(err.to_string()))
            }
            None => CatalogError::Storage(err),
        }
    }
}
