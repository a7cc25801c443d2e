use sqlx::error::ErrorKind;

/// ===============================
/// SQLite extended result codes
/// ===============================
const SQLITE_CONSTRAINT_CHECK: &str = "275";
const SQLITE_CONSTRAINT_FOREIGNKEY: &str = "787";
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";
const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";

/// Which storage-layer constraint rejected a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    PrimaryKey,
    Unique,
    ForeignKey,
    Check,
    NotNull,
}

/// ===============================
/// Classify a failed statement
/// ===============================
///
/// Returns `None` when the error is not a constraint violation at all
/// (I/O, pool timeout, decode failure, ...).
pub fn constraint_violation(err: &sqlx::Error) -> Option<ConstraintViolation> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };

    let by_code = match db_err.code().as_deref() {
        Some(SQLITE_CONSTRAINT_PRIMARYKEY) => Some(ConstraintViolation::PrimaryKey),
        Some(SQLITE_CONSTRAINT_UNIQUE) => Some(ConstraintViolation::Unique),
        Some(SQLITE_CONSTRAINT_FOREIGNKEY) => Some(ConstraintViolation::ForeignKey),
        Some(SQLITE_CONSTRAINT_CHECK) => Some(ConstraintViolation::Check),
        Some(SQLITE_CONSTRAINT_NOTNULL) => Some(ConstraintViolation::NotNull),
        _ => None,
    };

    by_code.or(match db_err.kind() {
        ErrorKind::UniqueViolation => Some(ConstraintViolation::Unique),
        ErrorKind::ForeignKeyViolation => Some(ConstraintViolation::ForeignKey),
        ErrorKind::CheckViolation => Some(ConstraintViolation::Check),
        ErrorKind::NotNullViolation => Some(ConstraintViolation::NotNull),
        _ => None,
    })
}
