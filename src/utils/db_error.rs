//! Classification helpers for sqlx errors.

/// Returns true when the error is a unique-constraint violation.
///
/// SQLite does not report the violated constraint by name, so the check is
/// on the error kind only; the mapping table carries a single `UNIQUE`
/// constraint (on `short_slug`), which makes the kind unambiguous.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }
}
