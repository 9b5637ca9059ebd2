use larder_core::AppError;

const UNIQUE_VIOLATION: &str = "23505";
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// Reported when the database refuses a numeric value as out of range.
pub(crate) const NUMERIC_OUT_OF_RANGE: &str = "Numeric value is out of range.";

/// Maps a failed write to the application error a caller can act on.
///
/// Unique violations become `Conflict` only when the table has a
/// caller-facing uniqueness rule.
pub(crate) fn map_write_error(
    error: sqlx::Error,
    context: String,
    unique_violation: Option<&str>,
) -> AppError {
    if let sqlx::Error::Database(database_error) = &error {
        match (database_error.code().as_deref(), unique_violation) {
            (Some(UNIQUE_VIOLATION), Some(message)) => {
                return AppError::Conflict(message.to_owned());
            }
            (Some(NUMERIC_VALUE_OUT_OF_RANGE), _) => {
                return AppError::Validation(NUMERIC_OUT_OF_RANGE.to_owned());
            }
            _ => {}
        }
    }

    AppError::Internal(format!("{context}: {error}"))
}

#[cfg(test)]
mod tests {
    use larder_core::AppError;

    use super::map_write_error;

    #[test]
    fn non_database_errors_stay_internal() {
        let mapped = map_write_error(
            sqlx::Error::RowNotFound,
            "failed to insert product 'Latte'".to_owned(),
            Some("duplicate"),
        );

        assert!(matches!(
            mapped,
            AppError::Internal(message) if message.starts_with("failed to insert product 'Latte'")
        ));
    }
}
