//! Result type alias for ctui operations.

use super::ctui_error::CtuiError;

/// Type alias for Results using [`CtuiError`].
pub type CtuiResult<T> = Result<T, CtuiError>;

/// Extension trait for logging recoverable failures in place.
pub trait ResultExt<T> {
    /// Logs the error with its code and category, then discards it.
    fn log_failure(self, operation: &str) -> Option<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<CtuiError>,
{
    fn log_failure(self, operation: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let err: CtuiError = err.into();
                tracing::warn!(
                    "{} failed [{}/{}]: {}",
                    operation,
                    err.category(),
                    err.error_code(),
                    err
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UiError;

    #[test]
    fn test_log_failure_keeps_ok() {
        let ok: Result<u8, UiError> = Ok(3);
        assert_eq!(ok.log_failure("copy"), Some(3));
    }

    #[test]
    fn test_log_failure_drops_err() {
        let err: Result<u8, UiError> = Err(UiError::InputError {
            message: "eof".into(),
        });
        assert_eq!(err.log_failure("read"), None);
    }
}
