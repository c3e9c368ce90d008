/// The single error type for all cherry operations.
///
/// Matcher factories and test rules that can fail return `cherry::Result<T>`
/// (alias for `Result<T, cherry::Error>`). Unmet expectations are not errors:
/// they surface as panics from [`assert_that`](crate::assert_that), carrying
/// the matcher's description text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required construction argument was missing or blank.
    #[error("{0}")]
    InvalidArgument(&'static str),

    #[error("No event was recorded during the test execution.")]
    NoEventRecorded,
}

impl Error {
    /// Returns `Err(InvalidArgument(message))` unless `condition` holds.
    pub(crate) fn check_argument(condition: bool, message: &'static str) -> crate::Result {
        if condition {
            Ok(())
        } else {
            Err(Error::InvalidArgument(message))
        }
    }
}
