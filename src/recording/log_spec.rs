use std::fmt;

use tracing::Level;

use crate::{Error, Result, matchers::module_of};

/// A logger target to record, and the most verbose level to record for it.
///
/// Targets match by `::`-separated path prefix, so `app` also covers
/// `app::db` and `app::http`, but not `application`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogSpec {
    target: String,
    level: Level,
}

impl LogSpec {
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `target` is blank.
    pub fn new(target: impl Into<String>, level: Level) -> Result<Self> {
        let target = target.into();
        Error::check_argument(!target.trim().is_empty(), "target must not be blank.")?;
        Ok(Self { target, level })
    }

    /// Records events from the module that defines `T`.
    pub fn for_type<T: ?Sized>(level: Level) -> Self {
        Self {
            target: module_of::<T>().to_string(),
            level,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether `target` is this spec's target or a module below it.
    pub fn covers(&self, target: &str) -> bool {
        target
            .strip_prefix(self.target.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
    }
}

impl fmt::Display for LogSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogSpec{{level={}, target={}}}", self.level, self.target)
    }
}
