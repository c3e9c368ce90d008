use crate::{Description, Error, EventField, LogEvent, LogEventMatcher, Result, Usage};

/// Matches events logged under exactly one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerField {
    logger_name: String,
}

impl EventField for LoggerField {
    fn matches(&self, event: &LogEvent) -> bool {
        event.logger_name() == Some(self.logger_name.as_str())
    }

    fn describe_expectation(&self, negated: bool, description: &mut Description) {
        let phrase = if negated {
            "a LogEvent not logged by: "
        } else {
            "a LogEvent logged by: "
        };
        description
            .append_text(phrase)
            .append_text(&self.logger_name);
    }
}

fn logger_matcher(logger_name: String, usage: Usage) -> Result<LogEventMatcher<LoggerField>> {
    Error::check_argument(
        !logger_name.trim().is_empty(),
        "loggerName must not be blank.",
    )?;
    Ok(LogEventMatcher::new(LoggerField { logger_name }, usage))
}

/// Matches an event logged under the `logger_name` target.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `logger_name` is blank.
pub fn was_logged_by(logger_name: impl Into<String>) -> Result<LogEventMatcher<LoggerField>> {
    logger_matcher(logger_name.into(), Usage::Standalone)
}

/// Matches an event logged under any target but `logger_name`.
pub fn was_not_logged_by(logger_name: impl Into<String>) -> Result<LogEventMatcher<LoggerField>> {
    logger_matcher(logger_name.into(), Usage::StandaloneNegated)
}

/// Item form of [`was_logged_by`].
pub fn logged_by(logger_name: impl Into<String>) -> Result<LogEventMatcher<LoggerField>> {
    logger_matcher(logger_name.into(), Usage::Item)
}

pub fn not_logged_by(logger_name: impl Into<String>) -> Result<LogEventMatcher<LoggerField>> {
    logger_matcher(logger_name.into(), Usage::ItemNegated)
}

/// Matches an event logged from the module that defines `T`.
///
/// `tracing` uses the module path as the default target, so this is the
/// target of events emitted next to `T`'s definition.
pub fn was_logged_by_type<T: ?Sized>() -> LogEventMatcher<LoggerField> {
    LogEventMatcher::new(
        LoggerField {
            logger_name: module_of::<T>().to_string(),
        },
        Usage::Standalone,
    )
}

/// The module path prefix of `T`'s type name, ignoring generic arguments.
pub(crate) fn module_of<T: ?Sized>() -> &'static str {
    let type_name = std::any::type_name::<T>();
    let path = type_name
        .split_once('<')
        .map_or(type_name, |(path, _)| path);
    path.rsplit_once("::").map_or(path, |(module, _)| module)
}
