use tracing::Level;

use crate::{Description, EventField, LogEvent, LogEventMatcher, Usage};

/// Matches events logged at exactly one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelField {
    level: Level,
}

impl EventField for LevelField {
    fn matches(&self, event: &LogEvent) -> bool {
        event.level() == self.level
    }

    fn describe_expectation(&self, negated: bool, description: &mut Description) {
        let phrase = if negated {
            "a LogEvent with level other than: "
        } else {
            "a LogEvent with level: "
        };
        description
            .append_text(phrase)
            .append_text(self.level.as_str());
    }
}

fn level_matcher(level: Level, usage: Usage) -> LogEventMatcher<LevelField> {
    LogEventMatcher::new(LevelField { level }, usage)
}

/// Matches an event logged at `level`.
///
/// Example output: `Expected: a LogEvent with level: ERROR but: was
/// LogEvent{level=INFO, formattedMessage='started', loggedBy=app, throwable=null}`
pub fn has_level(level: Level) -> LogEventMatcher<LevelField> {
    level_matcher(level, Usage::Standalone)
}

/// Matches an event logged at any level but `level`.
pub fn does_not_have_level(level: Level) -> LogEventMatcher<LevelField> {
    level_matcher(level, Usage::StandaloneNegated)
}

/// Item form of [`has_level`], for use inside [`has_item`](crate::has_item).
pub fn with_level(level: Level) -> LogEventMatcher<LevelField> {
    level_matcher(level, Usage::Item)
}

/// Item form of [`does_not_have_level`].
pub fn without_level(level: Level) -> LogEventMatcher<LevelField> {
    level_matcher(level, Usage::ItemNegated)
}
