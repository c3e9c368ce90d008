use crate::{Description, EventField, LogEvent, LogEventMatcher, ThrowableInfo, Usage};

/// Compares the event's error information with an expected one.
///
/// `None` expects an event without error information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowableField {
    expected: Option<ThrowableInfo>,
}

impl EventField for ThrowableField {
    fn matches(&self, event: &LogEvent) -> bool {
        match (event.throwable(), &self.expected) {
            (None, None) => true,
            (Some(actual), Some(expected)) => {
                actual.class_name() == expected.class_name() && actual.message() == expected.message()
            }
            _ => false,
        }
    }

    fn describe_expectation(&self, negated: bool, description: &mut Description) {
        let phrase = if negated {
            "a LogEvent with a throwable not matching: "
        } else {
            "a LogEvent with a throwable matching: "
        };
        description.append_text(phrase);
        match &self.expected {
            Some(expected) => description.append_text(&expected.to_string()),
            None => description.append_text("null"),
        };
    }
}

fn throwable_matcher(
    expected: Option<ThrowableInfo>,
    usage: Usage,
) -> LogEventMatcher<ThrowableField> {
    LogEventMatcher::new(ThrowableField { expected }, usage)
}

/// Matches an event carrying `expected` error information.
///
/// Pass `None` to match events without an error.
///
/// ```rust
/// use cherry::{LogEvent, Matcher, ThrowableInfo, has_throwable};
/// use tracing::Level;
///
/// let err = std::io::Error::other("disk gone");
/// let event = LogEvent::new(Level::ERROR).with_throwable(ThrowableInfo::of(&err));
///
/// assert!(has_throwable(ThrowableInfo::of(&err)).matches(&event));
/// assert!(!has_throwable(None::<ThrowableInfo>).matches(&event));
/// ```
pub fn has_throwable(expected: impl Into<Option<ThrowableInfo>>) -> LogEventMatcher<ThrowableField> {
    throwable_matcher(expected.into(), Usage::Standalone)
}

pub fn does_not_have_throwable(
    expected: impl Into<Option<ThrowableInfo>>,
) -> LogEventMatcher<ThrowableField> {
    throwable_matcher(expected.into(), Usage::StandaloneNegated)
}

/// Item form of [`has_throwable`].
pub fn with_throwable(expected: impl Into<Option<ThrowableInfo>>) -> LogEventMatcher<ThrowableField> {
    throwable_matcher(expected.into(), Usage::Item)
}

pub fn without_throwable(
    expected: impl Into<Option<ThrowableInfo>>,
) -> LogEventMatcher<ThrowableField> {
    throwable_matcher(expected.into(), Usage::ItemNegated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matcher;
    use crate::matchers::test_support::{describe, mismatch};
    use tracing::Level;

    fn boom(message: Option<&str>) -> ThrowableInfo {
        ThrowableInfo::new("app::Boom", message.map(str::to_string))
    }

    fn failing(throwable: ThrowableInfo) -> LogEvent {
        LogEvent::new(Level::ERROR).with_throwable(throwable)
    }

    #[test]
    fn none_matches_event_without_throwable() {
        assert!(has_throwable(None::<ThrowableInfo>).matches(&LogEvent::new(Level::ERROR)));
    }

    #[test]
    fn none_does_not_match_event_with_throwable() {
        assert!(!has_throwable(None::<ThrowableInfo>).matches(&failing(boom(Some("x")))));
    }

    #[test]
    fn expected_throwable_does_not_match_event_without_one() {
        assert!(!has_throwable(boom(Some("x"))).matches(&LogEvent::new(Level::ERROR)));
        assert!(does_not_have_throwable(boom(Some("x"))).matches(&LogEvent::new(Level::ERROR)));
    }

    #[test]
    fn class_and_message_must_both_match() {
        let event = failing(boom(Some("x")));
        assert!(has_throwable(boom(Some("x"))).matches(&event));
        assert!(!has_throwable(boom(Some("y"))).matches(&event));
        assert!(!has_throwable(ThrowableInfo::new("app::Other", Some("x".into()))).matches(&event));
    }

    #[test]
    fn absent_messages_are_equal() {
        let event = failing(boom(None));
        assert!(has_throwable(boom(None)).matches(&event));
        assert!(!has_throwable(boom(Some("x"))).matches(&event));
    }

    #[test]
    fn describes_expected_throwable() {
        assert_eq!(
            describe(&has_throwable(boom(Some("x")))),
            "a LogEvent with a throwable matching: app::Boom{message='x'}"
        );
        assert_eq!(
            describe(&does_not_have_throwable(None::<ThrowableInfo>)),
            "a LogEvent with a throwable not matching: null"
        );
        assert_eq!(
            describe(&with_throwable(boom(None))),
            "a LogEvent with a throwable matching: app::Boom{message=null}"
        );
    }

    #[test]
    fn mismatch_renders_actual_throwable() {
        let event = failing(boom(Some("x")));
        assert_eq!(
            mismatch(&has_throwable(None::<ThrowableInfo>), &event),
            "was LogEvent{level=ERROR, formattedMessage='null', loggedBy=null, throwable=app::Boom{message='x'}}"
        );
        assert_eq!(
            mismatch(&without_throwable(None::<ThrowableInfo>), &event),
            "LogEvent{level=ERROR, formattedMessage='null', loggedBy=null, throwable=app::Boom{message='x'}}"
        );
    }

    #[test]
    fn matches_real_error_values() {
        let err = "nope".parse::<u8>().unwrap_err();
        let event = failing(ThrowableInfo::of(&err));
        assert!(has_throwable(ThrowableInfo::of(&err)).matches(&event));
        assert!(with_throwable(ThrowableInfo::of(&err)).matches(&event));
    }

    #[test]
    fn negation_law_holds() {
        let events = [
            LogEvent::new(Level::INFO),
            failing(boom(None)),
            failing(boom(Some("x"))),
        ];
        let expectations = [None, Some(boom(None)), Some(boom(Some("x")))];
        for event in &events {
            for expected in &expectations {
                assert_eq!(
                    has_throwable(expected.clone()).matches(event),
                    !does_not_have_throwable(expected.clone()).matches(event)
                );
            }
        }
    }
}
