use std::fmt;

use crate::{Description, LogEvent, Matcher, SelfDescribing, Usage};

/// The per-field part of a [`LogEventMatcher`]: one predicate over the event
/// plus the two phrasings of the expectation.
///
/// Implementations only state when the field matches; negation and mismatch
/// framing are handled once by [`LogEventMatcher`].
pub trait EventField: Send + Sync {
    fn matches(&self, event: &LogEvent) -> bool;

    fn describe_expectation(&self, negated: bool, description: &mut Description);
}

/// A matcher for a single field of a [`LogEvent`].
///
/// The result is `usage.is_negated() != field.matches(event)`. Mismatches
/// render the whole event, prefixed with `was ` unless used as an item.
#[derive(Clone)]
pub struct LogEventMatcher<F> {
    field: F,
    usage: Usage,
}

impl<F> fmt::Debug for LogEventMatcher<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogEventMatcher")
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

impl<F: EventField> LogEventMatcher<F> {
    pub(crate) fn new(field: F, usage: Usage) -> Self {
        Self { field, usage }
    }

    pub fn usage(&self) -> Usage {
        self.usage
    }

    pub fn field(&self) -> &F {
        &self.field
    }
}

impl<F: EventField> SelfDescribing for LogEventMatcher<F> {
    fn describe_to(&self, description: &mut Description) {
        self.field
            .describe_expectation(self.usage.is_negated(), description);
    }
}

impl<F: EventField> Matcher<LogEvent> for LogEventMatcher<F> {
    fn matches(&self, event: &LogEvent) -> bool {
        self.usage.is_negated() != self.field.matches(event)
    }

    fn describe_mismatch(&self, event: &LogEvent, description: &mut Description) {
        if !self.usage.is_item() {
            description.append_text("was ");
        }
        description.append_text(&event.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::test_support::{describe, mismatch};
    use tracing::Level;

    struct IsLoud;

    impl EventField for IsLoud {
        fn matches(&self, event: &LogEvent) -> bool {
            event.level() <= Level::WARN
        }

        fn describe_expectation(&self, negated: bool, description: &mut Description) {
            description.append_text(if negated { "a quiet event" } else { "a loud event" });
        }
    }

    #[test]
    fn negation_inverts_result_and_phrasing() {
        let event = LogEvent::new(Level::ERROR);
        let plain = LogEventMatcher::new(IsLoud, Usage::Standalone);
        let negated = LogEventMatcher::new(IsLoud, Usage::StandaloneNegated);

        assert!(plain.matches(&event));
        assert!(!negated.matches(&event));
        assert_eq!(describe(&plain), "a loud event");
        assert_eq!(describe(&negated), "a quiet event");
    }

    #[test]
    fn item_usage_drops_was_prefix() {
        let event = LogEvent::new(Level::DEBUG);
        let standalone = LogEventMatcher::new(IsLoud, Usage::Standalone);
        let item = LogEventMatcher::new(IsLoud, Usage::Item);

        assert_eq!(
            mismatch(&standalone, &event),
            "was LogEvent{level=DEBUG, formattedMessage='null', loggedBy=null, throwable=null}"
        );
        assert_eq!(
            mismatch(&item, &event),
            "LogEvent{level=DEBUG, formattedMessage='null', loggedBy=null, throwable=null}"
        );
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let event = LogEvent::new(Level::WARN);
        let matcher = LogEventMatcher::new(IsLoud, Usage::ItemNegated);
        let first = matcher.matches(&event);
        assert!((0..10).all(|_| matcher.matches(&event) == first));
    }
}
