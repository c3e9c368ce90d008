use std::fmt;

use tracing::Level;

use crate::{
    Description, LevelField, LogEvent, LogEventMatcher, Matcher, MessageField, SelfDescribing,
    StringMatcher, ThrowableField, ThrowableInfo, with_level, with_message_containing,
    with_throwable,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    HasItem,
    HasNoItem,
    EveryItem,
}

/// Applies an event matcher across a sequence of events.
///
/// Evaluation walks the events in order once, building the mismatch text as
/// it goes. Pair with the item forms of the field matchers (`with_level`,
/// `logged_by`, ...) so element mismatches are not prefixed with `was `.
#[derive(Clone)]
pub struct IterableMatcher<M> {
    inner: M,
    mode: Mode,
}

impl<M> fmt::Debug for IterableMatcher<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterableMatcher")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// Matches when at least one event satisfies `inner`.
///
/// Example output: `Expected: an iterable containing a LogEvent with level:
/// ERROR but: iterable contained [LogEvent{level=INFO, ...}, LogEvent{level=WARN, ...}]`
pub fn has_item<M: Matcher<LogEvent>>(inner: M) -> IterableMatcher<M> {
    IterableMatcher {
        inner,
        mode: Mode::HasItem,
    }
}

/// Matches when no event satisfies `inner`. The complement of [`has_item`].
pub fn has_no_item<M: Matcher<LogEvent>>(inner: M) -> IterableMatcher<M> {
    IterableMatcher {
        inner,
        mode: Mode::HasNoItem,
    }
}

/// Matches when every event satisfies `inner`. Empty sequences match.
pub fn every_item<M: Matcher<LogEvent>>(inner: M) -> IterableMatcher<M> {
    IterableMatcher {
        inner,
        mode: Mode::EveryItem,
    }
}

pub fn has_item_containing_message(
    substring: impl Into<String>,
) -> IterableMatcher<LogEventMatcher<MessageField<StringMatcher>>> {
    has_item(with_message_containing(substring))
}

pub fn has_no_item_containing_message(
    substring: impl Into<String>,
) -> IterableMatcher<LogEventMatcher<MessageField<StringMatcher>>> {
    has_no_item(with_message_containing(substring))
}

/// Matches when some event carries exactly `throwable`.
pub fn has_item_with_throwable(
    throwable: ThrowableInfo,
) -> IterableMatcher<LogEventMatcher<ThrowableField>> {
    has_item(with_throwable(throwable))
}

pub fn has_only_items_of_level(level: Level) -> IterableMatcher<LogEventMatcher<LevelField>> {
    every_item(with_level(level))
}

impl<M: Matcher<LogEvent>> IterableMatcher<M> {
    /// Evaluates `events`, writing the mismatch text into `mismatch`.
    fn matches_with(&self, events: &[LogEvent], mismatch: &mut Description) -> bool {
        match self.mode {
            Mode::HasItem => {
                mismatch.append_text("iterable contained [");
                for (i, event) in events.iter().enumerate() {
                    if self.inner.matches(event) {
                        return true;
                    }
                    if i > 0 {
                        mismatch.append_text(", ");
                    }
                    self.inner.describe_mismatch(event, mismatch);
                }
                mismatch.append_text("]");
                false
            }
            Mode::HasNoItem => {
                mismatch.append_text("iterable contained ");
                match events.iter().find(|event| self.inner.matches(event)) {
                    Some(event) => {
                        self.inner.describe_mismatch(event, mismatch);
                        false
                    }
                    None => true,
                }
            }
            Mode::EveryItem => match events.iter().find(|event| !self.inner.matches(event)) {
                Some(event) => {
                    mismatch.append_text("an item ");
                    self.inner.describe_mismatch(event, mismatch);
                    false
                }
                None => true,
            },
        }
    }
}

impl<M: Matcher<LogEvent>> SelfDescribing for IterableMatcher<M> {
    fn describe_to(&self, description: &mut Description) {
        let prefix = match self.mode {
            Mode::HasItem => "an iterable containing ",
            Mode::HasNoItem => "an iterable not containing ",
            Mode::EveryItem => "every item is ",
        };
        description
            .append_text(prefix)
            .append_description_of(&self.inner);
    }
}

impl<M: Matcher<LogEvent>> Matcher<[LogEvent]> for IterableMatcher<M> {
    fn matches(&self, events: &[LogEvent]) -> bool {
        self.matches_with(events, &mut Description::new())
    }

    fn describe_mismatch(&self, events: &[LogEvent], description: &mut Description) {
        self.matches_with(events, description);
    }
}

impl<M: Matcher<LogEvent>> Matcher<Vec<LogEvent>> for IterableMatcher<M> {
    fn matches(&self, events: &Vec<LogEvent>) -> bool {
        Matcher::<[LogEvent]>::matches(self, events.as_slice())
    }

    fn describe_mismatch(&self, events: &Vec<LogEvent>, description: &mut Description) {
        Matcher::<[LogEvent]>::describe_mismatch(self, events.as_slice(), description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::test_support::describe;
    use crate::{has_level, logged_by, mismatch_report};

    fn levels(levels: &[Level]) -> Vec<LogEvent> {
        levels.iter().copied().map(LogEvent::new).collect()
    }

    #[test]
    fn has_item_matches_when_one_item_matches() {
        let events = levels(&[Level::INFO, Level::ERROR]);
        assert!(has_item(with_level(Level::ERROR)).matches(&events));
    }

    #[test]
    fn has_item_lists_every_mismatch() {
        let events = levels(&[Level::INFO, Level::WARN]);
        let report = mismatch_report("", &events, &has_item(with_level(Level::ERROR))).unwrap();
        assert_eq!(
            report,
            "\nExpected: an iterable containing a LogEvent with level: ERROR\n     but: iterable contained [\
             LogEvent{level=INFO, formattedMessage='null', loggedBy=null, throwable=null}, \
             LogEvent{level=WARN, formattedMessage='null', loggedBy=null, throwable=null}]"
        );
    }

    #[test]
    fn has_item_on_empty_sequence_fails_with_empty_list() {
        let report = mismatch_report("", &Vec::<LogEvent>::new(), &has_item(with_level(Level::ERROR))).unwrap();
        assert!(report.ends_with("but: iterable contained []"));
    }

    #[test]
    fn has_no_item_matches_when_nothing_matches() {
        let events = levels(&[Level::INFO, Level::WARN]);
        assert!(has_no_item(with_level(Level::ERROR)).matches(&events));
        assert!(has_no_item(with_level(Level::ERROR)).matches(&Vec::<LogEvent>::new()));
    }

    #[test]
    fn has_no_item_reports_first_matching_item() {
        let events = levels(&[Level::INFO, Level::ERROR, Level::ERROR]);
        let report = mismatch_report("", &events, &has_no_item(with_level(Level::ERROR))).unwrap();
        assert_eq!(
            report,
            "\nExpected: an iterable not containing a LogEvent with level: ERROR\n     but: iterable contained \
             LogEvent{level=ERROR, formattedMessage='null', loggedBy=null, throwable=null}"
        );
    }

    #[test]
    fn has_item_and_has_no_item_are_complements() {
        let sequences = [
            levels(&[]),
            levels(&[Level::INFO]),
            levels(&[Level::ERROR]),
            levels(&[Level::INFO, Level::WARN, Level::ERROR]),
        ];
        for events in &sequences {
            for level in [Level::INFO, Level::ERROR, Level::TRACE] {
                assert_ne!(
                    has_item(with_level(level)).matches(events),
                    has_no_item(with_level(level)).matches(events)
                );
            }
        }
    }

    #[test]
    fn every_item_reports_first_offender() {
        let events = levels(&[Level::INFO, Level::WARN, Level::DEBUG]);
        let matcher = has_only_items_of_level(Level::INFO);
        assert!(!matcher.matches(&events));
        assert!(matcher.matches(&levels(&[Level::INFO, Level::INFO])));

        let report = mismatch_report("", &events, &matcher).unwrap();
        assert_eq!(
            report,
            "\nExpected: every item is a LogEvent with level: INFO\n     but: an item \
             LogEvent{level=WARN, formattedMessage='null', loggedBy=null, throwable=null}"
        );
    }

    #[test]
    fn message_shorthands() {
        let events = vec![
            LogEvent::new(Level::INFO).with_message("started"),
            LogEvent::new(Level::INFO).with_message("stopped"),
        ];
        assert!(has_item_containing_message("stop").matches(&events));
        assert!(has_no_item_containing_message("crash").matches(&events));
        assert_eq!(
            describe(&has_item_containing_message("x")),
            r#"an iterable containing a LogEvent with a formattedMessage matching: a string containing "x""#
        );
    }

    #[test]
    fn throwable_shorthand() {
        let refused = ThrowableInfo::new("net::Refused", Some("connection refused".into()));
        let events = vec![
            LogEvent::new(Level::INFO),
            LogEvent::new(Level::ERROR).with_throwable(refused.clone()),
        ];
        assert!(has_item_with_throwable(refused).matches(&events));

        let timeout = ThrowableInfo::new("net::Timeout", None);
        let report = mismatch_report("", &events, &has_item_with_throwable(timeout)).unwrap();
        assert!(report.starts_with(
            "\nExpected: an iterable containing a LogEvent with a throwable matching: \
             net::Timeout{message=null}"
        ));
    }

    #[test]
    fn works_over_slices() -> crate::Result {
        let events = [
            LogEvent::new(Level::WARN).with_logger("app::db"),
            LogEvent::new(Level::INFO).with_logger("app::http"),
        ];
        let matcher = has_item(logged_by("app::http")?);
        assert!(Matcher::<[LogEvent]>::matches(&matcher, &events[..]));
        Ok(())
    }

    #[test]
    fn standalone_inner_matcher_keeps_was_prefix() {
        let events = levels(&[Level::INFO]);
        let report = mismatch_report("", &events, &has_item(has_level(Level::ERROR))).unwrap();
        assert!(report.ends_with("iterable contained [was LogEvent{level=INFO, formattedMessage='null', loggedBy=null, throwable=null}]"));
    }
}
