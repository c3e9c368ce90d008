use crate::{
    Description, EventField, LogEvent, LogEventMatcher, Matcher, StringMatcher, Usage,
    contains_string,
};

/// Applies a string sub-matcher to the formatted message.
///
/// An event without a message never satisfies the sub-matcher.
#[derive(Debug, Clone)]
pub struct MessageField<M> {
    matcher: M,
}

impl<M: Matcher<str> + Send + Sync> EventField for MessageField<M> {
    fn matches(&self, event: &LogEvent) -> bool {
        event
            .formatted_message()
            .is_some_and(|message| self.matcher.matches(message))
    }

    fn describe_expectation(&self, negated: bool, description: &mut Description) {
        let phrase = if negated {
            "a LogEvent with a formattedMessage not matching: "
        } else {
            "a LogEvent with a formattedMessage matching: "
        };
        description
            .append_text(phrase)
            .append_description_of(&self.matcher);
    }
}

fn message_matcher<M>(matcher: M, usage: Usage) -> LogEventMatcher<MessageField<M>>
where
    M: Matcher<str> + Send + Sync,
{
    LogEventMatcher::new(MessageField { matcher }, usage)
}

/// Matches an event whose formatted message satisfies `matcher`.
pub fn has_message<M>(matcher: M) -> LogEventMatcher<MessageField<M>>
where
    M: Matcher<str> + Send + Sync,
{
    message_matcher(matcher, Usage::Standalone)
}

pub fn does_not_have_message<M>(matcher: M) -> LogEventMatcher<MessageField<M>>
where
    M: Matcher<str> + Send + Sync,
{
    message_matcher(matcher, Usage::StandaloneNegated)
}

/// Item form of [`has_message`].
pub fn with_message<M>(matcher: M) -> LogEventMatcher<MessageField<M>>
where
    M: Matcher<str> + Send + Sync,
{
    message_matcher(matcher, Usage::Item)
}

pub fn without_message<M>(matcher: M) -> LogEventMatcher<MessageField<M>>
where
    M: Matcher<str> + Send + Sync,
{
    message_matcher(matcher, Usage::ItemNegated)
}

/// Shorthand for `has_message(contains_string(substring))`.
///
/// Use `format!` for a parameterized substring.
pub fn contains_message(substring: impl Into<String>) -> LogEventMatcher<MessageField<StringMatcher>> {
    has_message(contains_string(substring))
}

pub fn does_not_contain_message(
    substring: impl Into<String>,
) -> LogEventMatcher<MessageField<StringMatcher>> {
    does_not_have_message(contains_string(substring))
}

/// Shorthand for `with_message(contains_string(substring))`.
pub fn with_message_containing(
    substring: impl Into<String>,
) -> LogEventMatcher<MessageField<StringMatcher>> {
    with_message(contains_string(substring))
}
