//! The matcher protocol and the assertion that drives it.

use crate::{Description, SelfDescribing};

/// A predicate over `T` that can explain itself.
///
/// `describe_to` (from [`SelfDescribing`]) states the expectation;
/// `describe_mismatch` explains why a given item failed it. Matchers are
/// immutable after construction and may be evaluated any number of times.
pub trait Matcher<T: ?Sized>: SelfDescribing {
    fn matches(&self, item: &T) -> bool;

    fn describe_mismatch(&self, item: &T, description: &mut Description);
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, item: &T) -> bool {
        (**self).matches(item)
    }

    fn describe_mismatch(&self, item: &T, description: &mut Description) {
        (**self).describe_mismatch(item, description)
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    fn matches(&self, item: &T) -> bool {
        (**self).matches(item)
    }

    fn describe_mismatch(&self, item: &T, description: &mut Description) {
        (**self).describe_mismatch(item, description)
    }
}

/// Panics with an `Expected/but` report when `matcher` rejects `actual`.
///
/// ```rust,should_panic
/// use cherry::{LogEvent, assert_that, has_level};
/// use tracing::Level;
///
/// // Expected: a LogEvent with level: ERROR
/// //      but: was LogEvent{level=INFO, ...}
/// assert_that(&LogEvent::new(Level::INFO), &has_level(Level::ERROR));
/// ```
#[track_caller]
pub fn assert_that<T: ?Sized, M: Matcher<T> + ?Sized>(actual: &T, matcher: &M) {
    assert_that_with_reason("", actual, matcher)
}

/// Like [`assert_that`], with `reason` as the first line of the report.
#[track_caller]
pub fn assert_that_with_reason<T: ?Sized, M: Matcher<T> + ?Sized>(
    reason: &str,
    actual: &T,
    matcher: &M,
) {
    if let Some(report) = mismatch_report(reason, actual, matcher) {
        panic!("{report}");
    }
}

/// Builds the failure report, or `None` when `actual` matches.
pub(crate) fn mismatch_report<T: ?Sized, M: Matcher<T> + ?Sized>(
    reason: &str,
    actual: &T,
    matcher: &M,
) -> Option<String> {
    if matcher.matches(actual) {
        return None;
    }
    let mut description = Description::new();
    description
        .append_text(reason)
        .append_text("\nExpected: ")
        .append_description_of(matcher)
        .append_text("\n     but: ");
    matcher.describe_mismatch(actual, &mut description);
    Some(description.into_string())
}
