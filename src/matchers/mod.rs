//! Matchers over [`LogEvent`]s and sequences of them.
//!
//! Every field matcher comes in four flavours, selected by [`Usage`]:
//!
//! ```rust
//! use cherry::{LogEvent, assert_that, does_not_have_level, has_item, has_level, with_level};
//! use tracing::Level;
//!
//! let event = LogEvent::new(Level::WARN);
//! assert_that(&event, &has_level(Level::WARN));
//! assert_that(&event, &does_not_have_level(Level::ERROR));
//!
//! // `with_*` matchers are meant as items of an iterable matcher
//! let events = vec![LogEvent::new(Level::INFO), event];
//! assert_that(events.as_slice(), &has_item(with_level(Level::WARN)));
//! ```

mod event_field;
mod iterable;
mod level;
mod logger;
mod message;
mod throwable;
mod usage;

pub use event_field::{EventField, LogEventMatcher};
pub use iterable::{
    IterableMatcher, every_item, has_item, has_item_containing_message, has_item_with_throwable,
    has_no_item, has_no_item_containing_message, has_only_items_of_level,
};
pub use level::{LevelField, does_not_have_level, has_level, with_level, without_level};
pub(crate) use logger::module_of;
pub use logger::{
    LoggerField, logged_by, not_logged_by, was_logged_by, was_logged_by_type, was_not_logged_by,
};
pub use message::{
    MessageField, contains_message, does_not_contain_message, does_not_have_message, has_message,
    with_message, with_message_containing, without_message,
};
pub use throwable::{
    ThrowableField, does_not_have_throwable, has_throwable, with_throwable, without_throwable,
};
pub use usage::Usage;
