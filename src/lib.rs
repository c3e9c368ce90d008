#![cfg_attr(docsrs, feature(doc_cfg))]
//! # Cherry
//!
//! Test helpers for code that logs through [`tracing`] or reads the clock.
//!
//! Cherry records the log events emitted during a test and lets you assert
//! on them with composable, self-describing matchers. A failed assertion
//! explains both what was expected and what was found.
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "recorder")]
//! # fn main() -> cherry::Result {
//! use cherry::*;
//! use tracing::Level;
//!
//! let recorder = LogRecorder::expected_logs([LogSpec::new("checkout", Level::INFO)?]);
//!
//! recorder.apply(|| {
//!     tracing::error!(target: "checkout", "payment rejected");
//! });
//!
//! let event = recorder.event()?;
//! assert_that(&event, &has_level(Level::ERROR));
//! assert_that(&event, &was_logged_by("checkout")?);
//! assert_that(&recorder.events(), &has_item_containing_message("rejected"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "recorder"))]
//! # fn main() {}
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`LogEvent`] | A recorded event: level, message, target and error |
//! | [`Matcher`] | A predicate that can describe itself and a mismatch |
//! | [`LogEventMatcher`] | Matches one field of a [`LogEvent`] |
//! | [`IterableMatcher`] | Lifts an event matcher to a sequence of events |
//! | [`LogRecorder`] | Records events for a set of [`LogSpec`]s |
//! | [`TimeMachine`] | Pins the [`clock`] to a fixed instant |
//! | [`TestRule`] | Scoped setup and teardown around a test body |
//!
//! ## Matcher Flavours
//!
//! Each event field has four factories. `has_level` and `does_not_have_level`
//! are standalone: their mismatch reads `was LogEvent{..}`. `with_level` and
//! `without_level` are meant as items of [`has_item`], [`has_no_item`] or
//! [`every_item`], whose descriptions already say what was found.
//!
//! ## Features
//!
//! - **`recorder`** (default) - [`LogRecorder`], and the [`RecordingLayer`] it installs for use in your own subscriber stack
//! - **`time-machine`** (default) - the controllable [`clock`] and [`TimeMachine`]
//! - **`serde`** - serialization of [`LogEvent`] and [`RecorderConfig`], plus `LogRecorder::to_json()`

mod description;
mod error;
mod log_event;
mod matcher;
mod rule;
mod string_matchers;

pub mod matchers;

#[cfg(feature = "recorder")]
mod recording;

#[cfg(feature = "time-machine")]
#[cfg_attr(docsrs, doc(cfg(feature = "time-machine")))]
pub mod clock;

#[cfg(feature = "time-machine")]
mod time_machine;

pub use description::{Description, SelfDescribing};
pub use error::Error;
pub use log_event::{LogEvent, ThrowableInfo};
pub use matcher::{Matcher, assert_that, assert_that_with_reason};
#[cfg(test)]
pub(crate) use matcher::mismatch_report;
pub use matchers::*;
pub use rule::TestRule;
pub use string_matchers::{StringMatcher, contains_string, ends_with, equal_to, starts_with};

#[cfg(feature = "recorder")]
#[cfg_attr(docsrs, doc(cfg(feature = "recorder")))]
pub use recording::{
    LogRecorder, LogSpec, RecordedEvents, RecorderConfig, RecordingGuard, RecordingLayer,
};

#[cfg(feature = "time-machine")]
#[cfg_attr(docsrs, doc(cfg(feature = "time-machine")))]
pub use time_machine::{ClockGuard, TimeMachine};

/// Convenience alias for `Result<T, cherry::Error>`.
pub type Result<T = ()> = std::result::Result<T, Error>;
