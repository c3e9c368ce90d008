use std::fmt;
use std::future::Future;

use tracing::Dispatch;
use tracing::dispatcher::DefaultGuard;
use tracing::instrument::WithSubscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;

use crate::recording::filter::SpecFilter;
use crate::{
    Error, LogEvent, LogSpec, RecordedEvents, RecorderConfig, RecordingLayer, Result, TestRule,
};

/// Records the log events emitted by the code under test.
///
/// While active, the recorder is the default `tracing` subscriber of the
/// current thread. It records events whose target is covered by one of its
/// [`LogSpec`]s at or above that spec's level, and restores the previous
/// default subscriber afterwards. When several specs cover a target, the
/// one with the longest target decides.
///
/// # Example
///
/// ```rust
/// use cherry::{LogRecorder, LogSpec, TestRule, assert_that, has_item, with_level};
/// use tracing::Level;
///
/// # fn main() -> cherry::Result {
/// let recorder = LogRecorder::expected_logs([LogSpec::new("billing", Level::INFO)?]);
///
/// recorder.apply(|| {
///     tracing::warn!(target: "billing::invoice", "invoice overdue");
///     tracing::debug!(target: "billing", "too verbose, not recorded");
/// });
///
/// assert_eq!(recorder.len(), 1);
/// assert_that(&recorder.events(), &has_item(with_level(Level::WARN)));
/// # Ok(())
/// # }
/// ```
///
/// # Note
///
/// The subscriber is installed per thread. Events emitted on other threads
/// are not recorded; for async tests use [`in_scope_async`](Self::in_scope_async),
/// which carries the subscriber with the future.
pub struct LogRecorder {
    specs: Vec<LogSpec>,
    config: RecorderConfig,
    events: RecordedEvents,
}

impl fmt::Debug for LogRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecorder")
            .field("specs", &self.specs)
            .field("recorded", &self.len())
            .finish_non_exhaustive()
    }
}

impl LogRecorder {
    /// Creates a recorder for the given specs. Duplicate specs are collapsed.
    pub fn expected_logs(specs: impl IntoIterator<Item = LogSpec>) -> Self {
        Self::new(RecorderConfig::default(), specs)
    }

    pub fn new(config: RecorderConfig, specs: impl IntoIterator<Item = LogSpec>) -> Self {
        let mut unique: Vec<LogSpec> = Vec::new();
        for spec in specs {
            if !unique.contains(&spec) {
                unique.push(spec);
            }
        }
        Self {
            specs: unique,
            config,
            events: RecordedEvents::default(),
        }
    }

    pub fn specs(&self) -> &[LogSpec] {
        &self.specs
    }

    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    /// Starts recording on the current thread until the guard is dropped.
    ///
    /// Events from an earlier recording are discarded.
    pub fn start(&self) -> RecordingGuard {
        self.clear();
        let dispatch = self.dispatch();
        tracing::debug!(specs = self.specs.len(), "log recorder started");
        RecordingGuard {
            default: Some(tracing::dispatcher::set_default(&dispatch)),
            events: self.events.clone(),
        }
    }

    /// Records events emitted while `future` runs, on whichever thread polls it.
    pub fn in_scope_async<F: Future>(&self, future: F) -> impl Future<Output = F::Output> {
        self.clear();
        future.with_subscriber(self.dispatch())
    }

    /// All recorded events, in emission order.
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.events()
    }

    /// The first recorded event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoEventRecorded`] if nothing was recorded.
    pub fn event(&self) -> Result<LogEvent> {
        self.events.first().ok_or(Error::NoEventRecorded)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discards all recorded events.
    pub fn clear(&self) {
        self.events.clear();
    }

    /// Renders the recorded events as a JSON array.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.events.events())
    }

    fn dispatch(&self) -> Dispatch {
        let layer = RecordingLayer::with_events(self.config.clone(), self.events.clone());
        let filter = SpecFilter::new(&self.specs);
        Dispatch::new(tracing_subscriber::registry().with(layer.with_filter(filter)))
    }
}

impl TestRule for LogRecorder {
    type Guard = RecordingGuard;

    fn before(&self) -> RecordingGuard {
        self.start()
    }
}

/// Keeps a [`LogRecorder`] installed; dropping it restores the previous
/// default subscriber.
#[must_use = "recording stops as soon as the guard is dropped"]
pub struct RecordingGuard {
    default: Option<DefaultGuard>,
    events: RecordedEvents,
}

impl fmt::Debug for RecordingGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingGuard")
            .field("active", &self.default.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for RecordingGuard {
    fn drop(&mut self) {
        drop(self.default.take());
        let recorded = self.events.len();
        tracing::debug!(recorded, "log recorder stopped");
    }
}
