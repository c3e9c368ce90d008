//! The in-memory sink the [`LogRecorder`](crate::LogRecorder) installs.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

use crate::{LogEvent, RecorderConfig, ThrowableInfo};

/// Shared handle to the events a [`RecordingLayer`] has recorded.
///
/// Clones see the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordedEvents {
    inner: Arc<Mutex<Vec<LogEvent>>>,
}

impl RecordedEvents {
    /// All recorded events, in emission order.
    pub fn events(&self) -> Vec<LogEvent> {
        self.inner.lock().clone()
    }

    pub fn first(&self) -> Option<LogEvent> {
        self.inner.lock().first().cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    fn push(&self, event: LogEvent) {
        self.inner.lock().push(event);
    }
}

/// A tracing [`Layer`] that turns every event it sees into a [`LogEvent`]
/// and appends it to a [`RecordedEvents`] buffer.
///
/// The layer records everything it is given. Compose it with a per-layer
/// filter to narrow it down:
///
/// ```rust
/// use cherry::{RecorderConfig, RecordingLayer};
/// use tracing_subscriber::filter::LevelFilter;
/// use tracing_subscriber::prelude::*;
///
/// let (layer, recorded) = RecordingLayer::new(RecorderConfig::default());
/// let subscriber = tracing_subscriber::registry().with(layer.with_filter(LevelFilter::WARN));
///
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!("skipped");
///     tracing::warn!("kept");
/// });
/// assert_eq!(recorded.len(), 1);
/// ```
pub struct RecordingLayer {
    config: RecorderConfig,
    events: RecordedEvents,
}

impl fmt::Debug for RecordingLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingLayer")
            .field("config", &self.config)
            .field("recorded", &self.events.len())
            .finish()
    }
}

impl RecordingLayer {
    /// Creates a layer with an empty buffer, and a handle to read it.
    pub fn new(config: RecorderConfig) -> (Self, RecordedEvents) {
        let events = RecordedEvents::default();
        (Self::with_events(config, events.clone()), events)
    }

    pub(crate) fn with_events(config: RecorderConfig, events: RecordedEvents) -> Self {
        Self { config, events }
    }
}

impl<S: Subscriber> Layer<S> for RecordingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = EventVisitor::new(&self.config);
        event.record(&mut visitor);

        let mut recorded = LogEvent::new(*metadata.level()).with_logger(metadata.target());
        if let Some(message) = visitor.message {
            recorded = recorded.with_message(message);
        }
        if visitor.error_message.is_some() || visitor.error_type.is_some() {
            let class_name = visitor
                .error_type
                .unwrap_or_else(|| ThrowableInfo::UNKNOWN_CLASS_NAME.to_string());
            recorded = recorded.with_throwable(ThrowableInfo::new(class_name, visitor.error_message));
        }

        self.events.push(recorded);
    }
}

/// Extracts the message and error fields named by the config.
struct EventVisitor<'a> {
    config: &'a RecorderConfig,
    message: Option<String>,
    error_message: Option<String>,
    error_type: Option<String>,
}

impl<'a> EventVisitor<'a> {
    fn new(config: &'a RecorderConfig) -> Self {
        Self {
            config,
            message: None,
            error_message: None,
            error_type: None,
        }
    }

    fn store(&mut self, field: &Field, value: String) {
        let name = field.name();
        if name == self.config.message_field() {
            self.message = Some(value);
        } else if name == self.config.error_field() {
            self.error_message = Some(value);
        } else if name == self.config.error_type_field() {
            self.error_type = Some(value);
        }
    }
}

impl Visit for EventVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.store(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.store(field, value.to_string());
    }
}
