//! Capturing `tracing` events for assertions.

mod config;
mod filter;
mod layer;
mod log_spec;
mod recorder;

pub use config::RecorderConfig;
pub use layer::{RecordedEvents, RecordingLayer};
pub use log_spec::LogSpec;
pub use recorder::{LogRecorder, RecordingGuard};
