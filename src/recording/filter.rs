use tracing::{Level, Metadata};
use tracing_subscriber::layer::{Context, Filter};

use crate::LogSpec;

/// Per-layer filter admitting what a set of [`LogSpec`]s asks for.
///
/// A target is decided by the longest spec covering it; events more verbose
/// than that spec's level are dropped.
#[derive(Debug, Clone)]
pub(crate) struct SpecFilter {
    specs: Vec<LogSpec>,
}

impl SpecFilter {
    pub(crate) fn new(specs: &[LogSpec]) -> Self {
        Self {
            specs: specs.to_vec(),
        }
    }

    /// The most verbose level recorded for `target`, if any spec covers it.
    fn level_for(&self, target: &str) -> Option<Level> {
        self.specs
            .iter()
            .filter(|spec| spec.covers(target))
            .max_by_key(|spec| (spec.target().len(), spec.level()))
            .map(LogSpec::level)
    }

    fn admits(&self, metadata: &Metadata<'_>) -> bool {
        self.level_for(metadata.target())
            .is_some_and(|level| *metadata.level() <= level)
    }
}

impl<S> Filter<S> for SpecFilter {
    fn enabled(&self, metadata: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.admits(metadata)
    }
}
