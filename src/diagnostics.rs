//! Advisory diagnostics and the options that gate them.

use serde::{Deserialize, Serialize};

use crate::consts::{DEPRECATED_TIME_PROPS, DEPRECATED_TIME_PROPS_MESSAGE};
use crate::props::PickerProps;

/// Receiver for non-fatal advisories. Never affects the pipeline's output.
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

/// Sink that forwards advisories to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "picker_props", deprecated = ?DEPRECATED_TIME_PROPS, "{message}");
    }
}

/// Pipeline options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FillOptions {
    /// Run development-only checks. Defaults to on in debug builds.
    pub diagnostics_enabled: bool,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            diagnostics_enabled: cfg!(debug_assertions),
        }
    }
}

/// Returns the advisory for a time picker still using the per-unit
/// disablers, if it applies.
pub fn deprecated_time_props<D>(props: &PickerProps<D>) -> Option<&'static str> {
    props
        .uses_deprecated_time_props()
        .then_some(DEPRECATED_TIME_PROPS_MESSAGE)
}
