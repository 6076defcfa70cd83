//! Error types for the stepper component.

use thiserror::Error;

/// Errors raised at the stepper's input boundaries.
///
/// Setters (`set_labels`, `set_theme`) return these directly. Index
/// violations on [`move_to`](crate::stepper::Model::move_to) and
/// [`advance`](crate::stepper::Model::advance) are caller-contract bugs and
/// panic with this type's message; the `try_*` variants hand the error back
/// instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StepperError {
    /// A label sequence must contain at least one step.
    #[error("labels must contain at least one step")]
    EmptyLabels,

    /// The requested step does not exist.
    #[error("step index {index} is out of range for {count} labels")]
    IndexOutOfRange {
        /// Index that was requested.
        index: usize,
        /// Number of labels currently configured.
        count: usize,
    },

    /// A theme value is outside its allowed range.
    #[error("invalid theme: {field} {reason}")]
    InvalidTheme {
        /// Name of the offending field.
        field: &'static str,
        /// What the field must satisfy.
        reason: &'static str,
    },
}
