/// Error type for the widget contract layer.
///
/// Shape correctness is compile-time; the only runtime failures are the
/// string-boundary parsers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// Placement string is not one of the twelve known positions.
    #[error("unknown placement `{value}`")]
    UnknownPlacement { value: String },

    /// Side string is neither `left` nor `right`.
    #[error("unknown side `{value}`")]
    UnknownSide { value: String },

    /// A string-encoded numeric value failed to parse.
    #[error("invalid numeric value `{value}`")]
    InvalidNumber { value: String },
}

impl WidgetError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownPlacement { .. } => "WIDGET_UNKNOWN_PLACEMENT",
            Self::UnknownSide { .. } => "WIDGET_UNKNOWN_SIDE",
            Self::InvalidNumber { .. } => "WIDGET_INVALID_NUMBER",
        }
    }
}
