use crate::callback::{Callback, ValueChange};

/// Props for a multi-line text field.
#[derive(Debug, Clone)]
pub struct TextAreaContract {
    /// Current value.
    pub value: String,

    /// Takes the string-or-sequence union; the widget picks the form by
    /// its own mode.
    pub on_change: Callback<ValueChange>,

    /// Render non-interactive.
    pub disabled: bool,

    /// Rendered inside the node inspector rather than on the canvas.
    pub edit_mode: bool,
}

impl TextAreaContract {
    #[must_use]
    pub fn new(value: impl Into<String>, on_change: Callback<ValueChange>) -> Self {
        Self {
            value: value.into(),
            on_change,
            disabled: false,
            edit_mode: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    #[must_use]
    pub fn edit_mode(mut self) -> Self {
        self.edit_mode = true;
        self
    }
}
