use crate::callback::{Callback, ValueChange};

/// Props for a multi-value text list editor.
///
/// `on_change` takes the string-or-sequence union: the widget reports the
/// whole list on reorder/remove and a single string on item edit.
#[derive(Debug, Clone)]
pub struct InputListContract {
    /// Current values, in order.
    pub values: Vec<String>,

    pub on_change: Callback<ValueChange>,

    /// Render non-interactive.
    pub disabled: bool,
}

impl InputListContract {
    #[must_use]
    pub fn new(values: Vec<String>, on_change: Callback<ValueChange>) -> Self {
        Self {
            values,
            on_change,
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}
