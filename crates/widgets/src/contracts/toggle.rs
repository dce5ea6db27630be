use crate::callback::Callback;

/// Props for a boolean switch.
#[derive(Debug, Clone)]
pub struct ToggleContract {
    /// Current state.
    pub enabled: bool,

    pub on_toggle: Callback<bool>,

    /// Render non-interactive.
    pub disabled: bool,
}

impl ToggleContract {
    #[must_use]
    pub fn new(enabled: bool, on_toggle: Callback<bool>) -> Self {
        Self {
            enabled,
            on_toggle,
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}
