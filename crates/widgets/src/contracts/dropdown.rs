use crate::callback::Callback;

/// Props for a single-choice selector.
#[derive(Debug, Clone)]
pub struct DropdownContract {
    /// Currently selected value.
    pub value: String,

    /// The choices, in display order.
    pub options: Vec<String>,

    pub on_select: Callback<String>,
}

impl DropdownContract {
    #[must_use]
    pub fn new(
        value: impl Into<String>,
        options: Vec<String>,
        on_select: Callback<String>,
    ) -> Self {
        Self {
            value: value.into(),
            options,
            on_select,
        }
    }

    /// Whether the given value is one of the offered options.
    #[must_use]
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}
