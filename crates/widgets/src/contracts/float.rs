use crate::callback::Callback;
use crate::error::WidgetError;

/// Props for a numeric text field.
///
/// The value travels string-encoded so the widget can hold intermediate
/// states like `"1."` while the user types; [`FloatContract::parsed`] is
/// the boundary where it becomes a number.
#[derive(Debug, Clone)]
pub struct FloatContract {
    /// Current value, string-encoded.
    pub value: String,

    pub on_change: Callback<String>,

    /// Render non-interactive.
    pub disabled: bool,

    /// Rendered inside the node inspector rather than on the canvas.
    pub edit_mode: bool,

    /// Block clipboard interaction on the field.
    pub disable_copy_paste: bool,
}

impl FloatContract {
    #[must_use]
    pub fn new(value: impl Into<String>, on_change: Callback<String>) -> Self {
        Self {
            value: value.into(),
            on_change,
            disabled: false,
            edit_mode: false,
            disable_copy_paste: false,
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

    #[must_use]
    pub fn disable_copy_paste(mut self) -> Self {
        self.disable_copy_paste = true;
        self
    }

    /// Parse the string-encoded value.
    pub fn parsed(&self) -> Result<f64, WidgetError> {
        self.value
            .trim()
            .parse()
            .map_err(|_| WidgetError::InvalidNumber {
                value: self.value.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn new_creates_minimal_float() {
        let float = FloatContract::new("0.7", Callback::noop());
        assert_eq!(float.value, "0.7");
        assert!(!float.disabled);
        assert!(!float.edit_mode);
        assert!(!float.disable_copy_paste);
    }

    #[test]
    fn builder_sets_flags() {
        let float = FloatContract::new("1", Callback::noop())
            .disabled()
            .edit_mode()
            .disable_copy_paste();

        assert!(float.disabled);
        assert!(float.edit_mode);
        assert!(float.disable_copy_paste);
    }

    #[test]
    fn parsed_accepts_valid_numbers() {
        assert_eq!(FloatContract::new("0.7", Callback::noop()).parsed().unwrap(), 0.7);
        assert_eq!(
            FloatContract::new(" 42 ", Callback::noop()).parsed().unwrap(),
            42.0
        );
        assert_eq!(
            FloatContract::new("-1e3", Callback::noop()).parsed().unwrap(),
            -1000.0
        );
    }

    #[test]
    fn parsed_rejects_garbage() {
        let err = FloatContract::new("1.2.3", Callback::noop())
            .parsed()
            .unwrap_err();
        assert_eq!(
            err,
            WidgetError::InvalidNumber {
                value: "1.2.3".into()
            }
        );
    }

    #[test]
    fn change_callback_receives_raw_text() {
        let seen = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&seen);
        let float = FloatContract::new(
            "0",
            Callback::new(move |value: String| *sink.lock().unwrap() = value),
        );

        // Intermediate states pass through unparsed.
        float.on_change.emit("1.".into());
        assert_eq!(*seen.lock().unwrap(), "1.");
    }
}
