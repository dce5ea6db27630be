use crate::callback::Callback;

/// Props for a single-line text field, optionally password-masked.
///
/// The parent owns the value; the widget reports edits through
/// `on_change` and focus transitions through the optional
/// `on_focus`/`on_blur` hooks.
#[derive(Debug, Clone)]
pub struct InputContract {
    /// Current value.
    pub value: String,

    pub on_change: Callback<String>,

    pub on_focus: Option<Callback<()>>,

    pub on_blur: Option<Callback<()>>,

    /// Mask the value as a password field.
    pub password: bool,

    /// Render non-interactive.
    pub disabled: bool,

    /// Rendered inside the node inspector rather than on the canvas.
    pub edit_mode: bool,
}

impl InputContract {
    #[must_use]
    pub fn new(value: impl Into<String>, on_change: Callback<String>) -> Self {
        Self {
            value: value.into(),
            on_change,
            on_focus: None,
            on_blur: None,
            password: false,
            disabled: false,
            edit_mode: false,
        }
    }

    #[must_use]
    pub fn password(mut self) -> Self {
        self.password = true;
        self
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
    pub fn on_focus(mut self, callback: Callback<()>) -> Self {
        self.on_focus = Some(callback);
        self
    }

    #[must_use]
    pub fn on_blur(mut self, callback: Callback<()>) -> Self {
        self.on_blur = Some(callback);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn new_creates_minimal_input() {
        let input = InputContract::new("hello", Callback::noop());
        assert_eq!(input.value, "hello");
        assert!(input.on_focus.is_none());
        assert!(input.on_blur.is_none());
        assert!(!input.password);
        assert!(!input.disabled);
        assert!(!input.edit_mode);
    }

    #[test]
    fn builder_sets_flags() {
        let input = InputContract::new("secret", Callback::noop())
            .password()
            .disabled()
            .edit_mode();

        assert!(input.password);
        assert!(input.disabled);
        assert!(input.edit_mode);
    }

    #[test]
    fn change_callback_receives_edits() {
        let seen = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&seen);
        let input = InputContract::new(
            "",
            Callback::new(move |value: String| *sink.lock().unwrap() = value),
        );

        input.on_change.emit("typed".into());
        assert_eq!(*seen.lock().unwrap(), "typed");
    }

    #[test]
    fn focus_and_blur_hooks_fire() {
        let events = Arc::new(Mutex::new(Vec::new()));

        let focus_sink = Arc::clone(&events);
        let blur_sink = Arc::clone(&events);
        let input = InputContract::new("", Callback::noop())
            .on_focus(Callback::new(move |()| {
                focus_sink.lock().unwrap().push("focus");
            }))
            .on_blur(Callback::new(move |()| {
                blur_sink.lock().unwrap().push("blur");
            }));

        input.on_focus.as_ref().unwrap().emit(());
        input.on_blur.as_ref().unwrap().emit(());
        assert_eq!(*events.lock().unwrap(), vec!["focus", "blur"]);
    }

    #[test]
    fn clone_preserves_every_field() {
        let input = InputContract::new("v", Callback::noop()).password();
        let clone = input.clone();

        assert_eq!(clone.value, input.value);
        assert_eq!(clone.password, input.password);
        assert_eq!(clone.on_change, input.on_change);
    }
}
