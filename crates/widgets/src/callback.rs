use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A cloneable handle to a widget event handler.
///
/// The parent constructs a callback around a closure that mutates its own
/// model; the widget invokes it through [`Callback::emit`] and never sees
/// the closure itself. Clones share the underlying handler, so equality is
/// handler identity: a clone compares equal to its source, two
/// independently built callbacks do not.
pub struct Callback<T> {
    handler: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T: 'static> Callback<T> {
    /// Wrap a closure as a callback.
    pub fn new(handler: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// A callback that ignores every value it receives.
    ///
    /// Useful for read-only previews and tests where no parent is wired up.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_| {
            log::debug!("noop callback invoked; value ignored");
        })
    }
}

impl<T> Callback<T> {
    /// Invoke the handler with a value.
    pub fn emit(&self, value: T) {
        (self.handler)(value);
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T> PartialEq for Callback<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback<{}>", std::any::type_name::<T>())
    }
}

/// The payload of a change event that may carry one value or many.
///
/// List, text-area, and file widgets share one `on_change` signature: the
/// widget decides per its own mode whether it reports a single string or an
/// ordered sequence. The enum keeps both forms in one signature while
/// making anything else unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueChange {
    /// A single string value.
    Single(String),
    /// An ordered sequence of string values.
    Many(Vec<String>),
}

impl ValueChange {
    /// The single value, if this is the single-value form.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Many(_) => None,
        }
    }

    /// Convert into a sequence; the single form becomes a one-element list.
    #[must_use]
    pub fn into_many(self) -> Vec<String> {
        match self {
            Self::Single(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

impl From<String> for ValueChange {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for ValueChange {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<Vec<String>> for ValueChange {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn emit_reaches_the_handler() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let cb = Callback::new(move |value: String| sink.lock().unwrap().push(value));

        cb.emit("hello".into());
        cb.emit("world".into());

        assert_eq!(*seen.lock().unwrap(), vec!["hello", "world"]);
    }

    #[test]
    fn clones_share_the_handler() {
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let cb = Callback::new(move |()| *sink.lock().unwrap() += 1);
        let clone = cb.clone();

        cb.emit(());
        clone.emit(());

        assert_eq!(*count.lock().unwrap(), 2);
        assert_eq!(cb, clone);
    }

    #[test]
    fn independent_callbacks_are_not_equal() {
        let a: Callback<String> = Callback::noop();
        let b: Callback<String> = Callback::noop();
        assert_ne!(a, b);
    }

    #[test]
    fn noop_ignores_values() {
        let cb: Callback<String> = Callback::noop();
        cb.emit("dropped".into());
    }

    #[test]
    fn debug_does_not_panic() {
        let cb: Callback<Vec<String>> = Callback::noop();
        let rendered = format!("{cb:?}");
        assert!(rendered.starts_with("Callback<"));
    }

    #[test]
    fn change_accepts_single_and_many() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let cb = Callback::new(move |change: ValueChange| {
            sink.lock().unwrap().extend(change.into_many());
        });

        cb.emit(ValueChange::Single("one".into()));
        cb.emit(ValueChange::Many(vec!["two".into(), "three".into()]));

        assert_eq!(*seen.lock().unwrap(), vec!["one", "two", "three"]);
    }

    #[test]
    fn as_single() {
        assert_eq!(ValueChange::Single("x".into()).as_single(), Some("x"));
        assert_eq!(ValueChange::Many(vec!["x".into()]).as_single(), None);
    }

    #[test]
    fn into_many_wraps_single() {
        assert_eq!(ValueChange::Single("x".into()).into_many(), vec!["x"]);
    }

    #[test]
    fn from_conversions() {
        assert_eq!(ValueChange::from("a"), ValueChange::Single("a".into()));
        assert_eq!(
            ValueChange::from(String::from("a")),
            ValueChange::Single("a".into())
        );
        assert_eq!(
            ValueChange::from(vec![String::from("a")]),
            ValueChange::Many(vec!["a".into()])
        );
    }

    #[test]
    fn serde_untagged_forms() {
        let single: ValueChange = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(single, ValueChange::Single("hello".into()));

        let many: ValueChange = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(many, ValueChange::Many(vec!["a".into(), "b".into()]));

        // A numeric payload is not part of the union.
        assert!(serde_json::from_str::<ValueChange>("42").is_err());
    }
}
