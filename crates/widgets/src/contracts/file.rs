use crate::callback::{Callback, ValueChange};

/// Props for a file-upload field.
///
/// `on_change` reports the stored value (path or reference) through the
/// string-or-sequence union; `on_file_selected` fires with the raw picker
/// result before the parent resolves it.
#[derive(Debug, Clone)]
pub struct FileContract {
    /// Current stored value.
    pub value: String,

    /// Allowed file suffixes, e.g. `".json"`. Empty means any.
    pub suffixes: Vec<String>,

    /// Allowed file type names, e.g. `"json"`.
    pub file_types: Vec<String>,

    pub on_change: Callback<ValueChange>,

    pub on_file_selected: Callback<String>,
}

impl FileContract {
    #[must_use]
    pub fn new(
        value: impl Into<String>,
        on_change: Callback<ValueChange>,
        on_file_selected: Callback<String>,
    ) -> Self {
        Self {
            value: value.into(),
            suffixes: Vec::new(),
            file_types: Vec::new(),
            on_change,
            on_file_selected,
        }
    }

    #[must_use]
    pub fn with_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.suffixes = suffixes;
        self
    }

    #[must_use]
    pub fn with_file_types(mut self, file_types: Vec<String>) -> Self {
        self.file_types = file_types;
        self
    }

    /// Whether a file name matches the allowed suffixes.
    ///
    /// An empty suffix list accepts everything; matching is
    /// case-insensitive.
    #[must_use]
    pub fn accepts(&self, file_name: &str) -> bool {
        if self.suffixes.is_empty() {
            return true;
        }
        let lower = file_name.to_lowercase();
        self.suffixes
            .iter()
            .any(|suffix| lower.ends_with(&suffix.to_lowercase()))
    }
}
