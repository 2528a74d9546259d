//! Candidate key resolution

use crate::field::FieldInfo;
use crate::name::derive_suffix;

/// Suffix appended to the primary key to find a secret file path.
pub const DEFAULT_FILE_SUFFIX: &str = "_FILE";

/// Lookup keys for a single field, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keys {
    /// Prefixed key, always tried first
    pub primary: String,
    /// Bare explicit key, tried when the primary key is unset
    pub alt: Option<String>,
}

impl Keys {
    /// Resolve the keys for `field` under an already upper-cased `prefix`.
    pub fn resolve(prefix: &str, field: &FieldInfo) -> Self {
        let alt = field.key.map(str::to_uppercase);
        let suffix = match &alt {
            Some(key) => key.clone(),
            None => derive_suffix(field.name, field.split_words),
        };

        let primary = if prefix.is_empty() {
            suffix
        } else {
            format!("{prefix}_{suffix}")
        };
        let alt = alt.filter(|key| *key != primary);

        Self { primary, alt }
    }

    /// Keys to look up, primary first.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str()).chain(self.alt.as_deref())
    }

    /// Whether `key` is one of this field's candidates.
    pub fn matches(&self, key: &str) -> bool {
        self.candidates().any(|candidate| candidate == key)
    }

    /// Key reported when a required field is missing.
    pub fn reported(&self) -> &str {
        self.alt.as_deref().unwrap_or(&self.primary)
    }

    /// Key holding the path of a file-backed value.
    ///
    /// `suffix` is the `file_content` marker; an empty marker means `_FILE`.
    pub fn file_key(&self, suffix: &str) -> String {
        let suffix = suffix.to_uppercase();
        match suffix.as_str() {
            "" => format!("{}{DEFAULT_FILE_SUFFIX}", self.primary),
            s if s.starts_with('_') => format!("{}{s}", self.primary),
            s => format!("{}_{s}", self.primary),
        }
    }
}
