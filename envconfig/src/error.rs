//! Error types for environment variable binding

use std::fmt;

/// Boxed error returned by coercions, decoders and custom deserializers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when populating a specification from the environment.
///
/// A single [`process`](crate::process) call reports every failing field:
/// - exactly one failure is returned as-is (`Missing` or `Parse`)
/// - two or more are wrapped in `Multiple`
///
/// File-backed lookups never produce an error; an unreadable secret file
/// silently falls back to the plain variable.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// Required field has no value and no default.
    #[error("required key {key} missing value")]
    Missing {
        /// Key reported to the user (the explicit key when one was given)
        key: String,
        /// Name of the struct field
        field: String,
    },

    /// A resolved value could not be converted into the field's type.
    ///
    /// Also raised for [`Decode`](crate::Decode) types implementing neither hook.
    #[error("assigning {key} to {field}: converting '{value}' to type {type_name}. details: {source}")]
    Parse {
        /// Environment variable the value was bound under
        key: String,
        /// Name of the struct field
        field: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Raw value that failed to convert
        value: String,
        /// Underlying cause from the coercion
        #[source]
        source: BoxError,
    },

    /// More than one field failed.
    #[error("{}", DisplayMultiple(.0))]
    Multiple(Vec<EnvError>),

    /// A prefixed variable is set that no field binds to.
    ///
    /// Only produced by [`check_disallowed`](crate::check_disallowed).
    #[error("unknown environment variable {key}")]
    Disallowed {
        /// The unexpected environment variable
        key: String,
    },
}

impl EnvError {
    /// Create a parse error (used by the binder)
    #[doc(hidden)]
    pub fn parse_error(
        key: impl Into<String>,
        field: impl Into<String>,
        type_name: impl Into<String>,
        value: impl Into<String>,
        source: BoxError,
    ) -> Self {
        Self::Parse {
            key: key.into(),
            field: field.into(),
            type_name: type_name.into(),
            value: value.into(),
            source,
        }
    }

    /// Create a missing required value error (used by the binder)
    #[doc(hidden)]
    pub fn missing(key: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Missing {
            key: key.into(),
            field: field.into(),
        }
    }

    /// Collapse collected field failures into the result of a binding call.
    pub(crate) fn aggregate(mut errors: Vec<EnvError>) -> Result<(), EnvError> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(Self::Multiple(errors)),
        }
    }

    /// Iterate over the individual field failures.
    ///
    /// A non-aggregate error yields itself.
    pub fn errors(&self) -> impl Iterator<Item = &EnvError> {
        let slice = match self {
            Self::Multiple(errors) => errors.as_slice(),
            other => std::slice::from_ref(other),
        };
        slice.iter()
    }
}

struct DisplayMultiple<'a>(&'a [EnvError]);

impl fmt::Display for DisplayMultiple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} configuration errors:", self.0.len())?;
        for error in self.0 {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}
