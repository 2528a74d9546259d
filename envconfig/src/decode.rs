//! Extension hooks for user-defined field types

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::coerce::Coerce;
use crate::error::BoxError;

/// In-place decoding for custom field types, enabled with `#[envconfig(decoder)]`.
///
/// Both methods are optional: returning `None` means the hook is not
/// implemented. `decode` is tried first, then `set`. A type implementing
/// neither is reported as a parse error.
///
/// ```
/// use envconfig::{BoxError, Decode};
///
/// #[derive(Default)]
/// struct Level(u8);
///
/// impl Decode for Level {
///     fn decode(&mut self, raw: &str) -> Option<Result<(), BoxError>> {
///         self.0 = match raw {
///             "low" => 1,
///             "high" => 9,
///             other => return Some(Err(format!("unknown level {other}").into())),
///         };
///         Some(Ok(()))
///     }
/// }
/// ```
pub trait Decode {
    /// Decode the whole raw value.
    fn decode(&mut self, raw: &str) -> Option<Result<(), BoxError>> {
        let _ = raw;
        None
    }

    /// Set the value from a single token; lower priority than `decode`.
    fn set(&mut self, raw: &str) -> Option<Result<(), BoxError>> {
        let _ = raw;
        None
    }
}

/// Run the first implemented hook of `target` (used by macro-generated code)
#[doc(hidden)]
pub fn apply<T: Decode + ?Sized>(target: &mut T, raw: &str) -> Result<(), BoxError> {
    if let Some(result) = target.decode(raw) {
        return result;
    }
    if let Some(result) = target.set(raw) {
        return result;
    }
    Err("unsupported type: implements neither decode nor set".into())
}

/// A field parsed from a JSON document.
///
/// ```
/// use envconfig::{Coerce, Json};
///
/// let tags = Json::<Vec<String>>::coerce(r#"["api","prod"]"#).unwrap();
/// assert_eq!(*tags, vec!["api", "prod"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Unwrap the parsed value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: DeserializeOwned> Coerce for Json<T> {
    fn coerce(raw: &str) -> Result<Self, BoxError> {
        serde_json::from_str(raw).map(Json).map_err(Into::into)
    }

    fn description() -> String {
        "JSON".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Both(String);

    impl Decode for Both {
        fn decode(&mut self, raw: &str) -> Option<Result<(), BoxError>> {
            self.0 = format!("decode:{raw}");
            Some(Ok(()))
        }

        fn set(&mut self, raw: &str) -> Option<Result<(), BoxError>> {
            self.0 = format!("set:{raw}");
            Some(Ok(()))
        }
    }

    #[derive(Default)]
    struct SetOnly(Vec<String>);

    impl Decode for SetOnly {
        fn set(&mut self, raw: &str) -> Option<Result<(), BoxError>> {
            self.0.push(raw.to_string());
            Some(Ok(()))
        }
    }

    struct Neither;

    impl Decode for Neither {}

    #[test]
    fn test_decode_wins_over_set() {
        let mut target = Both::default();
        apply(&mut target, "x").unwrap();
        assert_eq!(target.0, "decode:x");
    }

    #[test]
    fn test_set_used_without_decode() {
        let mut target = SetOnly::default();
        apply(&mut target, "token").unwrap();
        assert_eq!(target.0, vec!["token"]);
    }

    #[test]
    fn test_neither_is_unsupported() {
        let err = apply(&mut Neither, "x").unwrap_err();
        assert!(err.to_string().contains("unsupported type"));
    }

    #[test]
    fn test_json() {
        let parsed = Json::<HashMap<String, u32>>::coerce(r#"{"a":1}"#).unwrap();
        assert_eq!(parsed["a"], 1);
        assert!(Json::<Vec<u32>>::coerce("[1,").is_err());
        assert_eq!(Json::<u8>::description(), "JSON");
    }
}
