//! Field descriptors and the visitor protocol shared by binding and usage

use crate::error::BoxError;

/// Static description of one struct field.
///
/// Built by `#[derive(EnvConfig)]` for every field that is not `ignored`.
#[derive(Debug, Clone, Copy)]
pub struct FieldInfo {
    /// Rust field identifier
    pub name: &'static str,
    /// Explicit key from `#[envconfig(name = "...")]`
    pub key: Option<&'static str>,
    /// Raw value used when no candidate key is set
    pub default: Option<&'static str>,
    /// Report a failure when no value resolves
    pub required: bool,
    /// Split CamelCase words when deriving the key
    pub split_words: bool,
    /// File path key suffix; `Some("")` selects `_FILE`
    pub file_content: Option<&'static str>,
    /// Human readable description for usage output
    pub desc: Option<&'static str>,
    /// Type name reported in parse errors
    pub type_name: &'static str,
    /// Type label for usage output
    pub describe: fn() -> String,
}

impl FieldInfo {
    /// Descriptor with every option unset.
    pub fn new(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            key: None,
            default: None,
            required: false,
            split_words: false,
            file_content: None,
            desc: None,
            type_name,
            describe: describe_string,
        }
    }
}

/// A struct that can be populated from the environment.
///
/// Usually derived with `#[derive(EnvConfig)]`. A manual implementation hands
/// each field to the visitor in declaration order:
///
/// ```
/// use envconfig::{Coerce, FieldInfo, Specification, Visitor};
///
/// #[derive(Default)]
/// struct Server {
///     port: u16,
/// }
///
/// impl Specification for Server {
///     fn visit<V: Visitor>(&mut self, visitor: &mut V) {
///         let mut info = FieldInfo::new("port", std::any::type_name::<u16>());
///         info.default = Some("8080");
///         info.describe = <u16 as Coerce>::description;
///         visitor.leaf(&info, |raw| {
///             self.port = u16::coerce(raw)?;
///             Ok(())
///         });
///     }
/// }
///
/// let mut server = Server::default();
/// envconfig::process("manual_demo", &mut server).unwrap();
/// assert_eq!(server.port, 8080);
/// ```
pub trait Specification {
    /// Hand every field to `visitor`.
    fn visit<V: Visitor>(&mut self, visitor: &mut V);
}

/// Receives the fields of a [`Specification`].
pub trait Visitor {
    /// A field converted from a single raw string.
    ///
    /// `assign` writes the converted value into the field; it is called at
    /// most once.
    fn leaf<F>(&mut self, field: &FieldInfo, assign: F)
    where
        F: FnOnce(&str) -> Result<(), BoxError>;

    /// A sub-record whose keys are prefixed with this field's key.
    fn nested<S: Specification>(&mut self, field: &FieldInfo, target: &mut S);

    /// An embedded sub-record sharing the current prefix.
    fn flatten<S: Specification>(&mut self, target: &mut S);
}

fn describe_string() -> String {
    "String".to_string()
}

/// Last path segment of a type name, generics included.
#[doc(hidden)]
pub fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let start = base.rfind("::").map_or(0, |i| i + 2);
    full[start..].to_string()
}

/// Wrap a `Display` error from a custom deserializer (used by macro-generated code)
#[doc(hidden)]
pub fn display_error<E: std::fmt::Display>(error: E) -> BoxError {
    error.to_string().into()
}
