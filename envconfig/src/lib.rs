//! Typed, nested configuration from environment variables
//!
//! `envconfig` fills a struct from the process environment. Field names and
//! `#[envconfig(...)]` attributes decide the key, whether a value is required,
//! its default, and whether it may come from a mounted secret file. Values
//! are converted into the field's declared type, including lists, maps and
//! durations.
//!
//! # Features
//!
//! - **Declarative**: `#[derive(EnvConfig)]` on any struct with named fields
//! - **Prefixed keys**: `process("myapp", &mut cfg)` reads `MYAPP_*`
//! - **File-based secrets**: `{KEY}_FILE` takes precedence when readable
//! - **Nested structs**: sub-structs under their own key, or flattened
//! - **All errors at once**: every failing field is reported
//! - **Extensible**: the [`Coerce`] and [`Decode`] traits, or a custom deserializer
//!
//! # Value Parsing
//!
//! - Strings are used verbatim: `MYAPP_NAME=my service`
//! - Integers are base 10 and range-checked: `MYAPP_PORT=8080`
//! - Booleans: `1 t T TRUE true True` and `0 f F FALSE false False`
//! - Durations: `MYAPP_TIMEOUT=1m30s`
//! - Lists: `MYAPP_USERS=rob,ken,robert`
//! - Maps: `MYAPP_COLORS=red:1,green:2,blue:3`
//!
//! # Example
//!
//! ```rust
//! use envconfig::EnvConfig;
//! use std::time::Duration;
//!
//! #[derive(Debug, Default, EnvConfig)]
//! struct Config {
//!     #[envconfig(required)]
//!     pub user: String,
//!
//!     #[envconfig(default = 8080)]
//!     pub port: u16,
//!
//!     #[envconfig(split_words, default = "30s")]
//!     pub request_timeout: Duration,
//!
//!     pub users: Vec<String>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("DEMO_USER", "kelsey");
//! #     std::env::set_var("DEMO_USERS", "rob,ken,robert");
//! let mut config = Config::default();
//! envconfig::process("demo", &mut config)?;
//!
//! assert_eq!(config.user, "kelsey");
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.request_timeout, Duration::from_secs(30));
//! assert_eq!(config.users, vec!["rob", "ken", "robert"]);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[envconfig(name = "KEY")]`
//!
//! Replace the derived key. `PREFIX_KEY` is tried first, then the bare `KEY`,
//! so a field can bind directly to an unprefixed variable such as
//! `SERVICE_HOST`.
//!
//! ## `#[envconfig(split_words)]`
//!
//! Join the words of the field name with `_`: `request_timeout` reads
//! `PREFIX_REQUEST_TIMEOUT` instead of `PREFIX_REQUESTTIMEOUT`. Put it on the
//! struct to enable it for every field.
//!
//! ## `#[envconfig(file_content)]`
//!
//! Read the value from the file named by `PREFIX_KEY_FILE`. The file wins over
//! `PREFIX_KEY`; a missing variable or unreadable file silently falls back to
//! it. `file_content = "_PATH"` changes the suffix. One trailing `\n` is
//! removed from the file content; everything else, `\r` included, is kept.
//!
//! ## `#[envconfig(nested)]` and `#[envconfig(flatten)]`
//!
//! A nested struct reads `PREFIX_FIELD_*`; a flattened one shares `PREFIX_*`.
//!
//! ## Others
//!
//! `default = "value"`, `required`, `ignored`, `desc = "text"`, `decoder`
//! (see [`Decode`]) and `deserializer = "path::to::fn"`.

mod bind;
mod coerce;
mod decode;
mod describe;
mod duration;
mod env;
mod error;
mod field;
mod file;
mod key;
mod name;
mod usage;

pub use coerce::Coerce;
pub use decode::{Decode, Json};
pub use describe::{check_disallowed, check_disallowed_in, gather, VarInfo};
pub use duration::{parse_duration, DurationError};
pub use env::{Environment, ProcessEnv};
pub use envconfig_derive::EnvConfig;
pub use error::{BoxError, EnvError};
pub use field::{FieldInfo, Specification, Visitor};
pub use key::{Keys, DEFAULT_FILE_SUFFIX};
pub use name::derive_suffix;
pub use usage::usage;

// Helpers for macro-generated code
#[doc(hidden)]
pub mod __private {
    pub use crate::decode::apply as apply_decoder;
    pub use crate::field::{display_error, short_type_name};
}

/// Populate `spec` from the process environment.
///
/// Keys are `PREFIX_FIELD`, with `prefix` upper-cased; an empty prefix uses
/// bare field keys. Every field is attempted; a single failure is returned
/// as-is, several are returned as [`EnvError::Multiple`].
///
/// # Errors
///
/// - A required field has no value and no default
/// - A present value cannot be converted into the field's type
pub fn process<S: Specification>(prefix: &str, spec: &mut S) -> Result<(), EnvError> {
    process_with(prefix, spec, &ProcessEnv)
}

/// Populate `spec` from an explicit [`Environment`].
///
/// ```
/// use envconfig::EnvConfig;
/// use std::collections::HashMap;
///
/// #[derive(Default, EnvConfig)]
/// struct Config {
///     #[envconfig(name = "SERVICE_HOST")]
///     host: String,
/// }
///
/// let env = HashMap::from([("SERVICE_HOST".to_string(), "db.internal".to_string())]);
/// let mut config = Config::default();
/// envconfig::process_with("myapp", &mut config, &env).unwrap();
/// assert_eq!(config.host, "db.internal");
/// ```
///
/// # Errors
///
/// Same as [`process`].
pub fn process_with<S, E>(prefix: &str, spec: &mut S, env: &E) -> Result<(), EnvError>
where
    S: Specification,
    E: Environment + ?Sized,
{
    bind::Binder::new(prefix, env).run(spec)
}

/// Like [`process`], but panics on failure.
///
/// # Panics
///
/// When [`process`] returns an error.
pub fn must_process<S: Specification>(prefix: &str, spec: &mut S) {
    if let Err(e) = process(prefix, spec) {
        panic!("{e}");
    }
}
