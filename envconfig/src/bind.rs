//! Populating a specification from an [`Environment`]

use crate::env::Environment;
use crate::error::{BoxError, EnvError};
use crate::field::{FieldInfo, Specification, Visitor};
use crate::file::read_file_value;
use crate::key::Keys;

/// Walks a specification, resolving and assigning every field and
/// collecting failures without stopping.
pub(crate) struct Binder<'e, E: ?Sized> {
    env: &'e E,
    prefix: String,
    errors: Vec<EnvError>,
}

impl<'e, E: Environment + ?Sized> Binder<'e, E> {
    pub(crate) fn new(prefix: &str, env: &'e E) -> Self {
        Self {
            env,
            prefix: prefix.to_uppercase(),
            errors: Vec::new(),
        }
    }

    /// Bind `spec` and report the collected failures.
    pub(crate) fn run<S: Specification>(mut self, spec: &mut S) -> Result<(), EnvError> {
        spec.visit(&mut self);
        EnvError::aggregate(self.errors)
    }

    /// Raw value for a field and the key it came from: file, then candidate
    /// keys, then default. A default is attributed to the primary key.
    fn resolve(&self, field: &FieldInfo, keys: &Keys) -> Option<(String, String)> {
        if let Some(suffix) = field.file_content {
            let file_key = keys.file_key(suffix);
            if let Some(value) = read_file_value(self.env, &file_key) {
                tracing::debug!(field = field.name, key = %file_key, "resolved from file");
                return Some((value, file_key));
            }
        }

        for key in keys.candidates() {
            if let Some(value) = self.env.lookup(key) {
                tracing::debug!(field = field.name, key, "resolved from environment");
                return Some((value, key.to_string()));
            }
        }

        field.default.map(|default| {
            tracing::debug!(field = field.name, key = %keys.primary, "using default");
            (default.to_string(), keys.primary.clone())
        })
    }
}

impl<E: Environment + ?Sized> Visitor for Binder<'_, E> {
    fn leaf<F>(&mut self, field: &FieldInfo, assign: F)
    where
        F: FnOnce(&str) -> Result<(), BoxError>,
    {
        let keys = Keys::resolve(&self.prefix, field);

        let Some((value, bound_key)) = self.resolve(field, &keys) else {
            if field.required {
                self.errors.push(EnvError::missing(keys.reported(), field.name));
            }
            return;
        };

        if let Err(source) = assign(&value) {
            self.errors.push(EnvError::parse_error(
                bound_key,
                field.name,
                field.type_name,
                value,
                source,
            ));
        }
    }

    fn nested<S: Specification>(&mut self, field: &FieldInfo, target: &mut S) {
        let keys = Keys::resolve(&self.prefix, field);
        tracing::trace!(field = field.name, prefix = %keys.primary, "entering nested specification");

        let outer = std::mem::replace(&mut self.prefix, keys.primary);
        target.visit(self);
        self.prefix = outer;
    }

    fn flatten<S: Specification>(&mut self, target: &mut S) {
        target.visit(self);
    }
}
