//! Listing the variables a specification binds to

use crate::error::{BoxError, EnvError};
use crate::field::{FieldInfo, Specification, Visitor};
use crate::key::Keys;

/// One bindable variable of a specification.
#[derive(Debug, Clone)]
pub struct VarInfo {
    /// Keys looked up for the field
    pub keys: Keys,
    /// The field's descriptor
    pub field: FieldInfo,
}

impl VarInfo {
    /// Key shown to users: the explicit key when given, else the derived one.
    pub fn display_key(&self) -> &str {
        self.keys.reported()
    }

    /// Usage label of the field's type.
    pub fn type_label(&self) -> String {
        (self.field.describe)()
    }

    /// Whether `key` is read for this field, including the secret file key.
    pub fn matches(&self, key: &str) -> bool {
        if self.keys.matches(key) {
            return true;
        }
        self.field
            .file_content
            .is_some_and(|suffix| self.keys.file_key(suffix) == key)
    }
}

struct Collector {
    prefix: String,
    vars: Vec<VarInfo>,
}

impl Visitor for Collector {
    fn leaf<F>(&mut self, field: &FieldInfo, _assign: F)
    where
        F: FnOnce(&str) -> Result<(), BoxError>,
    {
        self.vars.push(VarInfo {
            keys: Keys::resolve(&self.prefix, field),
            field: *field,
        });
    }

    fn nested<S: Specification>(&mut self, field: &FieldInfo, target: &mut S) {
        let keys = Keys::resolve(&self.prefix, field);
        let outer = std::mem::replace(&mut self.prefix, keys.primary);
        target.visit(self);
        self.prefix = outer;
    }

    fn flatten<S: Specification>(&mut self, target: &mut S) {
        target.visit(self);
    }
}

/// Collect the variables of `S` under `prefix`, in field order.
pub fn gather<S: Specification + Default>(prefix: &str) -> Vec<VarInfo> {
    let mut collector = Collector {
        prefix: prefix.to_uppercase(),
        vars: Vec::new(),
    };
    S::default().visit(&mut collector);
    collector.vars
}

/// Reject `PREFIX_*` variables in the process environment that no field of
/// `S` binds to.
pub fn check_disallowed<S: Specification + Default>(prefix: &str) -> Result<(), EnvError> {
    let vars = std::env::vars_os().filter_map(|(key, value)| {
        Some((key.into_string().ok()?, value.to_string_lossy().into_owned()))
    });
    check_disallowed_in::<S>(prefix, vars)
}

/// Like [`check_disallowed`], over an explicit set of variables.
///
/// The first unknown key in iteration order is reported.
pub fn check_disallowed_in<S: Specification + Default>(
    prefix: &str,
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<(), EnvError> {
    let known = gather::<S>(prefix);
    let needle = format!("{}_", prefix.to_uppercase());

    for (key, _) in vars {
        if !key.starts_with(&needle) {
            continue;
        }
        if !known.iter().any(|var| var.matches(&key)) {
            return Err(EnvError::Disallowed { key });
        }
    }
    Ok(())
}
