//! Attribute parsing for `#[envconfig(...)]` annotations.
//!
//! This module extracts and validates configuration attributes from the
//! struct and its fields during macro expansion.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Field, Lit};

const ATTR: &str = "envconfig";

/// Parsed struct-level `#[envconfig(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Default `split_words` for every field.
    pub split_words: bool,
}

impl StructAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("split_words") {
                    parsed.split_words = flag(&meta)?;
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level envconfig attribute"))
            })?;
        }

        Ok(parsed)
    }
}

/// Parsed `#[envconfig(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Explicit key replacing the one derived from the field name.
    pub name: Option<String>,

    /// Raw default value, converted like an environment value.
    pub default: Option<String>,

    /// Missing value is an error.
    pub required: bool,

    /// Field is not read at all.
    pub ignored: bool,

    /// Split CamelCase words of the field name with `_`.
    ///
    /// `None` inherits the struct-level setting.
    pub split_words: Option<bool>,

    /// Suffix of the key holding a secret file path; empty means `_FILE`.
    pub file_content: Option<String>,

    /// Description shown in usage output.
    pub desc: Option<String>,

    /// Sub-struct read under this field's key.
    pub nested: bool,

    /// Sub-struct sharing the parent's prefix.
    pub flatten: bool,

    /// Field type implements `envconfig::Decode`.
    pub decoder: bool,

    /// Custom deserializer function path (e.g., `"serde_json::from_str"`).
    pub deserializer: Option<String>,
}

impl FieldAttrs {
    /// Extract and validate `#[envconfig(...)]` attributes from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in field.attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
            attr.parse_nested_meta(|meta| attrs.parse_one(&meta))?;
        }

        attrs.validate(field)?;
        Ok(attrs)
    }

    fn parse_one(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        let path = &meta.path;

        if path.is_ident("name") {
            self.name = Some(string_value(meta)?);
        } else if path.is_ident("default") {
            self.default = Some(string_value(meta)?);
        } else if path.is_ident("required") {
            self.required = flag(meta)?;
        } else if path.is_ident("ignored") {
            self.ignored = flag(meta)?;
        } else if path.is_ident("split_words") {
            self.split_words = Some(flag(meta)?);
        } else if path.is_ident("file_content") {
            self.file_content = file_suffix(meta)?;
        } else if path.is_ident("desc") {
            self.desc = Some(string_value(meta)?);
        } else if path.is_ident("nested") {
            self.nested = flag(meta)?;
        } else if path.is_ident("flatten") {
            self.flatten = flag(meta)?;
        } else if path.is_ident("decoder") {
            self.decoder = flag(meta)?;
        } else if path.is_ident("deserializer") {
            self.deserializer = Some(string_value(meta)?);
        } else {
            return Err(meta.error("unsupported envconfig attribute"));
        }

        Ok(())
    }

    fn validate(&self, field: &Field) -> syn::Result<()> {
        let fail = |message: &str| Err(syn::Error::new_spanned(field, message));

        if self.nested && self.flatten {
            return fail("`nested` and `flatten` cannot be combined");
        }
        if self.decoder && self.deserializer.is_some() {
            return fail("`decoder` and `deserializer` cannot be combined");
        }
        if self.nested || self.flatten {
            let kind = if self.nested { "nested" } else { "flatten" };
            if self.default.is_some() || self.required || self.file_content.is_some() {
                let message = format!("`{kind}` fields cannot have `default`, `required` or `file_content`");
                return fail(&message);
            }
            if self.decoder || self.deserializer.is_some() {
                let message = format!("`{kind}` fields cannot have `decoder` or `deserializer`");
                return fail(&message);
            }
        }
        if self.flatten && self.name.is_some() {
            return fail("`flatten` fields share the parent prefix and cannot have `name`");
        }

        Ok(())
    }
}

/// `key`, `key = true` or `key = "true"`.
fn flag(meta: &ParseNestedMeta<'_>) -> syn::Result<bool> {
    if !meta.input.peek(syn::Token![=]) {
        return Ok(true);
    }

    match meta.value()?.parse::<Lit>()? {
        Lit::Bool(b) => Ok(b.value),
        Lit::Str(s) => parse_bool(&s.value()).ok_or_else(|| syn::Error::new_spanned(s, "expected a boolean")),
        other => Err(syn::Error::new_spanned(other, "expected a boolean")),
    }
}

/// `file_content`, `file_content = true`, or `file_content = "_SUFFIX"`.
fn file_suffix(meta: &ParseNestedMeta<'_>) -> syn::Result<Option<String>> {
    if !meta.input.peek(syn::Token![=]) {
        return Ok(Some(String::new()));
    }

    match meta.value()?.parse::<Lit>()? {
        Lit::Bool(b) => Ok(b.value.then(String::new)),
        Lit::Str(s) => {
            let value = s.value();
            match parse_bool(&value) {
                Some(enabled) => Ok(enabled.then(String::new)),
                None => Ok(Some(value)),
            }
        }
        other => Err(syn::Error::new_spanned(other, "expected a boolean or a suffix string")),
    }
}

/// A literal rendered as the raw string the runtime will see.
fn string_value(meta: &ParseNestedMeta<'_>) -> syn::Result<String> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(s) => Ok(s.value()),
        Lit::Int(i) => Ok(i.base10_digits().to_string()),
        Lit::Float(f) => Ok(f.base10_digits().to_string()),
        Lit::Bool(b) => Ok(b.value.to_string()),
        Lit::Char(c) => Ok(c.value().to_string()),
        other => Err(syn::Error::new_spanned(other, "expected a string, number or boolean literal")),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{parse_quote, DeriveInput};

    #[test]
    fn test_parse_name_attribute() {
        let field: Field = parse_quote! {
            #[envconfig(name = "SERVICE_HOST")]
            pub host: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("SERVICE_HOST".to_string()));
    }

    #[test]
    fn test_parse_default_string() {
        let field: Field = parse_quote! {
            #[envconfig(default = "127.0.0.1:8080")]
            pub addr: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default.as_deref(), Some("127.0.0.1:8080"));
    }

    #[test]
    fn test_parse_default_number() {
        let field: Field = parse_quote! {
            #[envconfig(default = 42)]
            pub workers: i32
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default.as_deref(), Some("42"));
    }

    #[test]
    fn test_parse_default_bool_and_float() {
        let field: Field = parse_quote! {
            #[envconfig(default = true)]
            pub debug: bool
        };
        assert_eq!(FieldAttrs::from_field(&field).unwrap().default.as_deref(), Some("true"));

        let field: Field = parse_quote! {
            #[envconfig(default = 0.5)]
            pub rate: f64
        };
        assert_eq!(FieldAttrs::from_field(&field).unwrap().default.as_deref(), Some("0.5"));
    }

    #[test]
    fn test_parse_flags() {
        let field: Field = parse_quote! {
            #[envconfig(required, split_words, desc = "the user")]
            pub user_name: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.required);
        assert_eq!(attrs.split_words, Some(true));
        assert_eq!(attrs.desc.as_deref(), Some("the user"));
    }

    #[test]
    fn test_parse_flag_with_value() {
        let field: Field = parse_quote! {
            #[envconfig(required = "true", ignored = false)]
            pub user: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.required);
        assert!(!attrs.ignored);
    }

    #[test]
    fn test_parse_file_content() {
        let field: Field = parse_quote! {
            #[envconfig(file_content)]
            pub secret: String
        };
        assert_eq!(FieldAttrs::from_field(&field).unwrap().file_content.as_deref(), Some(""));

        let field: Field = parse_quote! {
            #[envconfig(file_content = "true")]
            pub secret: String
        };
        assert_eq!(FieldAttrs::from_field(&field).unwrap().file_content.as_deref(), Some(""));

        let field: Field = parse_quote! {
            #[envconfig(file_content = "_PATH")]
            pub secret: String
        };
        assert_eq!(FieldAttrs::from_field(&field).unwrap().file_content.as_deref(), Some("_PATH"));

        let field: Field = parse_quote! {
            #[envconfig(file_content = false)]
            pub secret: String
        };
        assert_eq!(FieldAttrs::from_field(&field).unwrap().file_content, None);
    }

    #[test]
    fn test_parse_multiple_attributes() {
        let field: Field = parse_quote! {
            #[envconfig(name = "DB_URL")]
            #[envconfig(file_content, required)]
            pub database_url: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.name, Some("DB_URL".to_string()));
        assert!(attrs.file_content.is_some());
        assert!(attrs.required);
    }

    #[test]
    fn test_parse_deserializer() {
        let field: Field = parse_quote! {
            #[envconfig(deserializer = "serde_json::from_str")]
            pub tags: Vec<String>
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.deserializer, Some("serde_json::from_str".to_string()));
    }

    #[test]
    fn test_ignores_foreign_attributes() {
        let field: Field = parse_quote! {
            #[serde(rename = "x")]
            #[envconfig(nested)]
            pub db: Database
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.nested);
    }

    #[test]
    fn test_rejects_unknown_attribute() {
        let field: Field = parse_quote! {
            #[envconfig(envvar = "X")]
            pub x: String
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("unsupported envconfig attribute"));
    }

    #[test]
    fn test_rejects_nested_and_flatten() {
        let field: Field = parse_quote! {
            #[envconfig(nested, flatten)]
            pub db: Database
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_rejects_nested_with_default() {
        let field: Field = parse_quote! {
            #[envconfig(nested, default = "x")]
            pub db: Database
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("`nested` fields cannot have"));
    }

    #[test]
    fn test_rejects_decoder_with_deserializer() {
        let field: Field = parse_quote! {
            #[envconfig(decoder, deserializer = "parse")]
            pub level: Level
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_struct_split_words() {
        let input: DeriveInput = parse_quote! {
            #[envconfig(split_words)]
            struct Config { a: String }
        };

        let attrs = StructAttrs::from_attrs(&input.attrs).unwrap();
        assert!(attrs.split_words);
    }

    #[test]
    fn test_struct_rejects_unknown() {
        let input: DeriveInput = parse_quote! {
            #[envconfig(prefix = "APP")]
            struct Config { a: String }
        };

        assert!(StructAttrs::from_attrs(&input.attrs).is_err());
    }
}
