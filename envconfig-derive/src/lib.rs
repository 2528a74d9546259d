//! Derive macro implementation for envconfig

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Type};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// Extract inner type from Option<T>
fn extract_option_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let seg = type_path.path.segments.last()?;
    if seg.ident != "Option" {
        return None;
    }
    if let syn::PathArguments::AngleBracketed(args) = &seg.arguments {
        if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
            return Some(inner);
        }
    }
    None
}

fn opt_str(value: &Option<String>) -> TokenStream2 {
    match value {
        Some(s) => quote!(::std::option::Option::Some(#s)),
        None => quote!(::std::option::Option::None),
    }
}

/// `EnvConfig` derive macro
///
/// Implements `envconfig::Specification` so the struct can be passed to
/// `envconfig::process`.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[envconfig(split_words)]`: Split words of every field name
///
/// **Field-level**:
/// - `#[envconfig(name = "KEY")]`: Explicit key, also tried without prefix
/// - `#[envconfig(default = "value")]`: Raw value used when no key is set
/// - `#[envconfig(required)]`: Report a missing value
/// - `#[envconfig(ignored)]`: Skip the field
/// - `#[envconfig(split_words)]`: `MultiWord` reads `MULTI_WORD`
/// - `#[envconfig(file_content)]`: Prefer the file named by `{KEY}_FILE`
/// - `#[envconfig(file_content = "_PATH")]`: Same, with a custom suffix
/// - `#[envconfig(desc = "text")]`: Description for usage output
/// - `#[envconfig(nested)]`: Sub-struct read under `{KEY}_`
/// - `#[envconfig(flatten)]`: Sub-struct sharing the parent prefix
/// - `#[envconfig(decoder)]`: Field type implements `envconfig::Decode`
/// - `#[envconfig(deserializer = "func")]`: Use a custom deserializer function
///
/// Only structs with named fields are supported:
///
/// ```compile_fail
/// use envconfig::EnvConfig;
///
/// #[derive(EnvConfig)]
/// enum Mode {
///     Dev,
///     Prod,
/// }
/// ```
///
/// ```compile_fail
/// use envconfig::EnvConfig;
///
/// #[derive(EnvConfig)]
/// struct Pair(String, u16);
/// ```
///
/// Invalid combinations are compile errors:
///
/// ```compile_fail
/// use envconfig::EnvConfig;
///
/// #[derive(Default, EnvConfig)]
/// struct Database {
///     host: String,
/// }
///
/// #[derive(Default, EnvConfig)]
/// struct Config {
///     #[envconfig(nested, default = "localhost")]
///     db: Database,
/// }
/// ```
///
/// # Example
///
/// See the `envconfig` crate documentation for usage examples.
#[proc_macro_derive(EnvConfig, attributes(envconfig))]
pub fn derive_envconfig(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvConfig only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvConfig only supports structs",
            ));
        }
    };

    let mut visits = Vec::new();
    let mut errors = Vec::new();
    for field in fields {
        match FieldAttrs::from_field(field) {
            Ok(attrs) if attrs.ignored => {}
            Ok(attrs) => visits.push(field_visit(field, &attrs, &struct_attrs)),
            Err(e) => errors.push(e),
        }
    }
    let combined = errors.into_iter().reduce(|mut all, e| {
        all.combine(e);
        all
    });
    if let Some(e) = combined {
        return Err(e);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envconfig::Specification for #struct_name #ty_generics #where_clause {
            fn visit<__V: ::envconfig::Visitor>(&mut self, __visitor: &mut __V) {
                #(#visits)*
            }
        }
    })
}

/// Generate the visitor call for one field.
fn field_visit(field: &Field, attrs: &FieldAttrs, struct_attrs: &StructAttrs) -> TokenStream2 {
    let ident = field.ident.as_ref().expect("named field");
    let ty = &field.ty;
    let option_inner = extract_option_inner_type(ty);

    if attrs.flatten {
        return match option_inner {
            Some(_) => quote! {
                __visitor.flatten(self.#ident.get_or_insert_with(::std::default::Default::default));
            },
            None => quote! { __visitor.flatten(&mut self.#ident); },
        };
    }

    let name = ident.unraw().to_string();
    let key = opt_str(&attrs.name);
    let default = opt_str(&attrs.default);
    let file_content = opt_str(&attrs.file_content);
    let desc = opt_str(&attrs.desc);
    let required = attrs.required;
    let split_words = attrs.split_words.unwrap_or(struct_attrs.split_words);
    let value_ty = option_inner.unwrap_or(ty);

    let describe = if attrs.decoder || attrs.deserializer.is_some() || attrs.nested {
        quote!(::envconfig::__private::short_type_name::<#value_ty>)
    } else {
        quote!(<#ty as ::envconfig::Coerce>::description)
    };

    let info = quote! {
        &::envconfig::FieldInfo {
            name: #name,
            key: #key,
            default: #default,
            required: #required,
            split_words: #split_words,
            file_content: #file_content,
            desc: #desc,
            type_name: ::std::any::type_name::<#ty>(),
            describe: #describe,
        }
    };

    if attrs.nested {
        return match option_inner {
            Some(_) => quote! {
                __visitor.nested(#info, self.#ident.get_or_insert_with(::std::default::Default::default));
            },
            None => quote! { __visitor.nested(#info, &mut self.#ident); },
        };
    }

    let assign = if let Some(func_path) = &attrs.deserializer {
        let func: TokenStream2 = match func_path.parse() {
            Ok(func) => func,
            Err(_) => {
                return syn::Error::new_spanned(field, "deserializer must be a function path")
                    .to_compile_error();
            }
        };
        let wrap = match option_inner {
            Some(_) => quote!(::std::option::Option::Some),
            None => quote!(),
        };
        quote! {
            self.#ident = #wrap(#func(__raw).map_err(::envconfig::__private::display_error)?);
            ::std::result::Result::Ok(())
        }
    } else if attrs.decoder {
        match option_inner {
            // Decode into a fresh value so a failure leaves the field as it was.
            Some(inner) => quote! {
                let mut __value: #inner = ::std::default::Default::default();
                ::envconfig::__private::apply_decoder(&mut __value, __raw)?;
                self.#ident = ::std::option::Option::Some(__value);
                ::std::result::Result::Ok(())
            },
            None => quote! {
                ::envconfig::__private::apply_decoder(&mut self.#ident, __raw)
            },
        }
    } else {
        quote! {
            self.#ident = <#ty as ::envconfig::Coerce>::coerce(__raw)?;
            ::std::result::Result::Ok(())
        }
    };

    quote! {
        __visitor.leaf(#info, |__raw: &str| { #assign });
    }
}
