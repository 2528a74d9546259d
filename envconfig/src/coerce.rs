//! Conversion of raw strings into typed field values

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::duration::parse_duration;
use crate::error::BoxError;

/// Types that can be built from a single raw environment value.
///
/// Implemented for the scalar types, [`Duration`], sequences, maps and
/// `Option<T>`. Implement it for your own types to use them as fields or as
/// elements of a `Vec` / map.
pub trait Coerce: Sized {
    /// Convert `raw` into a value.
    fn coerce(raw: &str) -> Result<Self, BoxError>;

    /// Type label used in usage output.
    fn description() -> String;
}

/// Accepted truthy and falsy spellings, matching the common `ParseBool` set.
fn parse_bool(raw: &str) -> Result<bool, BoxError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(format!("invalid boolean {raw:?}").into()),
    }
}

impl Coerce for bool {
    fn coerce(raw: &str) -> Result<Self, BoxError> {
        parse_bool(raw)
    }

    fn description() -> String {
        "True or False".to_string()
    }
}

macro_rules! coerce_from_str {
    ($label:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl Coerce for $ty {
                fn coerce(raw: &str) -> Result<Self, BoxError> {
                    raw.parse::<$ty>().map_err(Into::into)
                }

                fn description() -> String {
                    $label.to_string()
                }
            }
        )+
    };
}

coerce_from_str!("Integer" => i8, i16, i32, i64, i128, isize);
coerce_from_str!("Unsigned Integer" => u8, u16, u32, u64, u128, usize);
coerce_from_str!("Float" => f32, f64);
coerce_from_str!("Character" => char);
coerce_from_str!("IP Address" => IpAddr, Ipv4Addr, Ipv6Addr);
coerce_from_str!("Socket Address" => SocketAddr);

impl Coerce for String {
    fn coerce(raw: &str) -> Result<Self, BoxError> {
        Ok(raw.to_string())
    }

    fn description() -> String {
        "String".to_string()
    }
}

impl Coerce for PathBuf {
    fn coerce(raw: &str) -> Result<Self, BoxError> {
        Ok(PathBuf::from(raw))
    }

    fn description() -> String {
        "Path".to_string()
    }
}

impl Coerce for Duration {
    fn coerce(raw: &str) -> Result<Self, BoxError> {
        parse_duration(raw).map_err(Into::into)
    }

    fn description() -> String {
        "Duration".to_string()
    }
}

/// Present values become `Some`; an unset key leaves the field untouched.
impl<T: Coerce> Coerce for Option<T> {
    fn coerce(raw: &str) -> Result<Self, BoxError> {
        T::coerce(raw).map(Some)
    }

    fn description() -> String {
        T::description()
    }
}

/// Split a list value on `,`. Blank input is an empty list.
fn items(raw: &str) -> impl Iterator<Item = &str> {
    let blank = raw.trim().is_empty();
    raw.split(',').filter(move |_| !blank)
}

impl<T: Coerce> Coerce for Vec<T> {
    fn coerce(raw: &str) -> Result<Self, BoxError> {
        items(raw).map(T::coerce).collect()
    }

    fn description() -> String {
        format!("Comma-separated list of {}", T::description())
    }
}

fn entry<K: Coerce, V: Coerce>(item: &str) -> Result<(K, V), BoxError> {
    let (key, value) = item
        .split_once(':')
        .ok_or_else(|| format!("invalid map item: {item:?}"))?;
    Ok((K::coerce(key)?, V::coerce(value)?))
}

impl<K, V, S> Coerce for HashMap<K, V, S>
where
    K: Coerce + Eq + Hash,
    V: Coerce,
    S: BuildHasher + Default,
{
    fn coerce(raw: &str) -> Result<Self, BoxError> {
        items(raw).map(entry::<K, V>).collect()
    }

    fn description() -> String {
        map_description::<K, V>()
    }
}

impl<K: Coerce + Ord, V: Coerce> Coerce for BTreeMap<K, V> {
    fn coerce(raw: &str) -> Result<Self, BoxError> {
        items(raw).map(entry::<K, V>).collect()
    }

    fn description() -> String {
        map_description::<K, V>()
    }
}

fn map_description<K: Coerce, V: Coerce>() -> String {
    format!(
        "Comma-separated list of {}:{} pairs",
        K::description(),
        V::description()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_spellings() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert!(bool::coerce(raw).unwrap(), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert!(!bool::coerce(raw).unwrap(), "{raw}");
        }
        for raw in ["yes", "tRUE", "", " true"] {
            assert!(bool::coerce(raw).is_err(), "{raw}");
        }
    }

    #[test]
    fn test_integers() {
        assert_eq!(u16::coerce("8080").unwrap(), 8080);
        assert_eq!(i32::coerce("-42").unwrap(), -42);
        assert!(u8::coerce("256").is_err());
        assert!(i8::coerce("-129").is_err());
        assert!(u32::coerce("-1").is_err());
        assert!(u32::coerce("0x10").is_err());
        assert!(i64::coerce("").is_err());
    }

    #[test]
    fn test_floats() {
        assert_eq!(f64::coerce("0.5").unwrap(), 0.5);
        assert_eq!(f32::coerce("1e3").unwrap(), 1000.0);
        assert!(f64::coerce("fast").is_err());
    }

    #[test]
    fn test_string_is_verbatim() {
        assert_eq!(String::coerce("  padded, with comma ").unwrap(), "  padded, with comma ");
        assert_eq!(String::coerce("").unwrap(), "");
    }

    #[test]
    fn test_duration() {
        assert_eq!(Duration::coerce("3m").unwrap(), Duration::from_secs(180));
        assert!(Duration::coerce("3").is_err());
    }

    #[test]
    fn test_addresses() {
        assert_eq!(
            SocketAddr::coerce("127.0.0.1:8080").unwrap(),
            SocketAddr::from(([127, 0, 0, 1], 8080))
        );
        assert!(IpAddr::coerce("localhost").is_err());
    }

    #[test]
    fn test_sequence() {
        let v: Vec<String> = Vec::coerce("rob,ken,robert").unwrap();
        assert_eq!(v, vec!["rob", "ken", "robert"]);

        let v: Vec<String> = Vec::coerce("").unwrap();
        assert!(v.is_empty());

        // pieces are not trimmed
        let v: Vec<String> = Vec::coerce("a, b").unwrap();
        assert_eq!(v, vec!["a", " b"]);

        let v: Vec<u32> = Vec::coerce("1,2,3").unwrap();
        assert_eq!(v, vec![1, 2, 3]);
        assert!(Vec::<u32>::coerce("1,,3").is_err());
    }

    #[test]
    fn test_mapping() {
        let m: HashMap<String, i32> = HashMap::coerce("red:1,green:2,blue:3").unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m["red"], 1);
        assert_eq!(m["green"], 2);
        assert_eq!(m["blue"], 3);

        let m: BTreeMap<String, String> = BTreeMap::coerce("url:http://host:80").unwrap();
        assert_eq!(m["url"], "http://host:80");

        let m: HashMap<String, i32> = HashMap::coerce("k:1,k:2").unwrap();
        assert_eq!(m["k"], 2);

        let m: HashMap<String, i32> = HashMap::coerce("").unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_mapping_entry_without_colon() {
        let err = <HashMap<String, i32>>::coerce("red:1,green").unwrap_err();
        assert_eq!(err.to_string(), "invalid map item: \"green\"");
    }

    #[test]
    fn test_option() {
        assert_eq!(Option::<u8>::coerce("7").unwrap(), Some(7));
        assert!(Option::<u8>::coerce("x").is_err());
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(u16::description(), "Unsigned Integer");
        assert_eq!(Vec::<i32>::description(), "Comma-separated list of Integer");
        assert_eq!(
            <HashMap<String, f64>>::description(),
            "Comma-separated list of String:Float pairs"
        );
        assert_eq!(Option::<bool>::description(), "True or False");
    }
}
