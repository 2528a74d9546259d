//! Field name to key suffix derivation

/// Derive the upper-cased key suffix for a field identifier.
///
/// The identifier is cut into words at `_` and at case transitions:
/// - an uppercase letter after any non-uppercase character starts a word
/// - in a run of uppercase letters followed by a lowercase letter, the last
///   uppercase letter starts a word (`HTTPServer` is `HTTP` + `Server`)
/// - digits stay with the word before them
///
/// With `split_words` the words are joined with `_`, otherwise they are
/// concatenated.
///
/// ```
/// use envconfig::derive_suffix;
///
/// assert_eq!(derive_suffix("AutoSplitVar", true), "AUTO_SPLIT_VAR");
/// assert_eq!(derive_suffix("AutoSplitVar", false), "AUTOSPLITVAR");
/// assert_eq!(derive_suffix("auto_split_var", true), "AUTO_SPLIT_VAR");
/// ```
pub fn derive_suffix(ident: &str, split_words: bool) -> String {
    let ident = ident.strip_prefix("r#").unwrap_or(ident);
    let separator = if split_words { "_" } else { "" };
    split(ident).join(separator).to_uppercase()
}

fn split(ident: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = ident.char_indices().collect();
    let mut words = Vec::new();
    let mut start = 0;

    for (i, &(offset, c)) in chars.iter().enumerate() {
        if c == '_' {
            push_word(&mut words, &ident[start..offset]);
            start = offset + c.len_utf8();
            continue;
        }
        if !c.is_uppercase() || offset == start {
            continue;
        }

        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, c)| c);
        let after_lower = !prev.is_uppercase();
        let ends_acronym = prev.is_uppercase() && next.is_some_and(char::is_lowercase);

        if after_lower || ends_acronym {
            push_word(&mut words, &ident[start..offset]);
            start = offset;
        }
    }
    push_word(&mut words, &ident[start..]);

    words
}

fn push_word<'a>(words: &mut Vec<&'a str>, word: &'a str) {
    if !word.is_empty() {
        words.push(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_split_matrix() {
        let cases = [
            ("AutoSplitVar", "AUTO_SPLIT_VAR"),
            ("HTTPServer", "HTTP_SERVER"),
            ("MultiWordACRWithAutoSplit", "MULTI_WORD_ACR_WITH_AUTO_SPLIT"),
            ("ID", "ID"),
            ("UserID", "USER_ID"),
            ("IDNumber", "ID_NUMBER"),
            ("Port", "PORT"),
            ("port", "PORT"),
            ("Var2", "VAR2"),
            ("Var2Name", "VAR2_NAME"),
            ("HTTP2Server", "HTTP2_SERVER"),
            ("OAuth2Token", "O_AUTH2_TOKEN"),
            ("Value10x", "VALUE10X"),
            ("EndsWithX", "ENDS_WITH_X"),
            ("APIKeyB", "API_KEY_B"),
            ("database_url", "DATABASE_URL"),
            ("max_conn_2", "MAX_CONN_2"),
            ("__leading", "LEADING"),
            ("trailing_", "TRAILING"),
            ("double__under", "DOUBLE_UNDER"),
            ("r#type", "TYPE"),
        ];

        for (ident, expected) in cases {
            assert_eq!(derive_suffix(ident, true), expected, "ident: {ident}");
        }
    }

    #[test]
    fn test_no_split_concatenates() {
        assert_eq!(derive_suffix("AutoSplitVar", false), "AUTOSPLITVAR");
        assert_eq!(derive_suffix("auto_split_var", false), "AUTOSPLITVAR");
        assert_eq!(derive_suffix("HTTPServer", false), "HTTPSERVER");
        assert_eq!(derive_suffix("port", false), "PORT");
    }

    #[test]
    fn test_digits_never_start_a_word() {
        assert_eq!(split("Level9Boss"), vec!["Level9", "Boss"]);
        assert_eq!(split("a1b2"), vec!["a1b2"]);
        assert_eq!(split("9lives"), vec!["9lives"]);
    }

    proptest! {
        #[test]
        fn prop_split_is_upper_and_clean(ident in "[A-Za-z][A-Za-z0-9_]{0,24}") {
            let key = derive_suffix(&ident, true);
            prop_assert!(!key.chars().any(char::is_lowercase));
            prop_assert!(!key.starts_with('_'));
            prop_assert!(!key.ends_with('_'));
            prop_assert!(!key.contains("__"));
        }

        #[test]
        fn prop_split_only_inserts_separators(ident in "[A-Za-z][A-Za-z0-9]{0,24}") {
            let split = derive_suffix(&ident, true).replace('_', "");
            prop_assert_eq!(split, derive_suffix(&ident, false));
        }
    }
}
