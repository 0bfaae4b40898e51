//! Placeholder scanning and substitution for `{name}` tokens.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder regex is valid"))
}

/// Replaces every `{name}` whose name is bound with its value.
///
/// Unbound placeholders stay verbatim, braces included. Inserted values are
/// never scanned again, so a value that itself looks like `{other}` is
/// emitted as-is. Unbalanced braces are plain text.
pub fn format_pattern(pattern: &str, bindings: &HashMap<String, String>) -> String {
    if bindings.is_empty() {
        return pattern.to_string();
    }

    let replaced = placeholder_regex().replace_all(pattern, |caps: &Captures| {
        match bindings.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        }
    });

    match replaced {
        Cow::Borrowed(unchanged) => unchanged.to_string(),
        Cow::Owned(formatted) => formatted,
    }
}

/// Returns true if the string still contains a `{name}` placeholder.
pub fn has_placeholder(value: &str) -> bool {
    placeholder_regex().is_match(value)
}

/// Lists placeholder names in the order they appear, duplicates included.
pub fn placeholder_names(pattern: &str) -> Vec<&str> {
    placeholder_regex()
        .captures_iter(pattern)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bindings(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_replaces_bound_placeholders() {
        let b = bindings(&[("userId", "42"), ("postId", "7")]);
        assert_eq!(
            format_pattern("/users/{userId}/posts/{postId}", &b),
            "/users/42/posts/7"
        );
    }

    #[test]
    fn test_leaves_unbound_placeholders() {
        let b = bindings(&[("userId", "42")]);
        assert_eq!(
            format_pattern("/users/{userId}/posts/{postId}", &b),
            "/users/42/posts/{postId}"
        );
    }

    #[test]
    fn test_repeated_placeholder_replaced_each_time() {
        let b = bindings(&[("id", "1")]);
        assert_eq!(format_pattern("{id}-{id}", &b), "1-1");
    }

    #[test]
    fn test_inserted_values_are_not_rescanned() {
        let b = bindings(&[("a", "{b}"), ("b", "x")]);
        assert_eq!(format_pattern("/{a}/{b}", &b), "/{b}/x");
    }

    #[test]
    fn test_malformed_braces_are_literal() {
        let b = bindings(&[("a", "1")]);
        assert_eq!(format_pattern("/x/{a", &b), "/x/{a");
        assert_eq!(format_pattern("/x/a}", &b), "/x/a}");
        assert_eq!(format_pattern("/{{a}", &b), "/{1");
        assert_eq!(format_pattern("/{}", &b), "/{}");
    }

    #[test]
    fn test_has_placeholder() {
        assert!(has_placeholder("x={x}"));
        assert!(!has_placeholder("x=1"));
        assert!(!has_placeholder("x={"));
    }

    #[test]
    fn test_placeholder_names_in_order() {
        assert_eq!(
            placeholder_names("/{a}/{b}?c={a}"),
            vec!["a", "b", "a"]
        );
    }
}
