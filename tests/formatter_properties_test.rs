use hrefkit::format::{format_pattern, has_placeholder};
use hrefkit::TokenResolver;
use proptest::prelude::*;
use std::collections::HashMap;

fn token_name() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

// Values never contain braces, so substituted output cannot form new tokens.
fn token_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._~-]{0,8}"
}

#[derive(Debug, Clone)]
enum Piece {
    Text(String),
    Token(String),
}

fn pieces() -> impl Strategy<Value = Vec<Piece>> {
    prop::collection::vec(
        prop_oneof![
            "[a-z/=&?.-]{0,6}".prop_map(Piece::Text),
            token_name().prop_map(Piece::Token),
        ],
        0..8,
    )
}

fn render(pieces: &[Piece], bindings: Option<&HashMap<String, String>>) -> String {
    let mut out = String::new();
    for piece in pieces {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Token(name) => match bindings.and_then(|b| b.get(name)) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            },
        }
    }
    out
}

proptest! {
    #[test]
    fn prop_bound_tokens_replaced_unbound_kept(
        pieces in pieces(),
        bindings in prop::collection::hash_map(token_name(), token_value(), 0..6),
    ) {
        let pattern = render(&pieces, None);
        let expected = render(&pieces, Some(&bindings));
        prop_assert_eq!(format_pattern(&pattern, &bindings), expected);
    }

    #[test]
    fn prop_resolve_all_preserves_length_and_order(
        patterns in prop::collection::vec(pieces(), 0..6),
        bindings in prop::collection::hash_map(token_name(), token_value(), 0..6),
    ) {
        let mut resolver = TokenResolver::new();
        resolver.bind_all(bindings.clone());
        let patterns: Vec<String> = patterns.iter().map(|p| render(p, None)).collect();

        let resolved = resolver.resolve_all(&patterns);
        prop_assert_eq!(resolved.len(), patterns.len());
        for (pattern, output) in patterns.iter().zip(&resolved) {
            prop_assert_eq!(output, &format_pattern(pattern, &bindings));
        }
    }

    #[test]
    fn prop_reset_leaves_patterns_unchanged(
        pieces in pieces(),
        bindings in prop::collection::hash_map(token_name(), token_value(), 0..6),
    ) {
        let pattern = render(&pieces, None);
        let mut resolver = TokenResolver::new();
        resolver.bind_all(bindings);
        resolver.reset();
        prop_assert_eq!(resolver.resolve(&pattern), pattern);
    }

    #[test]
    fn prop_fully_bound_output_has_no_placeholder(
        pieces in pieces(),
        value in token_value(),
    ) {
        let pattern = render(&pieces, None);
        let mut resolver = TokenResolver::new();
        for piece in &pieces {
            if let Piece::Token(name) = piece {
                resolver.bind(name.as_str(), value.as_str());
            }
        }
        prop_assert!(!has_placeholder(&resolver.resolve(&pattern)));
    }
}
