mod placeholder;

pub use placeholder::{format_pattern, has_placeholder, placeholder_names};

use std::collections::HashMap;

/// Substitutes bound values into a pattern string.
pub trait PatternFormatter: Send + Sync {
    fn format(&self, pattern: &str, bindings: &HashMap<String, String>) -> String;
}

/// Formatter for `{name}` placeholders.
#[derive(Debug, Default, Clone, Copy)]
pub struct BraceFormatter;

impl PatternFormatter for BraceFormatter {
    fn format(&self, pattern: &str, bindings: &HashMap<String, String>) -> String {
        format_pattern(pattern, bindings)
    }
}
