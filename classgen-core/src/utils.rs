//! Shared utility functions for code generation.

/// Upper-case the first character of a name, leaving the rest untouched
/// (e.g., "firstName" -> "FirstName").
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}
