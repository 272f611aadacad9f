//! FQCN ↔ pattern conversions.

/// `com.example.Foo` → `com/example/Foo`.
pub fn fqcn_to_path(fqcn: &str) -> String {
    fqcn.replace('.', "/")
}

/// `com.example.Foo` → `com/example/Foo*`.
pub fn exclusion_pattern(fqcn: &str) -> String {
    format!("{}*", fqcn_to_path(fqcn))
}

/// The prefix a pattern matches: trimmed, with one trailing `*` removed.
pub fn pattern_prefix(pattern: &str) -> &str {
    let trimmed = pattern.trim();
    trimmed.strip_suffix('*').unwrap_or(trimmed)
}
