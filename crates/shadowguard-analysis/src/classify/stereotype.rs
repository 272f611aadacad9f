//! Framework stereotype detection.
//!
//! A class is a stereotype when its text carries one of the registration
//! annotations below after an `@`, optionally package-qualified. Argument
//! lists are irrelevant. Matching is textual: an annotation inside a comment
//! still counts.

use std::sync::LazyLock;

use regex::Regex;

/// Component-scan stereotypes.
pub const STEREOTYPE_ANNOTATIONS: &[&str] = &[
    "Component",
    "Service",
    "Repository",
    "Controller",
    "RestController",
    "Configuration",
];

/// Boot entry points and auto-configuration classes.
pub const BOOT_ANNOTATIONS: &[&str] = &["SpringBootApplication", "AutoConfiguration"];

const STEREOTYPE_PACKAGES: &str =
    r"org\.springframework\.(?:stereotype|context\.annotation|web\.bind\.annotation)\.";

const BOOT_PACKAGES: &str = r"org\.springframework\.boot\.autoconfigure\.";

static STEREOTYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    annotation_regex(STEREOTYPE_PACKAGES, STEREOTYPE_ANNOTATIONS)
});

static BOOT_RE: LazyLock<Regex> =
    LazyLock::new(|| annotation_regex(BOOT_PACKAGES, BOOT_ANNOTATIONS));

fn annotation_regex(packages: &str, names: &[&str]) -> Regex {
    let pattern = format!(r"@\s*(?:{packages})?({})\b", names.join("|"));
    Regex::new(&pattern).expect("annotation regex is valid")
}

/// Returns true if `content` carries any stereotype or boot annotation.
pub fn is_stereotype(content: &str) -> bool {
    STEREOTYPE_RE.is_match(content) || BOOT_RE.is_match(content)
}

/// Returns the first matching annotation name, for diagnostics.
pub fn matched_annotation(content: &str) -> Option<&str> {
    STEREOTYPE_RE
        .captures(content)
        .or_else(|| BOOT_RE.captures(content))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
