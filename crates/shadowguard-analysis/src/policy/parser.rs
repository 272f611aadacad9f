//! Mode string parsing.
//!
//! The whole string is trimmed and lowercased first. Exact legacy aliases
//! are checked before tokenizing, so `warn` alone means `all` + `warn`
//! while `stereotype:warn` keeps the stereotype filter.

use super::types::{ExclusionPolicy, Filter, OnDuplicate};

const DEFAULT_POLICY: ExclusionPolicy =
    ExclusionPolicy::new(Filter::Stereotype, OnDuplicate::None);

/// Single-value modes kept for backward compatibility.
const LEGACY_ALIASES: &[(&str, Filter, OnDuplicate)] = &[
    ("stereotype", Filter::Stereotype, OnDuplicate::None),
    ("all", Filter::All, OnDuplicate::None),
    ("warn", Filter::All, OnDuplicate::Warn),
    ("warning", Filter::All, OnDuplicate::Warn),
    ("fail", Filter::All, OnDuplicate::Fail),
    ("fail-fast", Filter::All, OnDuplicate::Fail),
    ("failfast", Filter::All, OnDuplicate::Fail),
];

#[derive(Debug, Clone, Copy)]
enum Token {
    Filter(Filter),
    OnDuplicate(OnDuplicate),
}

/// Tokens recognized in combined modes such as `stereotype:fail`.
const TOKENS: &[(&str, Token)] = &[
    ("stereotype", Token::Filter(Filter::Stereotype)),
    ("all", Token::Filter(Filter::All)),
    ("warn", Token::OnDuplicate(OnDuplicate::Warn)),
    ("warning", Token::OnDuplicate(OnDuplicate::Warn)),
    ("fail", Token::OnDuplicate(OnDuplicate::Fail)),
    ("fail-fast", Token::OnDuplicate(OnDuplicate::Fail)),
    ("failfast", Token::OnDuplicate(OnDuplicate::Fail)),
];

const DELIMITERS: &[char] = &[':', '+', ',', ';', '|', ' '];

/// Parse a free-form mode string. Unrecognized tokens are ignored.
pub fn parse_policy(raw: Option<&str>) -> ExclusionPolicy {
    let normalized = raw.map(|s| s.trim().to_lowercase()).unwrap_or_default();
    if normalized.is_empty() {
        return DEFAULT_POLICY;
    }

    let alias = LEGACY_ALIASES.iter().find(|(name, ..)| *name == normalized);
    if let Some(&(_, filter, on_duplicate)) = alias {
        return ExclusionPolicy::new(filter, on_duplicate);
    }

    let mut filter = None;
    let mut on_duplicate = None;
    let tokens = normalized
        .split(DELIMITERS)
        .map(str::trim)
        .filter(|t| !t.is_empty());
    for token in tokens {
        match TOKENS.iter().find(|(name, _)| *name == token) {
            Some((_, Token::Filter(f))) => filter = Some(*f),
            Some((_, Token::OnDuplicate(a))) => on_duplicate = Some(*a),
            None => tracing::debug!(token, "ignoring unrecognized mode token"),
        }
    }

    ExclusionPolicy {
        filter: filter.unwrap_or(DEFAULT_POLICY.filter),
        on_duplicate: on_duplicate.unwrap_or(DEFAULT_POLICY.on_duplicate),
    }
}

/// The mode as recorded in the pattern file header: the trimmed raw string,
/// or `(default)` when absent or blank. Line breaks become spaces so the
/// header stays on one line.
pub fn mode_label(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.replace(['\r', '\n'], " "),
        _ => "(default)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cases(cases: &[(&str, Filter, OnDuplicate)]) {
        for &(raw, filter, on_duplicate) in cases {
            assert_eq!(
                parse_policy(Some(raw)),
                ExclusionPolicy::new(filter, on_duplicate),
                "mode {raw:?}"
            );
        }
    }

    #[test]
    fn blank_and_absent_use_defaults() {
        assert_eq!(parse_policy(None), DEFAULT_POLICY);
        assert_cases(&[
            ("", Filter::Stereotype, OnDuplicate::None),
            ("   ", Filter::Stereotype, OnDuplicate::None),
        ]);
    }

    #[test]
    fn legacy_single_values() {
        assert_cases(&[
            ("stereotype", Filter::Stereotype, OnDuplicate::None),
            ("all", Filter::All, OnDuplicate::None),
            ("warn", Filter::All, OnDuplicate::Warn),
            ("warning", Filter::All, OnDuplicate::Warn),
            ("fail", Filter::All, OnDuplicate::Fail),
            ("fail-fast", Filter::All, OnDuplicate::Fail),
            ("failfast", Filter::All, OnDuplicate::Fail),
            ("  WARN ", Filter::All, OnDuplicate::Warn),
        ]);
    }

    #[test]
    fn combined_tokens() {
        assert_cases(&[
            ("stereotype:fail", Filter::Stereotype, OnDuplicate::Fail),
            ("foo,ALL,WARN", Filter::All, OnDuplicate::Warn),
            ("warn+stereotype", Filter::Stereotype, OnDuplicate::Warn),
            ("all | fail-fast", Filter::All, OnDuplicate::Fail),
            ("stereotype;warning", Filter::Stereotype, OnDuplicate::Warn),
        ]);
    }

    #[test]
    fn lone_action_in_combined_form_keeps_default_filter() {
        // Leading delimiter defeats the exact alias, so the filter stays stereotype.
        assert_cases(&[(":warn", Filter::Stereotype, OnDuplicate::Warn)]);
    }

    #[test]
    fn later_tokens_override_earlier() {
        let policy = parse_policy(Some("all:stereotype:warn:fail"));
        assert_eq!(policy.filter, Filter::Stereotype);
        assert_eq!(policy.on_duplicate, OnDuplicate::Fail);
    }

    #[test]
    fn unknown_tokens_only() {
        assert_cases(&[
            ("bogus", Filter::Stereotype, OnDuplicate::None),
            ("x:y:z", Filter::Stereotype, OnDuplicate::None),
        ]);
    }

    #[test]
    fn labels() {
        assert_eq!(mode_label(None), "(default)");
        assert_eq!(mode_label(Some("  ")), "(default)");
        assert_eq!(mode_label(Some(" Stereotype:FAIL ")), "Stereotype:FAIL");
    }

    #[test]
    fn label_never_spans_lines() {
        let label = mode_label(Some("stereotype\ncom/example\r\nall"));
        assert_eq!(label, "stereotype com/example  all");
        assert_eq!(label.lines().count(), 1);
    }
}
