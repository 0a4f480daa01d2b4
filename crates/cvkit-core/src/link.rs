//! Safe link derivation for contact values.
//!
//! Free-text contact values become clickable targets only when they match a
//! small set of recognizable shapes. Arbitrary scheme strings are never
//! trusted, so a value like `javascript:...` renders as plain text.

use once_cell::sync::Lazy;
use regex::Regex;

static ACCEPTED_SCHEME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(https?://|mailto:|tel:)").expect("valid regex"));

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

static PHONE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s\-+()]+$").expect("valid regex"));

static BARE_DOMAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][-a-zA-Z0-9]*\.[a-zA-Z]{2,}").expect("valid regex"));

/// Derives a clickable URL from a free-text contact value.
///
/// Rules, first match wins:
/// 1. `http://`, `https://`, `mailto:` or `tel:` prefixes (case-insensitive)
///    are accepted verbatim.
/// 2. Email-shaped values get a `mailto:` prefix.
/// 3. Phone-shaped values (digits, spaces, `-`, `+`, parentheses; at least
///    7 digits) get a `tel:` prefix with the number compacted to digits and
///    a leading `+`.
/// 4. Bare domains (`label.tld...`) get an `https://` prefix.
/// 5. Anything else derives nothing and renders as plain text.
///
/// Derivation happens at render time and is never stored, so toggling the
/// theme's link flag needs no data changes.
pub fn derive_href(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if ACCEPTED_SCHEME.is_match(trimmed) {
        return Some(trimmed.to_string());
    }
    if EMAIL.is_match(trimmed) {
        return Some(format!("mailto:{trimmed}"));
    }
    if PHONE_CHARS.is_match(trimmed) {
        let digits = trimmed.chars().filter(char::is_ascii_digit).count();
        if digits >= 7 {
            let compact: String = trimmed
                .chars()
                .enumerate()
                .filter(|&(idx, c)| c.is_ascii_digit() || (c == '+' && idx == 0))
                .map(|(_, c)| c)
                .collect();
            return Some(format!("tel:{compact}"));
        }
        return None;
    }
    if BARE_DOMAIN.is_match(trimmed) {
        return Some(format!("https://{trimmed}"));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_schemes_accepted_verbatim() {
        assert_eq!(
            derive_href("https://example.com/jane"),
            Some("https://example.com/jane".to_string())
        );
        assert_eq!(
            derive_href("MAILTO:jane@example.com"),
            Some("MAILTO:jane@example.com".to_string())
        );
        assert_eq!(derive_href("tel:+15551234567"), Some("tel:+15551234567".to_string()));
    }

    #[test]
    fn test_email_gets_mailto_prefix() {
        assert_eq!(
            derive_href("jane@example.com"),
            Some("mailto:jane@example.com".to_string())
        );
    }

    #[test]
    fn test_phone_gets_tel_prefix_compacted() {
        assert_eq!(
            derive_href("+1 (555) 123-4567"),
            Some("tel:+15551234567".to_string())
        );
    }

    #[test]
    fn test_short_number_is_not_a_phone() {
        assert_eq!(derive_href("123-456"), None);
    }

    #[test]
    fn test_bare_domain_gets_https_prefix() {
        assert_eq!(
            derive_href("example.com/jane"),
            Some("https://example.com/jane".to_string())
        );
    }

    #[test]
    fn test_plain_text_derives_nothing() {
        assert_eq!(derive_href("just some text"), None);
        assert_eq!(derive_href(""), None);
        assert_eq!(derive_href("   "), None);
    }

    #[test]
    fn test_unknown_scheme_is_not_trusted() {
        // no accepted prefix, not an email/phone/domain shape
        assert_eq!(derive_href("javascript:alert(1)"), None);
    }

    #[test]
    fn test_value_is_trimmed_before_matching() {
        assert_eq!(
            derive_href("  example.com  "),
            Some("https://example.com".to_string())
        );
    }
}
