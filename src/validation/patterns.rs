// Input format rules shared by the user pipeline and form-facing callers

use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]{3,20}$").unwrap());

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// (?s) so every character counts toward the minimum, newlines included
static PASSWORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^.{8,}$").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").unwrap());

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .unwrap()
});

/// Field kinds with a fixed format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 3-20 ASCII letters, digits, underscores, or hyphens
    Username,
    /// Permissive local@domain.tld shape, not an RFC-exact check
    Email,
    /// At least 8 characters, no other constraint
    Password,
    /// Optional leading `+`, then 2-15 digits, first digit 1-9
    Phone,
    /// http(s) URL with a 1-6 character TLD
    Url,
}

impl FieldKind {
    fn pattern(self) -> &'static Regex {
        match self {
            FieldKind::Username => &USERNAME_RE,
            FieldKind::Email => &EMAIL_RE,
            FieldKind::Password => &PASSWORD_RE,
            FieldKind::Phone => &PHONE_RE,
            FieldKind::Url => &URL_RE,
        }
    }
}

/// Check `input` against the format rule for `kind`.
///
/// Leading and trailing whitespace is ignored. Empty input never matches
/// any rule.
pub fn validate_input(input: &str, kind: FieldKind) -> bool {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return false;
    }

    kind.pattern().is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        assert!(validate_input("abc", FieldKind::Username));
        assert!(validate_input("valid_user", FieldKind::Username));
        assert!(validate_input("user-name-123", FieldKind::Username));
        assert!(validate_input("ABC_def-42", FieldKind::Username));
        // Exactly 20 characters
        assert!(validate_input(&"a".repeat(20), FieldKind::Username));
    }

    #[test]
    fn test_username_length_violations() {
        assert!(!validate_input("", FieldKind::Username));
        assert!(!validate_input("ab", FieldKind::Username));
        assert!(!validate_input(&"a".repeat(21), FieldKind::Username));
    }

    #[test]
    fn test_username_charset_violations() {
        assert!(!validate_input("user name", FieldKind::Username));
        assert!(!validate_input("user@name", FieldKind::Username));
        assert!(!validate_input("testalert(1)", FieldKind::Username));
        assert!(!validate_input("user.name", FieldKind::Username));
        assert!(!validate_input("ûsername", FieldKind::Username));
    }

    #[test]
    fn test_username_trims_whitespace() {
        assert!(validate_input("  valid_user  ", FieldKind::Username));
        assert!(!validate_input("   ", FieldKind::Username));
    }

    #[test]
    fn test_email() {
        assert!(validate_input("user@example.com", FieldKind::Email));
        assert!(validate_input("a.b+c@sub.domain.org", FieldKind::Email));
        assert!(!validate_input("userexample.com", FieldKind::Email));
        assert!(!validate_input("user@examplecom", FieldKind::Email));
        assert!(!validate_input("user@@example.com", FieldKind::Email));
        assert!(!validate_input("user @example.com", FieldKind::Email));
    }

    #[test]
    fn test_password_length() {
        assert!(validate_input("12345678", FieldKind::Password));
        assert!(validate_input("longenough1", FieldKind::Password));
        assert!(validate_input("p@ss w0rd!", FieldKind::Password));
        assert!(!validate_input("short", FieldKind::Password));
        assert!(!validate_input("1234567", FieldKind::Password));
    }

    #[test]
    fn test_password_any_characters() {
        assert!(validate_input("with\nnewline", FieldKind::Password));
        assert!(validate_input("пароль-ок", FieldKind::Password));
    }

    #[test]
    fn test_phone() {
        assert!(validate_input("+14155552671", FieldKind::Phone));
        assert!(validate_input("4915123456789", FieldKind::Phone));
        assert!(validate_input("12", FieldKind::Phone));
        // First digit must be 1-9
        assert!(!validate_input("+04155552671", FieldKind::Phone));
        // Single digit is too short
        assert!(!validate_input("1", FieldKind::Phone));
        // 16 digits is too long
        assert!(!validate_input("1234567890123456", FieldKind::Phone));
        assert!(!validate_input("+1-415-555-2671", FieldKind::Phone));
    }

    #[test]
    fn test_url() {
        assert!(validate_input("http://example.com", FieldKind::Url));
        assert!(validate_input("https://www.example.com", FieldKind::Url));
        assert!(validate_input("https://example.com/path?q=1#frag", FieldKind::Url));
        assert!(!validate_input("ftp://example.com", FieldKind::Url));
        assert!(!validate_input("example.com", FieldKind::Url));
        assert!(!validate_input("https://", FieldKind::Url));
    }

    #[test]
    fn test_empty_never_matches() {
        for kind in [
            FieldKind::Username,
            FieldKind::Email,
            FieldKind::Password,
            FieldKind::Phone,
            FieldKind::Url,
        ] {
            assert!(!validate_input("", kind));
            assert!(!validate_input("  ", kind));
        }
    }
}
