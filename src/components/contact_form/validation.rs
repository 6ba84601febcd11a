// Field rules for the contact form.

use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_ERROR: &str = "Name must be at least 2 characters long";
pub const EMAIL_ERROR: &str = "Please enter a valid email address";
pub const MESSAGE_ERROR: &str = "Message must be at least 10 characters long";

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Input id; the inline error placeholder is `{id}-error`.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn error_id(self) -> String {
        format!("{}-error", self.id())
    }
}

/// Check one field's raw value. Values are trimmed before every rule.
pub fn validate(field: Field, value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    match field {
        Field::Name if value.chars().count() < NAME_MIN_CHARS => Err(NAME_ERROR),
        Field::Email if !is_plausible_email(value) => Err(EMAIL_ERROR),
        Field::Message if value.chars().count() < MESSAGE_MIN_CHARS => Err(MESSAGE_ERROR),
        _ => Ok(()),
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`. Not RFC 5322.
pub fn is_plausible_email(value: &str) -> bool {
    static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
    });
    EMAIL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(is_plausible_email("a@b.co"));
        assert!(is_plausible_email("first.last@mail.example.org"));
        assert!(!is_plausible_email("a@b"));
        assert!(!is_plausible_email("a b@c.com"));
        assert!(!is_plausible_email("@b.com"));
        assert!(!is_plausible_email("a@.com"));
        assert!(!is_plausible_email("a@b."));
        assert!(!is_plausible_email("a@@b.com"));
        assert!(!is_plausible_email("a@b@c.com"));
        assert!(!is_plausible_email("a@b.c\td"));
        assert!(is_plausible_email("a@b.c.d"));
    }

    #[test]
    fn email_is_trimmed_before_matching() {
        assert_eq!(validate(Field::Email, "  a@b.co  "), Ok(()));
        assert_eq!(validate(Field::Email, "a@b"), Err(EMAIL_ERROR));
    }

    #[test]
    fn name_needs_two_trimmed_characters() {
        assert_eq!(validate(Field::Name, " a "), Err(NAME_ERROR));
        assert_eq!(validate(Field::Name, ""), Err(NAME_ERROR));
        assert_eq!(validate(Field::Name, "Al"), Ok(()));
    }

    #[test]
    fn message_needs_ten_trimmed_characters() {
        assert_eq!(validate(Field::Message, "too short"), Err(MESSAGE_ERROR));
        assert_eq!(validate(Field::Message, "   123456789   "), Err(MESSAGE_ERROR));
        assert_eq!(validate(Field::Message, "1234567890"), Ok(()));
    }

    #[test]
    fn error_placeholder_ids() {
        assert_eq!(Field::Email.error_id(), "email-error");
    }
}
