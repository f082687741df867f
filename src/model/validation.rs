//! Input validation for new users.

use std::sync::OnceLock;

use regex::Regex;

/// Standard mobile email-address pattern, anchored for a full match.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

/// A name is valid when it contains at least one non-whitespace character.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// An email is valid when it is non-blank and fully matches the address pattern.
pub fn is_valid_email(email: &str) -> bool {
    !email.trim().is_empty() && email_regex().is_match(email)
}
