use std::sync::LazyLock;

use regex::Regex;

use crate::models::SanitizedFields;

pub const MAX_LENGTH: usize = 100;

pub const REQUIRED_MESSAGE: &str = "All fields are required.";
pub const LENGTH_MESSAGE: &str = "Fields must be 100 characters or less.";
pub const EMAIL_MESSAGE: &str = "Please provide a valid email address.";

// Anything outside the form whitespace set, see `sanitize::is_form_whitespace`.
const NON_SPACE: &str = concat!(
    r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]"
);

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{NON_SPACE}+@{NON_SPACE}+\.{NON_SPACE}+"))
        .expect("email pattern is valid")
});

/// Coarse shape check: something@something.something with no whitespace
/// inside each run. Not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL.is_match(&email.to_lowercase())
}

/// Field length in UTF-16 code units, the unit browser form limits use.
pub fn field_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Run every check against already-sanitized fields and collect the
/// violations in check order. An empty vec means the fields are acceptable.
pub fn validate(fields: &SanitizedFields) -> Vec<String> {
    let mut violations = Vec::new();

    if fields.all().iter().any(|f| f.is_empty()) {
        violations.push(REQUIRED_MESSAGE.to_string());
    }
    if fields.all().iter().any(|f| field_length(f) > MAX_LENGTH) {
        violations.push(LENGTH_MESSAGE.to_string());
    }
    if !is_valid_email(&fields.email) {
        violations.push(EMAIL_MESSAGE.to_string());
    }

    violations
}
