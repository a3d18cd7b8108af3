use std::sync::LazyLock;

use regex::Regex;

use crate::models::{SanitizedFields, Submission};

// An unterminated `<` swallows the rest of the value.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>?").expect("tag pattern is valid"));

/// Whitespace as browsers see it: includes U+FEFF, excludes U+0085.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{B}'
            | '\u{C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip tag-like runs and surrounding whitespace. Absent input becomes "".
pub fn sanitize(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    TAG.replace_all(value, "")
        .trim_matches(is_form_whitespace)
        .to_string()
}

pub fn sanitize_submission(submission: &Submission) -> SanitizedFields {
    SanitizedFields {
        first_name: sanitize(submission.first_name.as_deref()),
        last_name: sanitize(submission.last_name.as_deref()),
        email: sanitize(submission.email.as_deref()),
    }
}
