use serde_json::Value;

/// The three fields read from an untrusted request body. Anything that is not
/// a JSON string is treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl Submission {
    pub fn from_value(raw: &Value) -> Self {
        let text = |key: &str| raw.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            first_name: text("firstName"),
            last_name: text("lastName"),
            email: text("email"),
        }
    }
}

/// Submission fields after markup stripping and trimming.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl SanitizedFields {
    pub fn all(&self) -> [&str; 3] {
        [self.first_name.as_str(), self.last_name.as_str(), self.email.as_str()]
    }
}
