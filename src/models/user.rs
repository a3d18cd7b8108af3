use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SanitizedFields;

/// A stored contact record. Created once per accepted submission, never updated.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(with = "iso_millis")]
    pub submitted_date: DateTime<Utc>,
}

impl UserRecord {
    /// Assemble a record from validated fields with a fresh random id and
    /// the current time.
    pub fn build(fields: SanitizedFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            submitted_date: Utc::now(),
        }
    }
}

/// `2026-10-19T08:15:02.123Z`
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
