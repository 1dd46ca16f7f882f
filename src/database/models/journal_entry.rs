use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

/// A stored journal entry. `owner` is the subject of the token that created
/// the row and is the only identity allowed to change or remove it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JournalEntry {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub entry: String,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-writable fields of an entry, parsed from the `journal` group of a
/// request body. Everything else (id, owner, timestamps) is server-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFields {
    pub title: String,
    pub date: NaiveDate,
    pub entry: String,
}

#[derive(Debug, Error)]
pub enum EntryFieldsError {
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid date format: {value}")]
    InvalidDate { value: String },
}

impl EntryFields {
    /// Parse the grouped payload shape `{"journal": {"title", "date", "entry"}}`.
    ///
    /// Fields that are absent or not strings fail the same way, so a client
    /// sending `"date": 20240101` gets a field error rather than a type
    /// mismatch from the JSON layer. Empty strings are accepted; `date` must
    /// parse as ISO `YYYY-MM-DD`.
    pub fn from_payload(payload: &Value) -> Result<Self, EntryFieldsError> {
        let root = payload.as_object().ok_or(EntryFieldsError::NotAnObject)?;

        let group = root
            .get("journal")
            .and_then(Value::as_object)
            .ok_or(EntryFieldsError::MissingField("journal"))?;

        let title = group
            .get("title")
            .and_then(Value::as_str)
            .ok_or(EntryFieldsError::MissingField("title"))?;

        let raw_date = group
            .get("date")
            .and_then(Value::as_str)
            .ok_or(EntryFieldsError::MissingField("date"))?;
        let date = raw_date
            .parse::<NaiveDate>()
            .map_err(|_| EntryFieldsError::InvalidDate {
                value: raw_date.to_string(),
            })?;

        let entry = group
            .get("entry")
            .and_then(Value::as_str)
            .ok_or(EntryFieldsError::MissingField("entry"))?;

        Ok(Self {
            title: title.to_string(),
            date,
            entry: entry.to_string(),
        })
    }
}
