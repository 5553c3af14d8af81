use crate::constants::SUBMIT_MAX_CHARS;
use serde::Deserialize;
use thiserror::Error;

/// One stored message. Records are immutable and arrive ordered by creation
/// time; the engine never reorders or edits them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub id: String,
    pub text: String,
    /// Server timestamp in milliseconds; `None` while the write is pending.
    #[serde(default)]
    pub created_at: Option<f64>,
}

impl MessageRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            created_at: None,
        }
    }

    /// Key fed to the seed hash. Falls back to the record's position in the
    /// snapshot when the store handed us an empty id.
    pub fn seed_key(&self, index: usize) -> std::borrow::Cow<'_, str> {
        if self.id.is_empty() {
            std::borrow::Cow::Owned(index.to_string())
        } else {
            std::borrow::Cow::Borrowed(&self.id)
        }
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed feed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("message feed unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("message is empty")]
    Empty,
    #[error("message is {len} characters; the limit is {max}")]
    TooLong { len: usize, max: usize },
}

/// Decode a full feed snapshot: a JSON array of records in store order.
pub fn parse_snapshot(json: &str) -> Result<Vec<MessageRecord>, FeedError> {
    let records: Vec<MessageRecord> = serde_json::from_str(json)?;
    Ok(records)
}

/// Draft length as the browser counts it (UTF-16 code units), so the limit
/// agrees with the input's `maxLength`.
#[inline]
pub fn draft_len(raw: &str) -> usize {
    raw.encode_utf16().count()
}

/// Check a draft before it is handed to the store. Returns the trimmed text.
/// The length bound applies to the draft as typed.
pub fn validate_submission(raw: &str) -> Result<String, SubmitError> {
    let len = draft_len(raw);
    if len > SUBMIT_MAX_CHARS {
        return Err(SubmitError::TooLong {
            len,
            max: SUBMIT_MAX_CHARS,
        });
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SubmitError::Empty);
    }
    Ok(trimmed.to_owned())
}

/// Draft length against the limit, e.g. `"12/500"`.
pub fn counter_label(raw: &str) -> String {
    format!("{}/{}", draft_len(raw), SUBMIT_MAX_CHARS)
}
