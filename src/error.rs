// ⚠️ Receipt Errors
// Parse-time and lookup-time failures, all local to a single request

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    /// purchaseDate was not a strict YYYY-MM-DD calendar date
    #[error("malformed purchaseDate {0:?}: expected YYYY-MM-DD")]
    MalformedDate(String),

    /// purchaseTime was not a strict 24-hour HH:MM time
    #[error("malformed purchaseTime {0:?}: expected HH:MM (24-hour)")]
    MalformedTime(String),

    /// price/total was not a non-negative decimal literal
    #[error("malformed {field} {value:?}: expected a non-negative decimal amount")]
    MalformedAmount { field: &'static str, value: String },

    /// Body was not valid JSON or did not have the receipt shape
    #[error("invalid receipt payload: {0}")]
    InvalidPayload(String),

    /// No receipt stored under this key
    #[error("No receipt found for that ID.")]
    UnknownKey(String),
}

impl ReceiptError {
    /// True for every error raised while parsing a submission
    pub fn is_malformed(&self) -> bool {
        !matches!(self, ReceiptError::UnknownKey(_))
    }
}
