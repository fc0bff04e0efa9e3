use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid day key: {0}")]
    InvalidDayKey(String),

    #[error("invalid time range {open}-{close}: {reason}")]
    InvalidTimeRange {
        open: u16,
        close: u16,
        reason: &'static str,
    },

    #[error("malformed time range text \"{0}\"")]
    MalformedRangeText(String),
}
