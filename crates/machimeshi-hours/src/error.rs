use thiserror::Error;

#[derive(Debug, Error)]
pub enum HoursError {
    /// The time filter passed to an openness query was not a clock time.
    /// This is a caller contract violation — malformed *scraped* data never
    /// surfaces as an error, it degrades to the default-open policy.
    #[error("invalid time filter \"{0}\": expected HH:MM with a 0-23 hour")]
    InvalidTimeFilter(String),
}
