use std::error::Error;
use std::fmt;

/// Errors ingesting an eclipse record from JSON.
#[derive(Debug)]
#[non_exhaustive]
pub enum IngestError {
    /// The input was not well-formed JSON, or did not match the
    /// record schema.
    Parse(serde_json::Error),
    /// A numeric field deserialized but is not finite (NaN or
    /// infinite), which the rest of the solver pipeline cannot tolerate.
    NonFiniteField { record_id: String, field: &'static str },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::Parse(e) => write!(f, "failed to parse eclipse record JSON: {e}"),
            IngestError::NonFiniteField { record_id, field } => write!(
                f,
                "record '{record_id}' has a non-finite value in field '{field}'"
            ),
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IngestError::Parse(e) => Some(e),
            IngestError::NonFiniteField { .. } => None,
        }
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(e: serde_json::Error) -> Self {
        IngestError::Parse(e)
    }
}
