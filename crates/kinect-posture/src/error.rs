use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PostureError {
    /// A `;`-separated record of the text format could not be read.
    Parse { record: usize, message: String },
    /// A JSON document does not have the expected shape.
    Schema(String),
}

impl fmt::Display for PostureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostureError::Parse { record, message } => {
                write!(f, "parse error in record {record}: {message}")
            }
            PostureError::Schema(msg) => write!(f, "schema error: {msg}"),
        }
    }
}

impl std::error::Error for PostureError {}

impl From<serde_json::Error> for PostureError {
    fn from(err: serde_json::Error) -> Self {
        PostureError::Schema(err.to_string())
    }
}
