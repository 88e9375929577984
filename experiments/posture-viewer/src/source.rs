use kinect_base::log;
use kinect_posture::{Posture, PostureError};
use serde_json::Value;
use std::fmt;
use std::path::Path;

#[derive(Debug)]
pub enum ViewerError {
    Args(String),
    Io(String),
    Posture(PostureError),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::Args(msg) => write!(f, "argument error: {msg}"),
            ViewerError::Io(msg) => write!(f, "io error: {msg}"),
            ViewerError::Posture(err) => write!(f, "posture error: {err}"),
        }
    }
}

impl std::error::Error for ViewerError {}

impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        ViewerError::Io(err.to_string())
    }
}

impl From<PostureError> for ViewerError {
    fn from(err: PostureError) -> Self {
        ViewerError::Posture(err)
    }
}

/// Read postures from a file.
///
/// `.json` files hold either one posture document or an array of them.
/// Any other file is read as text, one posture per non-blank line.
pub fn load_postures(path: &Path) -> Result<Vec<Posture>, ViewerError> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let postures = if is_json {
        parse_json_postures(&content)?
    } else {
        parse_text_postures(&content)?
    };
    log::info!("loaded {} postures from {}", postures.len(), path.display());
    Ok(postures)
}

pub fn parse_json_postures(content: &str) -> Result<Vec<Posture>, PostureError> {
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Array(documents) => documents.iter().map(Posture::from_json).collect(),
        document => Ok(vec![Posture::from_json(&document)?]),
    }
}

pub fn parse_text_postures(content: &str) -> Result<Vec<Posture>, PostureError> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Posture::from_text)
        .collect()
}
