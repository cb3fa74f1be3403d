use crate::utils::error::{AskError, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Read the question file and strip surrounding whitespace.
///
/// An empty file yields an empty question.
pub async fn read_question<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    tracing::debug!("Reading question from: {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(content.trim().to_string()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(AskError::QuestionFileNotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(AskError::QuestionFileRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}
