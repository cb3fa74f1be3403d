use crate::utils::error::{AskError, Result};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AskError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(AskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(AskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.display().to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AskError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("host", "http://localhost:11434").is_ok());
        assert!(validate_url("host", "https://ollama.internal").is_ok());
        assert!(validate_url("host", "").is_err());
        assert!(validate_url("host", "localhost:11434").is_err());
        assert!(validate_url("host", "ftp://localhost").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("question_file", Path::new("question.txt")).is_ok());
        assert!(validate_path("question_file", Path::new("")).is_err());
        assert!(validate_path("question_file", Path::new("bad\0name")).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("model", "llama3.1").is_ok());
        assert!(validate_non_empty_string("model", "   ").is_err());
    }
}
