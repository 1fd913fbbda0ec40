use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for studymate operations
/// Implements Clone so results can be handed across tasks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error
{   /// Caller supplied parameters failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String)
  , /// Uploaded file has a MIME type we cannot read
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String)
  , /// Text extraction from an accepted file failed
    #[error("File extraction failed: {0}")]
    ExtractionFailed(String)
  , /// Remote generation service failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String)
  , /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String)
}

impl Error
{   /// Short machine-readable kind
    pub fn kind(&self) -> &'static str
    {   match self
        {   Error::InvalidRequest(_) => "INVALID_REQUEST"
          , Error::UnsupportedFileType(_) => "UNSUPPORTED_FILE_TYPE"
          , Error::ExtractionFailed(_) => "EXTRACTION_FAILED"
          , Error::GenerationFailed(_) => "GENERATION_FAILED"
          , Error::InvalidConfiguration(_) => "INVALID_CONFIGURATION"
        }
    }

    /// Whether a local fallback may stand in for the failed call
    pub fn is_generation_failure(&self) -> bool
    {   matches!(self, Error::GenerationFailed(_))
    }

    pub fn to_response(&self) -> ErrorResponse
    {   ErrorResponse
        {   kind: self.kind().to_string()
          , message: self.to_string()
        }
    }
}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_timeout()
        {   Error::GenerationFailed("request timed out".to_string())
        } else
        {   Error::GenerationFailed(format!("HTTP error: {}", e))
        }
    }
}

/// Structured error body for the request-handling layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse
{   /// Machine-readable error kind
    pub kind: String
  , /// Human-readable message
    pub message: String
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn test_error_kinds()
    {   assert_eq!(
          Error::InvalidRequest("x".into()).kind(),
          "INVALID_REQUEST"
        );
        assert_eq!(
          Error::GenerationFailed("x".into()).kind(),
          "GENERATION_FAILED"
        );
        assert!(Error::GenerationFailed("x".into())
          .is_generation_failure());
        assert!(!Error::InvalidRequest("x".into())
          .is_generation_failure());
    }

    #[test]
    fn test_error_response()
    {   let response = Error::UnsupportedFileType(
          "image/png".into()
        ).to_response();
        assert_eq!(response.kind, "UNSUPPORTED_FILE_TYPE");
        assert_eq!(
          response.message,
          "Unsupported file type: image/png"
        );
    }
}
