//! Text extraction from uploaded files

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_TEXT: &str = "text/plain";

/// An uploaded file held in memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile
{   /// Original file name, if known
    pub name: Option<String>
  , pub mime_type: String
  , pub bytes: Vec<u8>
}

impl UploadedFile
{   pub fn new(
      name: Option<String>
    , mime_type: impl Into<String>
    , bytes: Vec<u8>
    ) -> Self
    {   UploadedFile
        {   name
          , mime_type: mime_type.into()
          , bytes
        }
    }

    /// Guess the MIME type from a file name; anything that is not
    /// a PDF is treated as plain text.
    pub fn from_path_bytes(name: &str, bytes: Vec<u8>) -> Self
    {   let mime_type = if name.to_ascii_lowercase().ends_with(".pdf")
        {   MIME_PDF
        } else
        {   MIME_TEXT
        };
        UploadedFile::new(Some(name.to_string()), mime_type, bytes)
    }
}

/// Turns uploaded files into plain text
#[async_trait]
pub trait TextExtractor: Send + Sync
{   async fn extract_text(&self, file: &UploadedFile) -> Result<String>;
}

/// PDF byte decoding is supplied by the embedding application
pub trait PdfDecoder: Send + Sync
{   fn decode(&self, bytes: &[u8]) -> std::result::Result<String, String>;
}

/// PDF decoding backed by `pdf-extract`
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractDecoder;

impl PdfDecoder for PdfExtractDecoder
{   fn decode(&self, bytes: &[u8]) -> std::result::Result<String, String>
    {   // pdf-extract panics on some malformed files
        match std::panic::catch_unwind(|| {
          pdf_extract::extract_text_from_mem(bytes)
        })
        {   Ok(Ok(text)) => Ok(text)
          , Ok(Err(e)) => Err(e.to_string())
          , Err(_) => Err("malformed PDF".to_string())
        }
    }
}

/// Extractor for `text/plain` and, with a decoder, `application/pdf`
#[derive(Clone, Default)]
pub struct FileTextExtractor
{   pdf_decoder: Option<Arc<dyn PdfDecoder>>
}

impl FileTextExtractor
{   pub fn new() -> Self
    {   FileTextExtractor::default()
    }

    pub fn with_pdf_decoder(decoder: Arc<dyn PdfDecoder>) -> Self
    {   FileTextExtractor { pdf_decoder: Some(decoder) }
    }
}

#[async_trait]
impl TextExtractor for FileTextExtractor
{   async fn extract_text(&self, file: &UploadedFile) -> Result<String>
    {   debug!(
          "Extracting text from {:?} ({}, {} bytes)",
          file.name, file.mime_type, file.bytes.len()
        );
        match file.mime_type.as_str()
        {   MIME_TEXT => Ok(String::from_utf8_lossy(&file.bytes).into_owned())
          , MIME_PDF => {
              let decoder = self.pdf_decoder.as_ref().ok_or_else(|| {
                error!("No PDF decoder configured");
                Error::ExtractionFailed(
                  "PDF extraction failed: no PDF decoder configured"
                    .to_string()
                )
              })?;
              decoder.decode(&file.bytes).map_err(|e| {
                error!("PDF decode error: {}", e);
                Error::ExtractionFailed(
                  format!("PDF extraction failed: {}", e)
                )
              })
            }
          , other => {
              error!("Unsupported upload type: {}", other);
              Err(Error::UnsupportedFileType(other.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    struct EchoPdf;

    impl PdfDecoder for EchoPdf
    {   fn decode(&self, bytes: &[u8])
          -> std::result::Result<String, String>
        {   if bytes.starts_with(b"%PDF")
            {   Ok("decoded pdf text".to_string())
            } else
            {   Err("not a PDF".to_string())
            }
        }
    }

    #[tokio::test]
    async fn test_plain_text_is_decoded()
    {   let file = UploadedFile::from_path_bytes(
          "notes.txt",
          b"Some notes".to_vec()
        );
        let text = FileTextExtractor::new()
          .extract_text(&file)
          .await
          .unwrap();
        assert_eq!(text, "Some notes");
    }

    #[tokio::test]
    async fn test_pdf_requires_decoder()
    {   let file = UploadedFile::from_path_bytes(
          "Slides.PDF",
          b"%PDF-1.4".to_vec()
        );
        let err = FileTextExtractor::new()
          .extract_text(&file)
          .await
          .unwrap_err();
        assert_eq!(err.kind(), "EXTRACTION_FAILED");

        let extractor
          = FileTextExtractor::with_pdf_decoder(Arc::new(EchoPdf));
        assert_eq!(
          extractor.extract_text(&file).await.unwrap(),
          "decoded pdf text"
        );

        let broken = UploadedFile::new(None, MIME_PDF, b"garbage".to_vec());
        let err = extractor.extract_text(&broken).await.unwrap_err();
        assert!(err.to_string().contains("not a PDF"));
    }

    #[tokio::test]
    async fn test_pdf_extract_decoder_reports_broken_files()
    {   let extractor
          = FileTextExtractor::with_pdf_decoder(Arc::new(PdfExtractDecoder));
        let broken = UploadedFile::from_path_bytes(
          "broken.pdf",
          b"%PDF-1.4 truncated".to_vec()
        );
        let err = extractor.extract_text(&broken).await.unwrap_err();
        assert_eq!(err.kind(), "EXTRACTION_FAILED");
        assert!(!err.to_string().contains("no PDF decoder"));
    }

    #[tokio::test]
    async fn test_unsupported_mime_type()
    {   let file = UploadedFile::new(None, "image/png", vec![0, 1, 2]);
        let err = FileTextExtractor::new()
          .extract_text(&file)
          .await
          .unwrap_err();
        assert_eq!(err, Error::UnsupportedFileType("image/png".into()));
    }
}
