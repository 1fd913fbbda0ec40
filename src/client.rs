use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::config::StudyMateConfig;
use crate::error::{Error, Result};
use crate::extract::{
  FileTextExtractor, PdfExtractDecoder, TextExtractor, UploadedFile,
};
use crate::failover::FailoverGenerator;
use crate::generator::{HeuristicGenerator, MaterialGenerator, RemoteGenerator};
use crate::providers::{CompletionClient, OpenRouterClient};
use crate::{Artifact, Difficulty, Format, Length};

/// Public API for studymate
///
/// Holds no per-request state; share it behind an `Arc`.
#[derive(Clone)]
pub struct StudyMate
{   config: StudyMateConfig
  , completion_client: Arc<dyn CompletionClient>
  , extractor: Arc<dyn TextExtractor>
}

impl StudyMate
{   /// Create a StudyMate talking to the configured remote service,
    /// reading both text and PDF uploads
    pub fn new(config: StudyMateConfig) -> Result<Self>
    {   debug!("Creating StudyMate");
        let client = OpenRouterClient::new(&config.remote)?;
        let extractor
          = FileTextExtractor::with_pdf_decoder(Arc::new(PdfExtractDecoder));
        Ok(StudyMate::with_client(config, Arc::new(client))
          .with_extractor(Arc::new(extractor)))
    }

    /// Create a StudyMate around any completion client. Only plain
    /// text uploads are read until an extractor with PDF support is
    /// installed.
    pub fn with_client(
      config: StudyMateConfig
    , completion_client: Arc<dyn CompletionClient>
    ) -> Self
    {   StudyMate
        {   config
          , completion_client
          , extractor: Arc::new(FileTextExtractor::new())
        }
    }

    /// Replace the text extractor
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self
    {   self.extractor = extractor;
        self
    }

    pub fn config(&self) -> &StudyMateConfig
    {   &self.config
    }

    /// Generate study material.
    ///
    /// Fails with `InvalidRequest` for blank content or an unknown
    /// format. A remote failure is answered by the local fallback
    /// unless fallback is disabled in the configuration.
    pub async fn generate_material(
      &self
    , raw_text: &str
    , format: &str
    , difficulty: Option<&str>
    , length: Option<&str>
    ) -> Result<Artifact>
    {   let request = crate::validate::validate_material(
          raw_text, format, difficulty, length
        )?;
        info!(
          "Generating {} ({} / {})",
          request.format, request.difficulty, request.length
        );

        let remote = RemoteGenerator::new(self.completion_client.clone());
        if self.config.fallback.enabled
        {   FailoverGenerator::new(remote, HeuristicGenerator)
              .generate(&request)
              .await
        } else
        {   remote.generate(&request).await
        }
    }

    /// Generate a study plan for the given text. There is no local
    /// fallback for plans; remote failures are returned.
    pub async fn generate_study_plan(
      &self
    , source_text: &str
    , days_to_prepare: i64
    , hours_per_day: f64
    ) -> Result<Artifact>
    {   let request = crate::validate::validate_study_plan(
          Some(source_text), days_to_prepare, hours_per_day
        )?;
        let spec = crate::study_plan::compose_study_plan_prompt(
          &request.source_text,
          request.days_to_prepare,
          request.hours_per_day
        )?;
        info!(
          "Generating study plan: {} days, {} hours/day",
          request.days_to_prepare, request.hours_per_day
        );
        self.completion_client.complete(&spec).await.map_err(|e| {
          error!("Study plan generation failed: {}", e);
          e
        })
    }

    /// Generate a study plan from an uploaded file. Parameters are
    /// validated before the file is read.
    pub async fn generate_study_plan_from_file(
      &self
    , file: Option<&UploadedFile>
    , days_to_prepare: i64
    , hours_per_day: f64
    ) -> Result<Artifact>
    {   let file = file.ok_or_else(crate::validate::missing_source_material)?;
        crate::validate::validate_schedule(days_to_prepare, hours_per_day)?;
        let text = self.extract_text(file).await?;
        self.generate_study_plan(&text, days_to_prepare, hours_per_day)
          .await
    }

    /// Extract text from an uploaded file
    pub async fn extract_text(&self, file: &UploadedFile) -> Result<String>
    {   if file.bytes.len() > self.config.upload.max_bytes
        {   warn!(
              "Rejecting upload of {} bytes (limit {})",
              file.bytes.len(), self.config.upload.max_bytes
            );
            return Err(Error::InvalidRequest(format!(
              "file too large: {} bytes exceeds the {} byte limit",
              file.bytes.len(), self.config.upload.max_bytes
            )));
        }
        self.extractor.extract_text(file).await
    }

    /// Degraded-mode entry point: local synthesis only
    pub fn synthesize_fallback(
      &self
    , raw_text: &str
    , format: Format
    , difficulty: Difficulty
    , length: Length
    ) -> Artifact
    {   crate::fallback::synthesize_fallback(
          raw_text, format, difficulty, length
        )
    }
}
