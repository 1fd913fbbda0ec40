//! The two ways of producing a material artifact

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::error::Result;
use crate::providers::CompletionClient;
use crate::request::GenerationRequest;
use crate::Artifact;

/// Produces an artifact of the requested format
#[async_trait]
pub trait MaterialGenerator: Send + Sync
{   async fn generate(&self, request: &GenerationRequest) -> Result<Artifact>;

    /// Name used in logs
    fn name(&self) -> &'static str;
}

/// Composes a prompt and hands it to a remote completion client
#[derive(Clone)]
pub struct RemoteGenerator
{   client: Arc<dyn CompletionClient>
}

impl RemoteGenerator
{   pub fn new(client: Arc<dyn CompletionClient>) -> Self
    {   RemoteGenerator { client }
    }
}

#[async_trait]
impl MaterialGenerator for RemoteGenerator
{   async fn generate(&self, request: &GenerationRequest) -> Result<Artifact>
    {   let spec = crate::prompt::compose_prompt(request);
        debug!(
          "Remote generation of {} with max_tokens {}",
          request.format, spec.max_tokens
        );
        let artifact = self.client.complete(&spec).await?;
        info!(
          "Remote {} generated ({} chars)",
          request.format, artifact.len()
        );
        Ok(artifact)
    }

    fn name(&self) -> &'static str
    {   "remote"
    }
}

/// Local, network-free synthesis
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicGenerator;

#[async_trait]
impl MaterialGenerator for HeuristicGenerator
{   async fn generate(&self, request: &GenerationRequest) -> Result<Artifact>
    {   Ok(crate::fallback::synthesize_fallback(
          &request.raw_text,
          request.format,
          request.difficulty,
          request.length
        ))
    }

    fn name(&self) -> &'static str
    {   "heuristic"
    }
}
