//! Remote completion clients

pub mod openrouter;

use async_trait::async_trait;

use crate::error::Result;
use crate::request::PromptSpec;

// Re-export for convenience
pub use openrouter::OpenRouterClient;

/// A remote service that executes a composed prompt
#[async_trait]
pub trait CompletionClient: Send + Sync
{   /// Run the prompt; any transport or upstream failure is
    /// reported as `Error::GenerationFailed`
    async fn complete(&self, spec: &PromptSpec) -> Result<String>;
}
