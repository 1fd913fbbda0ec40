use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, trace};
use serde::{Deserialize, Serialize};

use super::CompletionClient;
use crate::config::RemoteConfig;
use crate::error::{Error, Result};
use crate::request::PromptSpec;

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f32
  , pub max_tokens: u32
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse
{   pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   pub message: ChatMessage
  , pub finish_reason: Option<String>
}

impl ChatRequest
{   pub fn from_spec(model: &str, spec: &PromptSpec) -> Self
    {   ChatRequest
        {   model: model.to_string()
          , messages: vec![
              ChatMessage
              {   role: "system".to_string()
                , content: spec.system_instruction.clone()
              }
            , ChatMessage
              {   role: "user".to_string()
                , content: spec.user_message.clone()
              }
            ]
          , temperature: spec.temperature
          , max_tokens: spec.max_tokens
        }
    }
}

// ===== OpenRouter Client =====

/// Client for OpenAI compatible chat completion endpoints
pub struct OpenRouterClient
{   api_base: String
  , api_key: Option<String>
  , model: String
  , http_client: reqwest::Client
}

impl OpenRouterClient
{   /// Create a client from explicit configuration
    pub fn new(config: &RemoteConfig) -> Result<Self>
    {   debug!(
          "Creating OpenRouterClient for {} at {}",
          config.model, config.api_base
        );
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          Error::InvalidConfiguration(e.to_string())
        })?;

        Ok(OpenRouterClient
        {   api_base: config.api_base.trim_end_matches('/').to_string()
          , api_key: config.api_key.clone()
          , model: config.model.clone()
          , http_client
        })
    }

    pub fn model(&self) -> &str
    {   &self.model
    }

    fn api_key(&self) -> Result<&str>
    {   self.api_key.as_deref().ok_or_else(|| {
          error!("No API key for model: {}", self.model);
          Error::GenerationFailed(format!(
            "missing API key for {}", self.model
          ))
        })
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient
{   async fn complete(&self, spec: &PromptSpec) -> Result<String>
    {   debug!("Sending completion request to: {}", self.model);

        let api_key = self.api_key()?;
        let request = ChatRequest::from_spec(&self.model, spec);

        trace!("Chat request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/chat/completions", self.api_base))
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            Error::from(e)
          })?;

        let status = response.status();
        trace!("Chat response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Upstream API error {}: {}", status, error_text);
            return Err(Error::GenerationFailed(
              format!("API error {}: {}", status, error_text)
            ));
        }

        let chat_response: ChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            Error::GenerationFailed(format!("Parse error: {}", e))
          })?;

        chat_response.choices.into_iter()
          .next()
          .map(|c| {
            trace!("Finish reason: {:?}", c.finish_reason);
            c.message.content
          })
          .ok_or_else(|| {
            error!("No choices in response");
            Error::GenerationFailed(
              "API response contained no choices".to_string()
            )
          })
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn test_chat_request_carries_prompt_spec()
    {   let spec = PromptSpec
        {   system_instruction: "sys".to_string()
          , user_message: "user".to_string()
          , temperature: 0.7
          , max_tokens: 800
        };
        let request = ChatRequest::from_spec("m", &spec);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "m");
        assert_eq!(json["max_tokens"], 800);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "user");
    }

    #[tokio::test]
    async fn test_missing_key_is_a_generation_failure()
    {   let client = OpenRouterClient::new(&RemoteConfig::default())
          .unwrap();
        let spec = PromptSpec
        {   system_instruction: String::new()
          , user_message: String::new()
          , temperature: 0.7
          , max_tokens: 800
        };
        let err = client.complete(&spec).await.unwrap_err();
        assert!(err.is_generation_failure());
    }
}
