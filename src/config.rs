//! Configuration for the remote generator, fallback and uploads

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "anthropic/claude-3-haiku";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Remote generation service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig
{   /// API base URL (OpenAI compatible)
    pub api_base: String
  , /// Bearer key; requests fail over to the fallback when absent
    pub api_key: Option<String>
  , /// Model name sent with every request
    pub model: String
  , /// Request timeout in seconds
    pub timeout_secs: Option<u64>
}

impl Default for RemoteConfig
{   fn default() -> Self
    {   RemoteConfig
        {   api_base: DEFAULT_API_BASE.to_string()
          , api_key: None
          , model: DEFAULT_MODEL.to_string()
          , timeout_secs: Some(60)
        }
    }
}

/// Fallback configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackConfig
{   /// Route remote failures to the local synthesis pipeline
    pub enabled: bool
}

impl Default for FallbackConfig
{   fn default() -> Self
    {   FallbackConfig { enabled: true }
    }
}

/// Upload configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig
{   /// Largest accepted upload in bytes
    pub max_bytes: usize
}

impl Default for UploadConfig
{   fn default() -> Self
    {   UploadConfig { max_bytes: DEFAULT_MAX_UPLOAD_BYTES }
    }
}

/// Studymate configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudyMateConfig
{   pub remote: RemoteConfig
  , pub fallback: FallbackConfig
  , pub upload: UploadConfig
}

impl StudyMateConfig
{   /// Build a configuration from environment variables,
    /// keeping defaults for anything unset or unparseable
    pub fn from_env() -> Self
    {   debug!("Loading StudyMateConfig from environment");
        let mut config = StudyMateConfig::default();

        if let Ok(key) = std::env::var("OPENROUTER_API_KEY")
        {   if !key.trim().is_empty()
            {   config.remote.api_key = Some(key);
            }
        }
        if let Ok(base) = std::env::var("STUDYMATE_API_BASE")
        {   config.remote.api_base = base;
        }
        if let Ok(model) = std::env::var("STUDYMATE_MODEL")
        {   config.remote.model = model;
        }
        if let Ok(secs) = std::env::var("STUDYMATE_TIMEOUT_SECS")
        {   match secs.parse()
            {   Ok(secs) => config.remote.timeout_secs = Some(secs)
              , Err(_) => warn!(
                  "Ignoring STUDYMATE_TIMEOUT_SECS={}", secs
                )
            }
        }
        if let Ok(flag) = std::env::var("STUDYMATE_FALLBACK")
        {   config.fallback.enabled = !matches!(
              flag.trim().to_ascii_lowercase().as_str(),
              "0" | "false" | "off" | "no"
            );
        }
        config
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn test_defaults()
    {   let config = StudyMateConfig::default();
        assert_eq!(config.remote.api_base, DEFAULT_API_BASE);
        assert_eq!(config.remote.model, DEFAULT_MODEL);
        assert!(config.remote.api_key.is_none());
        assert!(config.fallback.enabled);
        assert_eq!(config.upload.max_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_deserialize_from_json()
    {   let json = r#"{
          "remote": {
            "api_base": "http://localhost:9000/v1",
            "api_key": "k",
            "model": "local-model",
            "timeout_secs": null
          },
          "fallback": { "enabled": false },
          "upload": { "max_bytes": 1024 }
        }"#;
        let config: StudyMateConfig
          = serde_json::from_str(json).unwrap();
        assert_eq!(config.remote.model, "local-model");
        assert_eq!(config.remote.timeout_secs, None);
        assert!(!config.fallback.enabled);
        assert_eq!(config.upload.max_bytes, 1024);
    }
}
