//! Request and prompt types shared by both generation paths

use serde::{Deserialize, Serialize};

/// Sampling temperature used for every generation
pub const TEMPERATURE: f32 = 0.7;

/// A fully resolved material generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest
{   /// Source study text
    pub raw_text: String
  , pub format: crate::Format
  , pub difficulty: crate::Difficulty
  , pub length: crate::Length
}

impl GenerationRequest
{   pub fn new(
      raw_text: impl Into<String>
    , format: crate::Format
    , difficulty: crate::Difficulty
    , length: crate::Length
    ) -> Self
    {   GenerationRequest
        {   raw_text: raw_text.into()
          , format
          , difficulty
          , length
        }
    }
}

/// A study plan request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlanRequest
{   pub source_text: String
  , pub days_to_prepare: i64
  , pub hours_per_day: f64
}

/// Instruction payload handed to the remote completion client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptSpec
{   /// System message
    pub system_instruction: String
  , /// User message carrying the source text
    pub user_message: String
  , /// Temperature for sampling
    pub temperature: f32
  , /// Max tokens to generate
    pub max_tokens: u32
}
