pub mod error;
pub mod config;
pub mod request;
pub mod prompt;
pub mod study_plan;
pub mod fallback;
pub mod validate;
pub mod extract;
pub mod providers;
pub mod generator;
pub mod failover;
pub mod client;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use client::StudyMate;
pub use config::StudyMateConfig;
pub use error::{Error, ErrorResponse, Result};
pub use fallback::synthesize_fallback;
pub use prompt::compose_prompt;
pub use request::{GenerationRequest, PromptSpec, StudyPlanRequest};
pub use study_plan::compose_study_plan_prompt;

/*

studymate turns study text into learning material: a summary,
flashcards, a quiz or an outline, plus day-by-day study plans.

Every material request goes to a remote LLM first. When the remote
call fails, the same request is answered by a local heuristic
pipeline so callers always get markdown back.

studymate/
├── src/
│   ├── lib.rs          # Re-exports and request enums
│   ├── error.rs        # Error taxonomy
│   ├── config.rs       # Remote, fallback and upload settings
│   ├── request.rs      # GenerationRequest, PromptSpec
│   ├── prompt.rs       # Material prompt composer
│   ├── study_plan.rs   # Study plan prompt composer
│   ├── fallback/       # Local synthesis pipeline
│   ├── validate.rs     # Request validation gate
│   ├── extract.rs      # Uploaded file text extraction
│   ├── providers/      # Remote completion clients
│   ├── generator.rs    # Remote and heuristic generators
│   ├── failover.rs     # Primary/secondary routing
│   └── client.rs       # StudyMate facade
└── tests/

*/

/// Artifact returned by either generation path: a markdown string
pub type Artifact = String;

/// Kind of study material to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format
{   Summary
  , Flashcards
  , Quiz
  , Outline
}

impl Format
{   pub const ALL: [Format; 4] = [
      Format::Summary
    , Format::Flashcards
    , Format::Quiz
    , Format::Outline
    ];

    pub fn as_str(&self) -> &'static str
    {   match self
        {   Format::Summary => "summary"
          , Format::Flashcards => "flashcards"
          , Format::Quiz => "quiz"
          , Format::Outline => "outline"
        }
    }
}

impl fmt::Display for Format
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str(self.as_str())
    }
}

/// Formats are parsed strictly; there is no default format
impl FromStr for Format
{   type Err = Error;

    fn from_str(s: &str) -> Result<Self>
    {   Format::ALL
          .into_iter()
          .find(|format| format.as_str() == s)
          .ok_or_else(|| Error::InvalidRequest(format!(
            "invalid format '{}': must be one of summary, \
             flashcards, quiz, outline",
            s
          )))
    }
}

/// Target difficulty of the material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty
{   Basic
  , #[default]
    Medium
  , Advanced
}

impl Difficulty
{   pub fn as_str(&self) -> &'static str
    {   match self
        {   Difficulty::Basic => "basic"
          , Difficulty::Medium => "medium"
          , Difficulty::Advanced => "advanced"
        }
    }

    /// Unknown or missing values resolve to medium
    pub fn parse_or_default(value: Option<&str>) -> Self
    {   match value
        {   Some("basic") => Difficulty::Basic
          , Some("advanced") => Difficulty::Advanced
          , _ => Difficulty::Medium
        }
    }
}

impl fmt::Display for Difficulty
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str(self.as_str())
    }
}

/// Target length of the material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Length
{   Short
  , #[default]
    Medium
  , Long
}

impl Length
{   pub fn as_str(&self) -> &'static str
    {   match self
        {   Length::Short => "short"
          , Length::Medium => "medium"
          , Length::Long => "long"
        }
    }

    /// Unknown or missing values resolve to medium
    pub fn parse_or_default(value: Option<&str>) -> Self
    {   match value
        {   Some("short") => Length::Short
          , Some("long") => Length::Long
          , _ => Length::Medium
        }
    }

    /// Pick the entry for this length out of a short/medium/long table
    pub fn pick<T: Copy>(&self, table: [T; 3]) -> T
    {   match self
        {   Length::Short => table[0]
          , Length::Medium => table[1]
          , Length::Long => table[2]
        }
    }
}

impl fmt::Display for Length
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str(self.as_str())
    }
}
