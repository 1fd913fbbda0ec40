//! Local fallback synthesis pipeline
//!
//! Builds every material format from plain text heuristics without
//! any network access. Output has the same markdown shape as the
//! remote path but makes no claim to understand the content.

pub mod text;
mod flashcards;
mod outline;
mod quiz;
mod summary;

use log::debug;

use crate::{Artifact, Difficulty, Format, Length};

pub use quiz::question_count as quiz_question_count;

/// Synthesize a material artifact locally.
///
/// Never fails: short or unpunctuated input produces fewer items,
/// down to an empty list under the format's headings. Difficulty
/// does not change the heuristics.
pub fn synthesize_fallback(
  raw_text: &str
, format: Format
, difficulty: Difficulty
, length: Length
) -> Artifact
{   debug!(
      "Synthesizing fallback {} ({} / {}) from {} chars",
      format, difficulty, length, raw_text.len()
    );
    match format
    {   Format::Summary => summary::synthesize(raw_text, length)
      , Format::Flashcards => flashcards::synthesize(raw_text, length)
      , Format::Quiz => quiz::synthesize(raw_text, length)
      , Format::Outline => outline::synthesize(raw_text, length)
    }
}
