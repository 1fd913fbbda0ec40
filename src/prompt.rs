//! Prompt composer for material generation

use log::debug;

use crate::request::{GenerationRequest, PromptSpec, TEMPERATURE};
use crate::{Difficulty, Format, Length};

/// Token budget per length
pub const MAX_TOKENS: [u32; 3] = [800, 1200, 1800];

/// Flashcard count directive per length
pub const CARD_COUNTS: [&str; 3] = ["4-6", "6-8", "8-12"];

/// Quiz question count directive per length
pub const QUESTION_COUNTS: [&str; 3] = ["3-5", "5-7", "7-10"];

pub fn max_tokens(length: Length) -> u32
{   length.pick(MAX_TOKENS)
}

pub fn card_count(length: Length) -> &'static str
{   length.pick(CARD_COUNTS)
}

pub fn question_count(length: Length) -> &'static str
{   length.pick(QUESTION_COUNTS)
}

/// Build the system instruction for a format
pub fn system_instruction(
  format: Format
, difficulty: Difficulty
, length: Length
) -> String
{   match format
    {   Format::Summary => format!(
          "You are an expert study assistant. Create a comprehensive \
           {difficulty}-level summary of the provided content. Make it \
           {length} in length. Focus on key concepts, important terms, \
           and main ideas. Format with clear headings, bullet points, \
           and use double newlines for paragraphs. Use markdown \
           formatting."
        )
      , Format::Flashcards => format!(
          "You are an expert study assistant. Create {difficulty}-level \
           flashcards from the provided content. Generate {count} \
           question-answer pairs. Focus on key concepts, definitions, \
           and important facts. Format as clear Q&A pairs with markdown, \
           using double newlines between each flashcard. Each flashcard \
           should test understanding, not just memorization.",
          count = card_count(length)
        )
      , Format::Quiz => format!(
          "You are an expert study assistant. Create a {difficulty}-level \
           practice quiz from the provided content. Include {count} \
           questions with a mix of multiple choice and short answer \
           questions. Provide correct answers and explanations. Format \
           clearly with markdown, using headings for questions and double \
           newlines between questions and answers.",
          count = question_count(length)
        )
      , Format::Outline => format!(
          "You are an expert study assistant. Create a {difficulty}-level \
           study outline from the provided content. Make it {length} in \
           detail with clear hierarchical structure. Include main topics, \
           subtopics, and key points. Use proper markdown formatting with \
           consistent heading levels (e.g., # for main topics, ## for \
           subtopics) and nested lists."
        )
    }
}

/// Wrap the source text with the instruction header naming the format
pub fn user_message(format: Format, raw_text: &str) -> String
{   format!(
      "Please generate {format} study material from this content and \
       format it using markdown:\n\n{raw_text}"
    )
}

/// Compose the full prompt for a material request.
///
/// Total and deterministic: equal requests yield identical specs.
pub fn compose_prompt(request: &GenerationRequest) -> PromptSpec
{   debug!(
      "Composing {} prompt ({} / {})",
      request.format, request.difficulty, request.length
    );
    PromptSpec
    {   system_instruction: system_instruction(
          request.format,
          request.difficulty,
          request.length
        )
      , user_message: user_message(request.format, &request.raw_text)
      , temperature: TEMPERATURE
      , max_tokens: max_tokens(request.length)
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn test_directive_tables()
    {   assert_eq!(max_tokens(Length::Short), 800);
        assert_eq!(max_tokens(Length::Medium), 1200);
        assert_eq!(max_tokens(Length::Long), 1800);
        assert_eq!(card_count(Length::Long), "8-12");
        assert_eq!(question_count(Length::Short), "3-5");
    }

    #[test]
    fn test_quiz_instruction_embeds_question_range()
    {   let text = system_instruction(
          Format::Quiz,
          Difficulty::Advanced,
          Length::Long
        );
        assert!(text.contains("advanced-level practice quiz"));
        assert!(text.contains("Include 7-10 questions"));
    }
}
