use super::text;
use crate::Length;

const MIN_SENTENCE_CHARS: usize = 20;
const QUESTIONS: [usize; 3] = [3, 5, 7];
const PROMPT_CHARS: usize = 80;

/// Distractors are fixed; they are not derived from the content
const DISTRACTORS: [&str; 3] = [
  "This is not mentioned in the content",
  "The opposite of the statement above",
  "Cannot be determined",
];

enum QuizItem<'a>
{   MultipleChoice
    {   prompt: &'static str
      , choices: [&'a str; 4]
      , answer: char
    }
  , ShortAnswer
    {   prompt: String
      , answer: &'a str
    }
}

impl QuizItem<'_>
{   fn render(&self, number: usize) -> String
    {   match self
        {   QuizItem::MultipleChoice { prompt, choices, answer } => {
              let options: Vec<String> = ('A'..='D')
                .zip(choices.iter())
                .map(|(label, choice)| format!("{}) {}", label, choice))
                .collect();
              format!(
                "## Question {} (Multiple Choice)\n{}\n\n{}\n\n**Answer: {}**\n",
                number, prompt, options.join("\n"), answer
              )
            }
          , QuizItem::ShortAnswer { prompt, answer } => {
              format!(
                "## Question {} (Short Answer)\n{}\n\n**Sample Answer:** {}\n",
                number, prompt, answer
              )
            }
        }
    }
}

/// Quiz questions consume sentences two at a time, so fewer than
/// two sentences yields an empty quiz.
pub fn question_count(sentence_count: usize, length: Length) -> usize
{   length.pick(QUESTIONS).min(sentence_count / 2)
}

fn item_for(index: usize, sentence: &str) -> QuizItem<'_>
{   if index % 2 == 0
    {   QuizItem::MultipleChoice
        {   prompt: "Based on the content, which statement is correct?"
          , choices: [sentence, DISTRACTORS[0], DISTRACTORS[1], DISTRACTORS[2]]
          , answer: 'A'
        }
    } else
    {   QuizItem::ShortAnswer
        {   prompt: format!(
              "Explain the concept mentioned in this statement: \"{}\"",
              text::truncate(sentence, PROMPT_CHARS)
            )
          , answer: sentence
        }
    }
}

pub fn synthesize(raw_text: &str, length: Length) -> String
{   let sentences = text::sentences(raw_text, MIN_SENTENCE_CHARS);
    let count = question_count(sentences.len(), length);

    let questions: Vec<String> = sentences[..count]
      .iter()
      .enumerate()
      .map(|(i, s)| item_for(i, s).render(i + 1))
      .collect();

    if questions.is_empty()
    {   return "# Practice Quiz\n\n_Not enough content to build quiz questions._\n"
          .to_string();
    }
    format!("# Practice Quiz\n\n{}", questions.join("\n"))
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn test_question_count_is_bounded_by_half_the_sentences()
    {   assert_eq!(question_count(0, Length::Long), 0);
        assert_eq!(question_count(1, Length::Long), 0);
        assert_eq!(question_count(5, Length::Long), 2);
        assert_eq!(question_count(20, Length::Short), 3);
        assert_eq!(question_count(20, Length::Medium), 5);
        assert_eq!(question_count(20, Length::Long), 7);
    }

    #[test]
    fn test_parity_alternates_question_kinds()
    {   let first = item_for(0, "Water boils at one hundred degrees").render(1);
        assert!(first.starts_with("## Question 1 (Multiple Choice)"));
        assert!(first.contains("A) Water boils at one hundred degrees"));
        assert!(first.contains("D) Cannot be determined"));
        assert!(first.contains("**Answer: A**"));

        let second = item_for(1, "Ice melts above zero degrees").render(2);
        assert!(second.starts_with("## Question 2 (Short Answer)"));
        assert!(second.contains(
          "**Sample Answer:** Ice melts above zero degrees"
        ));
    }
}
