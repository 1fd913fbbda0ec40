use super::text;
use crate::Length;

const MIN_SENTENCE_CHARS: usize = 15;
const CARDS: [usize; 3] = [4, 6, 10];
const FOCAL_TERM_MIN_CHARS: usize = 6;

struct Flashcard
{   question: String
  , answer: String
}

/// Earliest " is " / " are " in the sentence with its verb
fn find_copula(sentence: &str) -> Option<(usize, &'static str)>
{   [" is ", " are "]
      .into_iter()
      .filter_map(|pat| sentence.find(pat).map(|idx| (idx, pat)))
      .min_by_key(|(idx, _)| *idx)
}

fn card_for(sentence: &str) -> Flashcard
{   if let Some((idx, pat)) = find_copula(sentence)
    {   let subject = sentence[..idx].trim();
        let predicate = sentence[idx + pat.len()..].trim();
        return Flashcard
        {   question: format!("What {} {}?", pat.trim(), subject)
          , answer: if predicate.is_empty()
            {   sentence.to_string()
            } else
            {   predicate.to_string()
            }
        };
    }

    let term = sentence
      .split_whitespace()
      .find(|w| w.chars().count() > FOCAL_TERM_MIN_CHARS)
      .or_else(|| sentence.split_whitespace().next())
      .unwrap_or(sentence);
    Flashcard
    {   question: format!("What can you explain about \"{}\"?", term)
      , answer: sentence.to_string()
    }
}

pub fn synthesize(raw_text: &str, length: Length) -> String
{   let sentences = text::sentences(raw_text, MIN_SENTENCE_CHARS);
    let count = length.pick(CARDS).min(sentences.len());

    let cards: Vec<String> = sentences[..count]
      .iter()
      .map(|s| card_for(s))
      .enumerate()
      .map(|(i, card)| format!(
        "## Card {}\n\n**Q:** {}\n\n**A:** {}\n\n---\n",
        i + 1, card.question, card.answer
      ))
      .collect();

    if cards.is_empty()
    {   return "# Flashcards\n\n_Not enough content to build flashcards._\n"
          .to_string();
    }
    format!("# Flashcards\n\n{}", cards.join("\n"))
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn test_copula_split_uses_first_occurrence()
    {   let card = card_for("Atoms are small and the nucleus is dense");
        assert_eq!(card.question, "What are Atoms?");
        assert_eq!(card.answer, "small and the nucleus is dense");
    }

    #[test]
    fn test_mixed_copulas_take_the_earlier_verb()
    {   let card = card_for("Water is wet and the leaves are green today");
        assert_eq!(card.question, "What is Water?");
        assert_eq!(card.answer, "wet and the leaves are green today");
    }

    #[test]
    fn test_empty_predicate_keeps_sentence()
    {   let card = card_for("The answer is ");
        assert_eq!(card.question, "What is The answer?");
        assert_eq!(card.answer, "The answer is ");
    }

    #[test]
    fn test_focal_term_falls_back_to_first_token()
    {   let card = card_for("tiny words only here ok");
        assert_eq!(
          card.question,
          "What can you explain about \"tiny\"?"
        );
    }
}
