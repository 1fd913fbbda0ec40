//! Segmentation and lexical helpers shared by the synthesizers

/// Words never reported as key terms
const STOP_WORDS: [&str; 23] = [
  "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
  "of", "with", "by", "is", "are", "was", "were", "be", "been", "have",
  "has", "had",
];

const TERMINATORS: [char; 3] = ['.', '!', '?'];

fn char_len(s: &str) -> usize
{   s.chars().count()
}

/// Split on sentence terminals and keep trimmed fragments
/// strictly longer than `min_chars`.
pub fn sentences(text: &str, min_chars: usize) -> Vec<&str>
{   text.split(&TERMINATORS[..])
      .map(str::trim)
      .filter(|s| char_len(s) > min_chars)
      .collect()
}

/// Split on blank lines, dropping empty paragraphs.
pub fn paragraphs(text: &str) -> Vec<String>
{   let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines()
    {   if line.trim().is_empty()
        {   if !current.is_empty()
            {   out.push(current.join("\n"));
                current.clear();
            }
        } else
        {   current.push(line);
        }
    }
    if !current.is_empty()
    {   out.push(current.join("\n"));
    }
    out
}

/// First `limit` distinct non-stop-word tokens longer than five chars,
/// capitalized for display.
pub fn key_terms(text: &str, limit: usize) -> Vec<String>
{   let lowered = text.to_lowercase();
    let mut seen: Vec<&str> = Vec::new();
    for word in lowered.split_whitespace()
    {   if seen.len() == limit
        {   break;
        }
        if char_len(word) > 5
          && !STOP_WORDS.contains(&word)
          && !seen.contains(&word)
        {   seen.push(word);
        }
    }
    seen.into_iter().map(capitalize).collect()
}

pub fn capitalize(word: &str) -> String
{   let mut chars = word.chars();
    match chars.next()
    {   Some(first) => first.to_uppercase().chain(chars).collect()
      , None => String::new()
    }
}

/// Cut to `max_chars`, marking the cut with an ellipsis.
pub fn truncate(s: &str, max_chars: usize) -> String
{   match s.char_indices().nth(max_chars)
    {   Some((idx, _)) => format!("{}...", s[..idx].trim_end())
      , None => s.to_string()
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn test_sentences_drop_short_fragments()
    {   let text = "Short. This sentence is long enough! Ok?? \
                    Another qualifying sentence here";
        assert_eq!(
          sentences(text, 15),
          vec![
            "This sentence is long enough",
            "Another qualifying sentence here",
          ]
        );
    }

    #[test]
    fn test_sentences_without_punctuation()
    {   assert_eq!(
          sentences("no punctuation at all here", 10),
          vec!["no punctuation at all here"]
        );
        assert!(sentences("word", 10).is_empty());
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines()
    {   let text = "first line\nstill first\n\n  \nsecond\n\n\n";
        assert_eq!(
          paragraphs(text),
          vec!["first line\nstill first".to_string(), "second".to_string()]
        );
        assert!(paragraphs("   \n\n").is_empty());
    }

    #[test]
    fn test_key_terms_dedupe_and_filter()
    {   let text = "Mitochondria produce energy. mitochondria \
                    generate cellular energy through respiration \
                    within organelles and membranes";
        assert_eq!(
          key_terms(text, 5),
          vec![
            "Mitochondria",
            "Produce",
            "Energy.",
            "Generate",
            "Cellular",
          ]
        );
    }

    #[test]
    fn test_truncate_is_char_safe()
    {   assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 4), "abcd...");
        assert_eq!(truncate("ééééé", 2), "éé...");
    }
}
