use super::text;
use crate::Length;

const MIN_SENTENCE_CHARS: usize = 20;
const KEY_POINTS: [usize; 3] = [3, 5, 8];
const KEY_TERMS: usize = 5;

const STUDY_FOCUS: [&str; 4] = [
  "Review main concepts",
  "Understand key terminology",
  "Make connections between ideas",
  "Practice explaining concepts",
];

pub fn synthesize(raw_text: &str, length: Length) -> String
{   let sentences = text::sentences(raw_text, MIN_SENTENCE_CHARS);
    let count = length.pick(KEY_POINTS).min(sentences.len());

    let mut out = String::from("# Study Summary\n\n## Key Points\n\n");
    for sentence in &sentences[..count]
    {   out.push_str(&format!("- {}\n", sentence));
    }

    out.push_str("\n## Important Terms\n\n");
    for term in text::key_terms(raw_text, KEY_TERMS)
    {   out.push_str(&format!("- **{}**\n", term));
    }

    out.push_str("\n## Study Focus\n\n");
    for item in STUDY_FOCUS
    {   out.push_str(&format!("- [ ] {}\n", item));
    }
    out
}
