use super::text;
use crate::Length;

const MIN_SENTENCE_CHARS: usize = 10;
const SECTIONS: [usize; 3] = [3, 5, 8];
const TITLE_CHARS: usize = 60;
const SUBPOINT_CHARS: usize = 80;
const MAX_SUBPOINTS: usize = 3;

struct OutlineNode
{   title: Option<String>
  , subpoints: Vec<String>
}

fn node_for(paragraph: &str) -> OutlineNode
{   let sentences = text::sentences(paragraph, MIN_SENTENCE_CHARS);
    OutlineNode
    {   title: sentences.first().map(|s| text::truncate(s, TITLE_CHARS))
      , subpoints: sentences
          .iter()
          .skip(1)
          .take(MAX_SUBPOINTS)
          .map(|s| text::truncate(s, SUBPOINT_CHARS))
          .collect()
    }
}

pub fn synthesize(raw_text: &str, length: Length) -> String
{   let paragraphs = text::paragraphs(raw_text);
    let count = length.pick(SECTIONS).min(paragraphs.len());

    let mut out = String::from("# Study Outline\n\n");
    for (i, paragraph) in paragraphs[..count].iter().enumerate()
    {   let node = node_for(paragraph);
        match node.title
        {   Some(title) => {
              out.push_str(&format!("## Section {}: {}\n", i + 1, title))
            }
          , None => out.push_str(&format!("## Section {}\n", i + 1))
        }
        for (j, point) in node.subpoints.iter().enumerate()
        {   out.push_str(&format!("{}. {}\n", j + 1, point));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn test_node_takes_title_and_three_subpoints()
    {   let node = node_for(
          "Cells are the unit of life. They have membranes inside. \
           They divide by mitosis often. They carry genetic code. \
           This fifth sentence is ignored."
        );
        assert_eq!(node.title.as_deref(), Some("Cells are the unit of life"));
        assert_eq!(node.subpoints.len(), 3);
        assert_eq!(node.subpoints[2], "They carry genetic code");
    }

    #[test]
    fn test_untitled_section()
    {   let out = synthesize("tiny", Length::Medium);
        assert!(out.contains("## Section 1\n"));
    }
}
