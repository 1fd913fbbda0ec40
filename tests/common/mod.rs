#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use studymate::providers::CompletionClient;
use studymate::{Error, PromptSpec, Result};

pub fn init_logging()
{   let _ = env_logger::builder().is_test(true).try_init();
}

/// Completion client that records prompts and replays a fixed outcome
pub struct FakeClient
{   reply: Result<String>
  , pub calls: Mutex<Vec<PromptSpec>>
}

impl FakeClient
{   pub fn replying(text: &str) -> Self
    {   FakeClient
        {   reply: Ok(text.to_string())
          , calls: Mutex::new(vec![])
        }
    }

    pub fn failing() -> Self
    {   FakeClient
        {   reply: Err(Error::GenerationFailed(
              "upstream unavailable".to_string()
            ))
          , calls: Mutex::new(vec![])
        }
    }

    pub fn call_count(&self) -> usize
    {   self.calls.lock().unwrap().len()
    }

    pub fn last_spec(&self) -> Option<PromptSpec>
    {   self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionClient for FakeClient
{   async fn complete(&self, spec: &PromptSpec) -> Result<String>
    {   self.calls.lock().unwrap().push(spec.clone());
        self.reply.clone()
    }
}

pub const PHOTOSYNTHESIS: &str
  = "Photosynthesis is the process plants use to convert light into \
     energy. Chlorophyll absorbs light.";

pub const CELL_NOTES: &str = "\
Cells are the basic unit of all living organisms. Every cell is surrounded by a membrane. The nucleus stores genetic information.

Mitochondria are the powerhouse of the cell. They convert nutrients into usable energy. Respiration happens inside them.

Ribosomes assemble proteins from amino acids. Proteins fold into specific shapes. Misfolded proteins can cause disease.";
