//! Prompt composer for study plans

use log::{debug, error};

use crate::error::{Error, Result};
use crate::request::{PromptSpec, TEMPERATURE};

/// Study plans are not length dependent
pub const STUDY_PLAN_MAX_TOKENS: u32 = 2000;

pub const STUDY_PLAN_SYSTEM_INSTRUCTION: &str
  = "You are a helpful study planner AI. Always respond with a \
     well-structured and actionable study plan in Markdown format.";

/// Compose the prompt for an N-day, H-hours-per-day plan.
///
/// Refuses non-positive day or hour counts.
pub fn compose_study_plan_prompt(
  source_text: &str
, days_to_prepare: i64
, hours_per_day: f64
) -> Result<PromptSpec>
{   if days_to_prepare <= 0
    {   error!("Refusing study plan for {} days", days_to_prepare);
        return Err(Error::InvalidRequest(
          "days to prepare must be greater than zero".to_string()
        ));
    }
    if !(hours_per_day.is_finite() && hours_per_day > 0.0)
    {   error!("Refusing study plan for {} hours/day", hours_per_day);
        return Err(Error::InvalidRequest(
          "hours per day must be greater than zero".to_string()
        ));
    }
    debug!(
      "Composing study plan prompt: {} days, {} hours/day",
      days_to_prepare, hours_per_day
    );

    let user_message = format!(
"You are an expert study planner. Create a comprehensive and detailed study plan based on the following material, the number of days the user has to prepare, and the user's available study time per day. The plan should be structured, actionable, and help the user effectively learn the content within the given timeframe.

Material to study:
\"\"\"
{source_text}
\"\"\"

Days to prepare: {days_to_prepare}
Available study hours per day: {hours_per_day}

Your study plan should include:
- A clear schedule with daily or weekly tasks, considering the available hours per day.
- Breakdown of topics to cover.
- Suggested study methods (e.g., active recall, spaced repetition).
- Milestones or checkpoints.
- Tips for effective learning and time management.
- Format the plan using clear Markdown headings (e.g., #, ##, ###), bold text (e.g., **Important**), bullet points, and tables where appropriate. Ensure it's easy to read and follow."
    );

    Ok(PromptSpec
    {   system_instruction: STUDY_PLAN_SYSTEM_INSTRUCTION.to_string()
      , user_message
      , temperature: TEMPERATURE
      , max_tokens: STUDY_PLAN_MAX_TOKENS
    })
}
