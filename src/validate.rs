//! Request validation gate, run before any composer

use log::warn;

use crate::error::{Error, Result};
use crate::request::{GenerationRequest, StudyPlanRequest};
use crate::{Difficulty, Format, Length};

/// Validate a material request. Content is checked before format;
/// difficulty and length silently fall back to medium.
pub fn validate_material(
  raw_text: &str
, format: &str
, difficulty: Option<&str>
, length: Option<&str>
) -> Result<GenerationRequest>
{   if raw_text.trim().is_empty()
    {   warn!("Rejecting material request without content");
        return Err(Error::InvalidRequest(
          "content required: please provide content to generate \
           study materials".to_string()
        ));
    }
    let format = format.parse::<Format>().map_err(|e| {
      warn!("Rejecting material request: {}", e);
      e
    })?;
    Ok(GenerationRequest::new(
      raw_text,
      format,
      Difficulty::parse_or_default(difficulty),
      Length::parse_or_default(length)
    ))
}

pub fn missing_source_material() -> Error
{   warn!("Rejecting study plan without source material");
    Error::InvalidRequest(
      "source material required: please upload study material"
        .to_string()
    )
}

/// Check the schedule parameters: days first, then hours.
pub fn validate_schedule(days_to_prepare: i64, hours_per_day: f64) -> Result<()>
{   if days_to_prepare <= 0
    {   warn!("Rejecting study plan: days = {}", days_to_prepare);
        return Err(Error::InvalidRequest(
          "days to prepare missing: please provide the number of days \
           you have to prepare".to_string()
        ));
    }
    if !(hours_per_day.is_finite() && hours_per_day > 0.0)
    {   warn!("Rejecting study plan: hours = {}", hours_per_day);
        return Err(Error::InvalidRequest(
          "hours per day missing: please specify how many hours you \
           can give per day".to_string()
        ));
    }
    Ok(())
}

/// Check plan parameters in order: source material, days, hours.
pub fn validate_study_plan(
  source_text: Option<&str>
, days_to_prepare: i64
, hours_per_day: f64
) -> Result<StudyPlanRequest>
{   let source_text = match source_text
    {   Some(text) if !text.trim().is_empty() => text
      , _ => return Err(missing_source_material())
    };
    validate_schedule(days_to_prepare, hours_per_day)?;
    Ok(StudyPlanRequest
    {   source_text: source_text.to_string()
      , days_to_prepare
      , hours_per_day
    })
}
