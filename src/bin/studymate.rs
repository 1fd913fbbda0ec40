use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, error};

use studymate::extract::UploadedFile;
use studymate::{StudyMate, StudyMateConfig};

/// Turn study notes into summaries, flashcards, quizzes, outlines
/// and study plans.
#[derive(Debug, Parser)]
#[command(name = "studymate", version)]
struct Cli
{   #[command(subcommand)]
    command: Command
}

#[derive(Debug, Subcommand)]
enum Command
{   /// Generate study material from a text file
    Generate
    {   /// Text file with the study content
        input: PathBuf
      , /// summary, flashcards, quiz or outline
        #[arg(short, long)]
        format: String
      , /// basic, medium or advanced
        #[arg(short, long)]
        difficulty: Option<String>
      , /// short, medium or long
        #[arg(short, long)]
        length: Option<String>
      , /// Skip the remote service and synthesize locally
        #[arg(long)]
        offline: bool
    }
  , /// Generate a study plan from a text or PDF file
    Plan
    {   input: PathBuf
      , #[arg(long)]
        days: i64
      , #[arg(long)]
        hours: f64
    }
}

async fn run(cli: Cli) -> studymate::Result<String>
{   let config = StudyMateConfig::from_env();
    debug!("Using model {}", config.remote.model);

    match cli.command
    {   Command::Generate { input, format, difficulty, length, offline } => {
          let text = read_text(&input)?;
          if offline
          {   let request = studymate::validate::validate_material(
                &text,
                &format,
                difficulty.as_deref(),
                length.as_deref()
              )?;
              return Ok(studymate::synthesize_fallback(
                &request.raw_text,
                request.format,
                request.difficulty,
                request.length
              ));
          }
          StudyMate::new(config)?
            .generate_material(
              &text,
              &format,
              difficulty.as_deref(),
              length.as_deref()
            )
            .await
        }
      , Command::Plan { input, days, hours } => {
          let bytes = read_bytes(&input)?;
          let file = UploadedFile::from_path_bytes(
            &input.display().to_string(),
            bytes
          );
          StudyMate::new(config)?
            .generate_study_plan_from_file(Some(&file), days, hours)
            .await
        }
    }
}

fn read_bytes(path: &PathBuf) -> studymate::Result<Vec<u8>>
{   std::fs::read(path).map_err(|e| {
      studymate::Error::InvalidRequest(
        format!("cannot read {}: {}", path.display(), e)
      )
    })
}

fn read_text(path: &PathBuf) -> studymate::Result<String>
{   let bytes = read_bytes(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::main]
async fn main() -> ExitCode
{   env_logger::init();
    let cli = Cli::parse();

    match run(cli).await
    {   Ok(artifact) => {
          println!("{}", artifact);
          ExitCode::SUCCESS
        }
      , Err(e) => {
          error!("{}", e);
          eprintln!("{}: {}", e.kind(), e);
          ExitCode::FAILURE
        }
    }
}
