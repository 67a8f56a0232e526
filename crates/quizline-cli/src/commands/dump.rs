//! Dump mode: `quizline <quiz_file> -q`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use quizline_core::parser;

pub fn execute(quiz_path: PathBuf) -> Result<()> {
    let quiz = parser::load_quiz(&quiz_path)?;
    super::warn_on_content(&quiz);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(quiz.render_plain().as_bytes())?;
    stdout.flush()?;

    Ok(())
}
