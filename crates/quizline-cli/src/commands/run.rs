//! Interactive mode: `quizline <quiz_file>`.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizline_core::config::load_config_from;
use quizline_core::parser;

pub fn execute(quiz_path: PathBuf, config_path: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let quiz = parser::load_quiz(&quiz_path)?;
    super::warn_on_content(&quiz);

    // --seed wins over the config file
    let rng = match seed.or(config.seed) {
        Some(seed) => {
            tracing::debug!("shuffling with fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let summary = quiz.run(config.session, io::stdin().lock(), io::stdout().lock(), rng)?;

    tracing::info!(
        "finished {} after {} round(s), {} questions asked",
        quiz_path.display(),
        summary.rounds.len(),
        summary.questions_asked()
    );

    Ok(())
}
