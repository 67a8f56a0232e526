//! Quiz file loader.
//!
//! Loads quizzes from plain-text files and reports suspicious content.
//! Nothing here rejects a quiz: malformed blocks are still asked, so
//! validation only produces warnings.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Quiz;
use crate::session::MAX_ANSWERS;

/// Read and parse a quiz file.
pub fn load_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    let quiz = parse_quiz_str(&content);
    tracing::debug!(
        "parsed {} questions from {}",
        quiz.questions.len(),
        path.display()
    );
    Ok(quiz)
}

/// Parse quiz text, accepting both `\n` and `\r\n` line endings.
pub fn parse_quiz_str(content: &str) -> Quiz {
    if content.contains('\r') {
        Quiz::parse(&content.replace("\r\n", "\n"))
    } else {
        Quiz::parse(content)
    }
}

/// A warning from quiz validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// 1-based position of the question in the file.
    pub question: usize,
    /// Warning message.
    pub message: String,
}

/// Check a quiz for content that will behave oddly when asked.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (i, question) in quiz.questions.iter().enumerate() {
        let mut warn = |message: String| {
            warnings.push(ValidationWarning {
                question: i + 1,
                message,
            })
        };

        if question.prompt.trim().is_empty() {
            warn("prompt is empty".into());
        }

        if question.answers.is_empty() {
            warn("question has no answers".into());
        } else if question.correct_count() == 0 {
            warn("no answer is marked correct".into());
        }

        if question.answers.len() > MAX_ANSWERS {
            warn(format!(
                "{} answers, only the first {MAX_ANSWERS} can be shown",
                question.answers.len()
            ));
        }
    }

    warnings
}
