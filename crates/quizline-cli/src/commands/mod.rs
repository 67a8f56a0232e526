pub mod dump;
pub mod run;

use quizline_core::model::Quiz;
use quizline_core::parser::validate_quiz;

/// Log content warnings. The quiz is still used as-is.
fn warn_on_content(quiz: &Quiz) {
    for w in validate_quiz(quiz) {
        tracing::warn!("question {}: {}", w.question, w.message);
    }
}
