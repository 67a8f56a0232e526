//! Core data model types for quizline.
//!
//! A quiz file is a sequence of blank-line separated blocks. The first line
//! of a block is the question prompt and every following line is an answer;
//! answers starting with [`CORRECT_MARKER`] are correct.
//!
//! Parsing is deliberately permissive: it never fails. Use
//! [`crate::parser::validate_quiz`] to find suspicious content.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Prefix marking an answer line as correct.
pub const CORRECT_MARKER: char = '*';

/// Separator between question blocks in a quiz file.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// A single answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Text shown to the user, without the correctness marker.
    pub text: String,
    /// Whether this answer must be selected.
    pub is_correct: bool,
}

impl Answer {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }

    /// Parse one answer line. Only a single leading marker is consumed.
    pub fn parse(line: &str) -> Self {
        match line.strip_prefix(CORRECT_MARKER) {
            Some(text) => Self::new(text, true),
            None => Self::new(line, false),
        }
    }
}

impl FromStr for Answer {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_correct {
            write!(f, "{CORRECT_MARKER}")?;
        }
        write!(f, "{}", self.text)
    }
}

/// A question prompt with its answers in authored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The prompt line.
    pub prompt: String,
    /// Answer choices. May be empty for malformed input.
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            prompt: prompt.into(),
            answers,
        }
    }

    /// Parse a block: the first line is the prompt, the rest are answers.
    pub fn parse(block: &str) -> Self {
        let mut lines = block.split('\n');
        let prompt = lines.next().unwrap_or_default();
        let answers = lines.map(Answer::parse).collect();
        Self::new(prompt, answers)
    }

    /// Number of answers marked correct.
    pub fn correct_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }
}

impl FromStr for Question {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prompt)?;
        for answer in &self.answers {
            write!(f, "\n{answer}")?;
        }
        Ok(())
    }
}

/// An ordered collection of questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Parse a whole quiz file's contents.
    ///
    /// Surrounding whitespace is trimmed and the rest split on blank lines.
    /// Empty input still yields one question with an empty prompt.
    pub fn parse(text: &str) -> Self {
        let questions = text
            .trim()
            .split(BLOCK_SEPARATOR)
            .map(Question::parse)
            .collect();
        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Render prompts and plain answer text, without correctness markers.
    ///
    /// Every question is followed by one blank line.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for question in &self.questions {
            out.push_str(&question.prompt);
            out.push('\n');
            for answer in &question.answers {
                out.push_str(&answer.text);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}

impl FromStr for Quiz {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Quiz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, question) in self.questions.iter().enumerate() {
            if i > 0 {
                f.write_str(BLOCK_SEPARATOR)?;
            }
            write!(f, "{question}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_marker_sets_correct() {
        assert_eq!(Answer::parse("*Paris"), Answer::new("Paris", true));
        assert_eq!(Answer::parse("Paris"), Answer::new("Paris", false));
    }

    #[test]
    fn answer_only_first_marker_consumed() {
        let answer = Answer::parse("**bold");
        assert!(answer.is_correct);
        assert_eq!(answer.text, "*bold");
        assert_eq!(answer.to_string(), "**bold");
    }

    #[test]
    fn answer_empty_lines_are_kept() {
        assert_eq!(Answer::parse(""), Answer::new("", false));
        assert_eq!(Answer::parse("*"), Answer::new("", true));
    }

    #[test]
    fn question_parse_block() {
        let q: Question = "Capital of France?\n*Paris\nLyon".parse().unwrap();
        assert_eq!(q.prompt, "Capital of France?");
        assert_eq!(
            q.answers,
            vec![Answer::new("Paris", true), Answer::new("Lyon", false)]
        );
        assert_eq!(q.correct_count(), 1);
    }

    #[test]
    fn question_without_answers() {
        let q = Question::parse("Lonely prompt");
        assert_eq!(q.prompt, "Lonely prompt");
        assert!(q.answers.is_empty());
        assert_eq!(q.to_string(), "Lonely prompt");
    }

    #[test]
    fn quiz_parse_trims_and_splits() {
        let quiz = Quiz::parse("\n\n  Q1\n*A\nB\n\nQ2\n*C\n\n\n");
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz.questions[0].prompt, "Q1");
        assert_eq!(quiz.questions[1].answers, vec![Answer::new("C", true)]);
    }

    #[test]
    fn quiz_parse_empty_input() {
        let quiz = Quiz::parse("   \n");
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz.questions[0], Question::new("", vec![]));
    }

    #[test]
    fn quiz_extra_blank_lines_are_not_rejected() {
        let quiz = Quiz::parse("Q1\n*A\n\n\nQ2\n*B");
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz.questions[1].prompt, "");
        assert_eq!(
            quiz.questions[1].answers,
            vec![Answer::new("Q2", false), Answer::new("B", true)]
        );
    }

    #[test]
    fn quiz_serialize_roundtrip() {
        let quiz = Quiz::new(vec![
            Question::new(
                "Which are primes?",
                vec![
                    Answer::new("2", true),
                    Answer::new("4", false),
                    Answer::new("7", true),
                ],
            ),
            Question::new("Sky colour?", vec![Answer::new("Blue", true)]),
        ]);
        let text = quiz.to_string();
        assert_eq!(text, "Which are primes?\n*2\n4\n*7\n\nSky colour?\n*Blue");
        assert_eq!(Quiz::parse(&text), quiz);
    }

    #[test]
    fn render_plain_strips_markers() {
        let quiz = Quiz::parse("Q1\n*A\nB\n\nQ2\n*C");
        assert_eq!(quiz.render_plain(), "Q1\nA\nB\n\nQ2\nC\n\n");
    }
}
