//! Interactive quiz session.
//!
//! A session plays rounds over a quiz: every question is shown with
//! letter-keyed answers, the user's selection is read from the input and
//! graded, and the round ends with a score. With requiz enabled the missed
//! questions are asked again, round after round, until none are missed.
//!
//! Input, output and the random source are all injected so a session can be
//! driven by a script and a seeded RNG.

use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::SessionConfig;
use crate::error::QuizError;
use crate::model::{Answer, Question, Quiz};
use crate::parser::load_quiz;
use crate::statistics::{RoundScore, SessionSummary};

/// Keys offered for answers, by display position.
const KEYS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Most answers a question can show; one per letter key.
pub const MAX_ANSWERS: usize = KEYS.len();

/// Key for the answer at a display position.
pub fn answer_key(index: usize) -> Option<char> {
    KEYS.get(index).map(|&b| b as char)
}

fn key_index(key: char) -> Option<usize> {
    KEYS.iter().position(|&b| b as char == key)
}

/// Parse a line of letter keys into display positions.
///
/// Letters are case-insensitive, whitespace is ignored and repeated letters
/// collapse. The first character that is not one of the first `num_answers`
/// keys is returned as [`QuizError::InvalidChoice`].
pub fn parse_selection(line: &str, num_answers: usize) -> Result<BTreeSet<usize>, QuizError> {
    let mut selected = BTreeSet::new();
    for key in line
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| !c.is_whitespace())
    {
        match key_index(key) {
            Some(i) if i < num_answers => {
                selected.insert(i);
            }
            _ => return Err(QuizError::InvalidChoice(key)),
        }
    }
    Ok(selected)
}

/// Outcome of grading one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    /// Display positions of the correct answers.
    pub correct: BTreeSet<usize>,
    /// Display positions the user picked.
    pub selected: BTreeSet<usize>,
}

impl Grade {
    pub fn new(displayed: &[&Answer], selected: BTreeSet<usize>) -> Self {
        let correct = displayed
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_correct)
            .map(|(i, _)| i)
            .collect();
        Self { correct, selected }
    }

    /// Exactly the correct answers were picked, no more and no fewer.
    pub fn is_correct(&self) -> bool {
        self.selected == self.correct
    }

    /// Keys of the correct answers in ascending order, e.g. `"A, C"`.
    pub fn correct_keys(&self) -> String {
        self.correct
            .iter()
            .filter_map(|&i| answer_key(i))
            .map(String::from)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Drives rounds of questions over an input and output stream.
pub struct Session<R, W, G> {
    config: SessionConfig,
    input: R,
    output: W,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    pub fn new(config: SessionConfig, input: R, output: W, rng: G) -> Self {
        Self {
            config,
            input,
            output,
            rng,
        }
    }

    /// Play the quiz until a round has no misses, or once if requiz is off.
    pub fn run(&mut self, quiz: &Quiz) -> Result<SessionSummary> {
        let mut active: Vec<&Question> = quiz.questions.iter().collect();
        let mut summary = SessionSummary::default();

        loop {
            tracing::debug!(
                round = summary.rounds.len() + 1,
                questions = active.len(),
                "starting round"
            );
            let (score, missed) = self.run_round(&active)?;
            summary.rounds.push(score);

            if !self.config.requiz || missed.is_empty() {
                break;
            }

            writeln!(self.output, "Now I'll quiz you on the ones you got wrong!")?;
            active = missed;
        }

        tracing::debug!(rounds = summary.rounds.len(), "session finished");
        Ok(summary)
    }

    /// Ask every question once. Returns the score and the missed questions
    /// in the order they were asked.
    fn run_round<'q>(
        &mut self,
        questions: &[&'q Question],
    ) -> Result<(RoundScore, Vec<&'q Question>)> {
        let mut order = questions.to_vec();
        if self.config.shuffle_questions {
            order.shuffle(&mut self.rng);
        }

        writeln!(self.output, "Beginning quiz with {} questions.", order.len())?;

        let mut outcomes = Vec::with_capacity(order.len());
        for question in &order {
            outcomes.push(self.ask(question)?);
        }

        let score = RoundScore::from_outcomes(&outcomes);
        writeln!(self.output, "Your score is {score}.")?;

        let missed = order
            .iter()
            .zip(&outcomes)
            .filter(|(_, ok)| !**ok)
            .map(|(&q, _)| q)
            .collect();
        Ok((score, missed))
    }

    /// Present one question, read a valid selection and grade it.
    pub fn ask(&mut self, question: &Question) -> Result<bool> {
        writeln!(self.output, "{}", question.prompt)?;

        let mut displayed: Vec<&Answer> = question.answers.iter().collect();
        if self.config.shuffle_answers {
            displayed.shuffle(&mut self.rng);
        }
        if displayed.len() > MAX_ANSWERS {
            tracing::warn!(
                "question {:?} has {} answers, only {MAX_ANSWERS} can be keyed",
                question.prompt,
                displayed.len()
            );
            displayed.truncate(MAX_ANSWERS);
        }

        for (i, answer) in displayed.iter().enumerate() {
            // i < MAX_ANSWERS after truncation
            let key = answer_key(i).unwrap_or('?');
            writeln!(self.output, "({key}) {}", answer.text)?;
        }

        let selected = self.read_selection(displayed.len())?;
        let grade = Grade::new(&displayed, selected);
        let correct = grade.is_correct();
        tracing::debug!(
            correct,
            selected = ?grade.selected,
            expected = ?grade.correct,
            "graded question"
        );

        if self.config.feedback {
            if correct {
                writeln!(self.output, "That's right!")?;
            } else {
                writeln!(
                    self.output,
                    "Nope. The correct answer was {}.",
                    grade.correct_keys()
                )?;
            }
        }

        Ok(correct)
    }

    /// Prompt until the user enters a line made only of valid keys.
    fn read_selection(&mut self, num_answers: usize) -> Result<BTreeSet<usize>> {
        loop {
            write!(self.output, "Enter all of your answers: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(QuizError::InputClosed.into());
            }

            match parse_selection(&line, num_answers) {
                Ok(selected) => return Ok(selected),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

impl Quiz {
    /// Run an interactive session over this quiz.
    pub fn run<R: BufRead, W: Write, G: Rng>(
        &self,
        config: SessionConfig,
        input: R,
        output: W,
        rng: G,
    ) -> Result<SessionSummary> {
        Session::new(config, input, output, rng).run(self)
    }
}

/// Load a quiz file and run a session over it.
pub fn run_quiz_file<R: BufRead, W: Write, G: Rng>(
    path: &Path,
    config: SessionConfig,
    input: R,
    output: W,
    rng: G,
) -> Result<SessionSummary> {
    load_quiz(path)?.run(config, input, output, rng)
}
