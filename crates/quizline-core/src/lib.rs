//! quizline-core — Quiz file format, grading, and interactive sessions.
//!
//! This crate defines the quiz data model, the plain-text parser, and the
//! session runner that asks questions, grades answers and re-quizzes on
//! misses.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod session;
pub mod statistics;
