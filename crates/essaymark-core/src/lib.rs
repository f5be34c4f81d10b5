//! essaymark-core — Heuristic essay-evaluation engine.
//!
//! This crate implements a deterministic, rubric-style scorer for timed
//! practice essays. Given raw essay text, the writing prompt, and two
//! caller-supplied vocabulary lists, it produces a multi-dimensional score
//! report normalized to the familiar 1.0–6.0 holistic band.
//!
//! The engine is pure: no I/O, no hidden state, no randomness. Identical
//! inputs always produce identical [`EvaluationResult`]s, so concurrent
//! callers need no coordination.

pub mod argument;
pub mod engine;
pub mod error;
pub mod lexical;
pub mod patterns;
pub mod report;
pub mod results;
pub mod scorer;
pub mod structure;
pub mod tokenizer;
pub mod topic;
pub mod wordlist;

pub use engine::evaluate;
pub use error::WordListError;
pub use results::EvaluationResult;
