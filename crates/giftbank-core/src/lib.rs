//! giftbank-core — GIFT question-bank parsing and exam model.
//!
//! This crate turns question-bank text into immutable [`model::Question`]
//! records, infers each question's kind from the shape of its answer set,
//! and provides the collection, grading, exam-assembly and statistics layers
//! that the CLI and report crates build on.

pub mod collection;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod exam;
pub mod infer;
pub mod model;
pub mod parser;
pub mod report;
pub mod simulate;
pub mod statistics;
pub mod token;
