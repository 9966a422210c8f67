// challenge-parser - curriculum content build
// Turns markdown challenge documents into validated question data for publishing

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use error::{DocumentError, ErrorKind, ExtractionError, SolutionError};
pub use models::{Answer, MarkerKind, MarkerSet, Node, ParserConfig, Question};
pub use parser::QuestionExtractor;
