//! LLM-backed ad-copy analysis.
//!
//! Wraps an OpenAI-compatible chat-completions endpoint behind a single
//! `analyze(text, objective)` capability. The analyzer never fails the
//! caller: keyless construction and every failure path serve a static
//! fallback result instead.

mod analyzer;
mod error;
mod types;

pub use analyzer::{AnalyzerConfig, CopyAnalyzer};
pub use error::AnalysisError;
pub use types::CopyAnalysisResult;
