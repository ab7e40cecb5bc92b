//! Remote analysis and insight generation.
//!
//! [`RemoteAnalyzer`] speaks the AI server's JSON protocol, and
//! [`FallbackAnalyzer`] puts the heuristics behind it so every call returns
//! a result. [`InsightGenerator`] and [`InsightPipeline`] build the enriched
//! insight served by the API.

pub mod fallback;
pub mod generate;
mod http;
pub mod pipeline;
pub mod remote;
pub mod wire;

pub use fallback::FallbackAnalyzer;
pub use generate::{ContentSource, GeneratedContent, InsightGenerator};
pub use pipeline::{GeneratedInsight, InsightPipeline, InsightRequest};
pub use remote::RemoteAnalyzer;
