//! CLI library components for the drug spending extractor.

pub mod logging;
pub mod pipeline;
