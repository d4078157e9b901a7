//! File metadata models, classification, view pipeline, and statistics.

pub mod category;
pub mod pipeline;
pub mod stats;
pub mod types;
