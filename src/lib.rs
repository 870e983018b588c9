pub mod aggregate;
pub mod clipboard;
pub mod errors;
pub mod logger;
pub mod pipeline;
pub mod scan;
pub mod selector;

pub use errors::{RepoTextError, Result};
pub use pipeline::{run_pipeline, PipelineConfig, PipelineReport};
