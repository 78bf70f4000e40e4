mod errors;
mod summary_pipeline;

pub use errors::PipelineError;
pub use summary_pipeline::SummaryPipeline;
