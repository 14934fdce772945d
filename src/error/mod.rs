pub mod pipeline;
pub mod wiring;

pub use pipeline::PipelineError;
pub use wiring::WiringError;
