//! Internal diagnostic error type. Never crosses the FFI boundary (§7: "No
//! errors are surfaced to the host") — it only exists so pipeline stages
//! can use `?` internally before falling back to the next stage.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
    ValidationFailed,
    BufferOverflow,
}

pub type PipelineResult<T> = Result<T, PipelineError>;
