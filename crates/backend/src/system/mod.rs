pub mod context;
pub mod tracing;
