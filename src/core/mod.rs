// Shared building blocks: the crate-level error model.
pub mod error;
