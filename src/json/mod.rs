//! Purpose: JSON text boundary shared by string-level entry points.
//! Exports: `parse` module with parse/serialize helpers and failure categorization.
//! Role: Single seam for text handling so callsites avoid ad hoc serde_json calls.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub mod parse;
