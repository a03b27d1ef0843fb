//! Query-facing view of the target graph
//!
//! A query evaluator never touches graph nodes directly: it holds opaque
//! [`Target`](crate::target::Target) references and calls into
//! [`TargetAccessor`] for every predicate or attribute test. The accessor in
//! turn resolves labels through a [`QueryEnvironment`], which is also where
//! non-fatal diagnostics are reported.
//!
//! # Pieces
//!
//! - [`TargetAccessor`] - typed attribute reads, label traversal, visibility
//! - [`QueryEnvironment`] - the narrow seam to the concrete graph store
//! - [`QueryVisibility`] - resolved, flattened visibility entries
//! - [`OutputFormat`] / [`format_targets`] - result rendering

pub mod accessor;
pub mod env;
pub mod output;
pub mod visibility;

pub use accessor::TargetAccessor;
pub use env::{Diagnostic, GraphEnvironment, QueryEnvironment};
pub use output::{OutputFormat, QueryMetadata, format_targets};
pub use visibility::QueryVisibility;
