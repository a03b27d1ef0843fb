//! Build-graph target inspection for query evaluators
//!
//! This crate is the layer between a generic query evaluator and a concrete
//! build dependency graph. The evaluator holds opaque [`Target`] references
//! and asks a [`TargetAccessor`] everything it needs to know about them:
//!
//! - identity and classification: kind, label, package, rule/test predicates
//! - typed attribute reads, including values configured with `select`
//! - traversal of label-valued attributes to other targets, with non-fatal
//!   diagnostics for labels that fail to resolve
//! - effective visibility: the flattened set of packages allowed to depend on
//!   a target, with named package groups expanded recursively
//!
//! The accessor reaches the graph through the [`QueryEnvironment`] trait, so
//! the evaluator stays decoupled from the concrete store.
//! [`TargetGraph`] is the in-memory store shipped with the crate.
//!
//! # Example
//!
//! ```
//! use target_query::{GraphEnvironment, QueryEnvironment, TargetAccessor, TargetGraph, Visibility};
//!
//! let mut graph = TargetGraph::new();
//! graph.add_rule("//base:lib".parse().unwrap(), "cc_library", Visibility::Public);
//!
//! let env = GraphEnvironment::new(&graph);
//! let accessor = TargetAccessor::new(&env);
//!
//! let target = env.get_target(&"//base:lib".parse().unwrap()).unwrap();
//! assert_eq!(accessor.target_kind(target), "cc_library");
//! assert_eq!(accessor.visibility(target).unwrap().len(), 2);
//! ```

pub mod attrs;
pub mod error;
pub mod graph;
pub mod label;
pub mod query;
pub mod target;

pub use attrs::{AttrEntry, AttrType, AttrValue, Attribute, ConfiguredValue, SelectBranch, TriState};
pub use error::{QueryError, QueryResult, TargetNotFound};
pub use graph::TargetGraph;
pub use label::{Label, LabelError};
pub use query::{
    Diagnostic, GraphEnvironment, OutputFormat, QueryEnvironment, QueryMetadata, QueryVisibility,
    TargetAccessor, format_targets,
};
pub use target::{PackageGroup, PackageSpec, Rule, Target, TargetNode, Visibility};
