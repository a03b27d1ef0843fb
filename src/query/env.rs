//! Query environment: the seam between the accessor and the graph store.

use crate::error::TargetNotFound;
use crate::graph::TargetGraph;
use crate::label::Label;
use crate::target::Target;
use std::sync::Mutex;
use tracing::warn;

/// A non-fatal problem reported while evaluating one query sub-expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Display form of the sub-expression the problem is attributed to.
    pub caller: String,
    pub message: String,
}

/// What the accessor needs from the surrounding evaluation context: label
/// resolution, a diagnostic sink, and rule-kind classification metadata.
///
/// Implementations must be safe for concurrent reads; the sink takes `&self`
/// for that reason.
pub trait QueryEnvironment {
    /// Resolve a label to a target.
    fn get_target(&self, label: &Label) -> Result<&Target, TargetNotFound>;

    /// Report a non-fatal error attributed to the sub-expression `caller`.
    fn report_build_file_error(&self, caller: &str, message: String);

    /// Whether a rule kind names a test rule.
    fn is_test_rule_kind(&self, kind: &str) -> bool {
        kind.ends_with("_test")
    }

    /// Whether a rule kind names a test suite.
    fn is_test_suite_kind(&self, kind: &str) -> bool {
        kind == "test_suite"
    }
}

/// Environment over an in-memory [`TargetGraph`] that buffers diagnostics.
#[derive(Debug)]
pub struct GraphEnvironment<'a> {
    graph: &'a TargetGraph,
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl<'a> GraphEnvironment<'a> {
    pub fn new(graph: &'a TargetGraph) -> Self {
        Self {
            graph,
            diagnostics: Mutex::new(Vec::new()),
        }
    }

    /// Drain the diagnostics reported so far.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        let mut buffer = self
            .diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *buffer)
    }
}

impl QueryEnvironment for GraphEnvironment<'_> {
    fn get_target(&self, label: &Label) -> Result<&Target, TargetNotFound> {
        self.graph
            .get(label)
            .ok_or_else(|| TargetNotFound::new(label.clone(), "not declared in any loaded package"))
    }

    fn report_build_file_error(&self, caller: &str, message: String) {
        warn!("{caller}: {message}");
        self.diagnostics
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Diagnostic {
                caller: caller.to_string(),
                message,
            });
    }
}
