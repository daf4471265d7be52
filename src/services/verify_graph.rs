//! Verify graph
//!
//! The prerequisite edges this crate asks the task-execution engine to add.
//! Every edge is checked on insertion so the declared graph can never hold
//! a cycle, duplicate node, or dangling reference.

use std::collections::{BTreeMap, BTreeSet};

use tracing::instrument;

use crate::domain::error::PipelineError;
use crate::domain::models::execution::PrerequisiteEdge;

/// Directed graph of task paths. An edge `from -> to` means `to` waits for `from`.
#[derive(Debug, Clone, Default)]
pub struct VerifyGraph {
    nodes: BTreeSet<String>,
    edges: Vec<PrerequisiteEdge>,
    /// task -> tasks it waits for
    prerequisites: BTreeMap<String, Vec<String>>,
}

impl VerifyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, task: impl Into<String>) -> Result<(), PipelineError> {
        let task = task.into();
        if self.nodes.contains(&task) {
            return Err(PipelineError::DuplicateTask(task));
        }

        self.prerequisites.insert(task.clone(), Vec::new());
        self.nodes.insert(task);
        Ok(())
    }

    /// Declare that `to` depends on `from`.
    #[instrument(skip(self), level = "trace")]
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<(), PipelineError> {
        for task in [from, to] {
            if !self.nodes.contains(task) {
                return Err(PipelineError::UnknownTask(task.to_string()));
            }
        }

        if self.edge_exists(from, to) {
            return Err(PipelineError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        if self.would_create_cycle(from, to) {
            return Err(PipelineError::Cycle {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        self.edges.push(PrerequisiteEdge {
            from: from.to_string(),
            to: to.to_string(),
        });
        self.prerequisites
            .entry(to.to_string())
            .or_default()
            .push(from.to_string());

        Ok(())
    }

    pub fn contains(&self, task: &str) -> bool {
        self.nodes.contains(task)
    }

    /// Tasks `task` waits for, in insertion order.
    pub fn prerequisites_of(&self, task: &str) -> &[String] {
        self.prerequisites.get(task).map_or(&[], Vec::as_slice)
    }

    pub fn edges(&self) -> &[PrerequisiteEdge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<PrerequisiteEdge> {
        self.edges
    }

    fn edge_exists(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }

    /// Adding `from -> to` closes a cycle when `from` already waits on `to`,
    /// directly or transitively.
    fn would_create_cycle(&self, from: &str, to: &str) -> bool {
        let mut visited = BTreeSet::new();
        let mut stack = vec![from];

        while let Some(current) = stack.pop() {
            if current == to {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(deps) = self.prerequisites.get(current) {
                stack.extend(deps.iter().map(String::as_str));
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(nodes: &[&str]) -> VerifyGraph {
        let mut graph = VerifyGraph::new();
        for node in nodes {
            graph.add_node(*node).unwrap();
        }
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = VerifyGraph::new();
        assert!(graph.edges().is_empty());
        assert!(!graph.contains("app:check"));
    }

    #[test]
    fn test_duplicate_node() {
        let mut graph = graph_with(&["app:check"]);
        assert_eq!(
            graph.add_node("app:check"),
            Err(PipelineError::DuplicateTask("app:check".to_string()))
        );
    }

    #[test]
    fn test_edge_records_prerequisite() {
        let mut graph = graph_with(&["app:checkstyle", "app:check"]);
        graph.add_edge("app:checkstyle", "app:check").unwrap();

        assert_eq!(graph.prerequisites_of("app:check"), ["app:checkstyle"]);
        assert!(graph.prerequisites_of("app:checkstyle").is_empty());
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn test_edge_to_unknown_task() {
        let mut graph = graph_with(&["app:check"]);
        let err = graph.add_edge("app:lint", "app:check").unwrap_err();
        assert_eq!(err, PipelineError::UnknownTask("app:lint".to_string()));
    }

    #[test]
    fn test_duplicate_edge() {
        let mut graph = graph_with(&["app:lint", "app:check"]);
        graph.add_edge("app:lint", "app:check").unwrap();
        assert!(matches!(
            graph.add_edge("app:lint", "app:check"),
            Err(PipelineError::DuplicateEdge { .. })
        ));
    }

    #[test]
    fn test_cycle_detection() {
        let mut graph = graph_with(&["a", "b", "c"]);
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("b", "c").unwrap();

        assert!(matches!(
            graph.add_edge("c", "a"),
            Err(PipelineError::Cycle { .. })
        ));
        assert!(matches!(
            graph.add_edge("a", "a"),
            Err(PipelineError::Cycle { .. })
        ));
    }

    #[test]
    fn test_fan_in_is_not_a_cycle() {
        let mut graph = graph_with(&["app:checkstyle", "app:ktlint", "app:lint", "app:check"]);
        for unit in ["app:checkstyle", "app:ktlint", "app:lint"] {
            graph.add_edge(unit, "app:check").unwrap();
        }
        assert_eq!(graph.prerequisites_of("app:check").len(), 3);
    }
}
