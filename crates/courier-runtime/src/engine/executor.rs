//! Path resolution over a workflow graph.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::EngineConfig;
use crate::error::{WorkflowError, WorkflowResult};
use crate::graph::{EdgeLabel, MessageStatus, NodeData, NodeId, WorkflowGraph};

/// Tracing target for engine operations.
const TRACING_TARGET: &str = "courier_runtime::engine";

/// Source of the branching input: the delivery status of the workflow's
/// most recently created message node.
pub trait StatusSource {
    /// Returns the latest message status, or `None` when the workflow has
    /// no message node yet.
    fn latest_message_status(&self) -> Option<MessageStatus>;
}

/// A message status captured once, before traversal starts.
///
/// Taking a single snapshot keeps the whole traversal consistent even when
/// statuses change concurrently; every condition node observes the same
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSnapshot(pub Option<MessageStatus>);

impl StatusSource for StatusSnapshot {
    fn latest_message_status(&self) -> Option<MessageStatus> {
        self.0
    }
}

/// The ordered sequence of node identifiers visited from start to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionPath {
    steps: Vec<NodeId>,
}

impl ExecutionPath {
    /// Creates a path from the visited steps.
    pub fn new(steps: Vec<NodeId>) -> Self {
        Self { steps }
    }

    /// Returns the visited node identifiers in order.
    pub fn steps(&self) -> &[NodeId] {
        &self.steps
    }

    /// Returns the number of visited nodes.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consumes the path, returning the visited node identifiers.
    pub fn into_steps(self) -> Vec<NodeId> {
        self.steps
    }
}

impl fmt::Display for ExecutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, step) in self.steps.iter().enumerate() {
            if position > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// The workflow execution engine.
///
/// Walks a graph from its start node to an end node. Linear nodes advance
/// over their `next` edge; condition nodes resolve their branch from the
/// status source and the rule declared on the node. The traversal is a
/// synchronous pure computation over already-fetched state: the same graph
/// and the same status always produce the same path.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates a new engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Creates a new engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves the execution path from the start node to an end node.
    ///
    /// Guards against malformed graphs: revisiting a node fails with
    /// [`WorkflowError::CycleDetected`] and exceeding the hop budget fails
    /// with [`WorkflowError::PathTooLong`] instead of looping forever.
    pub fn run(
        &self,
        graph: &WorkflowGraph,
        source: &impl StatusSource,
    ) -> WorkflowResult<ExecutionPath> {
        let start = graph.start_node()?;

        let mut steps = vec![start];
        let mut visited = HashSet::from([start]);
        let mut current = start;

        loop {
            let data = graph.node(current).ok_or_else(|| {
                WorkflowError::InvalidDefinition(format!("node {current} is not a vertex"))
            })?;

            if data.is_end() {
                break;
            }

            if steps.len() >= self.config.max_hops {
                return Err(WorkflowError::PathTooLong {
                    max_hops: self.config.max_hops,
                });
            }

            let label = match data {
                NodeData::Condition { rule } => {
                    let status = source
                        .latest_message_status()
                        .ok_or(WorkflowError::NoMessageNode)?;
                    let branch = rule.branch(status);
                    tracing::trace!(
                        target: TRACING_TARGET,
                        node = %current,
                        status = %status,
                        branch = %branch,
                        "condition branch resolved"
                    );
                    branch
                }
                _ => EdgeLabel::Next,
            };

            let next = graph.successor(current, label).ok_or_else(|| {
                WorkflowError::InvalidDefinition(format!(
                    "node {current} has no {label} successor"
                ))
            })?;

            if !visited.insert(next) {
                return Err(WorkflowError::CycleDetected { node: next });
            }

            steps.push(next);
            current = next;
        }

        tracing::debug!(
            target: TRACING_TARGET,
            hops = steps.len(),
            "workflow path resolved"
        );

        Ok(ExecutionPath::new(steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{NodeKind, NodeRecord};

    struct Ids {
        start: NodeId,
        message1: NodeId,
        condition1: NodeId,
        message2: NodeId,
        condition2: NodeId,
        message3: NodeId,
        message4: NodeId,
        end: NodeId,
    }

    impl Ids {
        fn new() -> Self {
            Self {
                start: NodeId::new(),
                message1: NodeId::new(),
                condition1: NodeId::new(),
                message2: NodeId::new(),
                condition2: NodeId::new(),
                message3: NodeId::new(),
                message4: NodeId::new(),
                end: NodeId::new(),
            }
        }
    }

    fn record(id: NodeId, kind: NodeKind) -> NodeRecord {
        NodeRecord {
            id,
            kind,
            status: None,
            message_text: None,
            next_edge: None,
            yes_edge: None,
            no_edge: None,
            expects_status: None,
        }
    }

    fn message(id: NodeId, next: NodeId) -> NodeRecord {
        NodeRecord {
            status: Some(MessageStatus::Pending),
            message_text: Some("reminder".into()),
            next_edge: Some(next),
            ..record(id, NodeKind::Message)
        }
    }

    fn condition(
        id: NodeId,
        expects: MessageStatus,
        yes: NodeId,
        no: NodeId,
    ) -> NodeRecord {
        NodeRecord {
            yes_edge: Some(yes),
            no_edge: Some(no),
            expects_status: Some(expects),
            ..record(id, NodeKind::Condition)
        }
    }

    /// Two-stage escalation: "was the message sent?", then "was it opened?".
    fn escalation_graph(ids: &Ids) -> WorkflowGraph {
        WorkflowGraph::from_records([
            NodeRecord {
                next_edge: Some(ids.message1),
                ..record(ids.start, NodeKind::Start)
            },
            message(ids.message1, ids.condition1),
            condition(ids.condition1, MessageStatus::Sent, ids.message2, ids.condition2),
            message(ids.message2, ids.end),
            condition(ids.condition2, MessageStatus::Opened, ids.message3, ids.message4),
            message(ids.message3, ids.end),
            message(ids.message4, ids.end),
            NodeRecord {
                yes_edge: Some(ids.message2),
                no_edge: Some(ids.message3),
                ..record(ids.end, NodeKind::End)
            },
        ])
        .unwrap()
    }

    #[test]
    fn sent_status_takes_the_first_yes_branch() {
        let ids = Ids::new();
        let graph = escalation_graph(&ids);
        let path = Engine::with_defaults()
            .run(&graph, &StatusSnapshot(Some(MessageStatus::Sent)))
            .unwrap();

        assert_eq!(
            path.steps(),
            [ids.start, ids.message1, ids.condition1, ids.message2, ids.end]
        );
    }

    #[test]
    fn opened_status_escalates_to_the_second_condition() {
        let ids = Ids::new();
        let graph = escalation_graph(&ids);
        let path = Engine::with_defaults()
            .run(&graph, &StatusSnapshot(Some(MessageStatus::Opened)))
            .unwrap();

        assert_eq!(
            path.steps(),
            [
                ids.start,
                ids.message1,
                ids.condition1,
                ids.condition2,
                ids.message3,
                ids.end
            ]
        );
    }

    #[test]
    fn pending_status_takes_both_fallback_branches() {
        let ids = Ids::new();
        let graph = escalation_graph(&ids);
        let path = Engine::with_defaults()
            .run(&graph, &StatusSnapshot(Some(MessageStatus::Pending)))
            .unwrap();

        assert_eq!(
            path.steps(),
            [
                ids.start,
                ids.message1,
                ids.condition1,
                ids.condition2,
                ids.message4,
                ids.end
            ]
        );
    }

    #[test]
    fn identical_snapshot_yields_identical_path() {
        let ids = Ids::new();
        let graph = escalation_graph(&ids);
        let engine = Engine::with_defaults();
        let snapshot = StatusSnapshot(Some(MessageStatus::Sent));

        let first = engine.run(&graph, &snapshot).unwrap();
        let second = engine.run(&graph, &snapshot).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_message_node_fails_at_the_branch() {
        let ids = Ids::new();
        let graph = escalation_graph(&ids);
        let err = Engine::with_defaults()
            .run(&graph, &StatusSnapshot(None))
            .unwrap_err();

        assert!(matches!(err, WorkflowError::NoMessageNode));
    }

    #[test]
    fn no_branch_needed_without_condition_nodes() {
        let (s, m, e) = (NodeId::new(), NodeId::new(), NodeId::new());
        let graph = WorkflowGraph::from_records([
            NodeRecord {
                next_edge: Some(m),
                ..record(s, NodeKind::Start)
            },
            message(m, e),
            NodeRecord {
                yes_edge: Some(m),
                ..record(e, NodeKind::End)
            },
        ])
        .unwrap();

        // An empty snapshot only matters once a condition node is reached.
        let path = Engine::with_defaults()
            .run(&graph, &StatusSnapshot(None))
            .unwrap();
        assert_eq!(path.steps(), [s, m, e]);
    }

    #[test]
    fn cycle_fails_deterministically() {
        let (s, m1, m2) = (NodeId::new(), NodeId::new(), NodeId::new());
        let graph = WorkflowGraph::from_records([
            NodeRecord {
                next_edge: Some(m1),
                ..record(s, NodeKind::Start)
            },
            message(m1, m2),
            message(m2, m1),
        ])
        .unwrap();

        let err = Engine::with_defaults()
            .run(&graph, &StatusSnapshot(None))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::CycleDetected { node } if node == m1));
    }

    #[test]
    fn hop_budget_bounds_the_traversal() {
        let ids = Ids::new();
        let graph = escalation_graph(&ids);
        let engine = Engine::new(
            EngineConfig::builder().max_hops(2usize).build().unwrap(),
        );

        let err = engine
            .run(&graph, &StatusSnapshot(Some(MessageStatus::Sent)))
            .unwrap_err();
        assert!(matches!(err, WorkflowError::PathTooLong { max_hops: 2 }));
    }
}
