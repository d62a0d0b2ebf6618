//! Workflow graph runtime representation.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::{EdgeLabel, NodeData, NodeId, NodeRecord};
use crate::error::{WorkflowError, WorkflowResult};
use crate::validate::validate_node;

/// A workflow graph containing nodes and labeled edges.
///
/// Internally uses petgraph's `DiGraph` for efficient graph operations.
/// A graph is a per-request value built from one workflow's persisted
/// records; it is never shared across workflows or requests.
#[derive(Debug, Clone, Default)]
pub struct WorkflowGraph {
    /// The underlying directed graph.
    graph: DiGraph<NodeData, EdgeLabel>,
    /// Mapping from NodeId to petgraph's NodeIndex.
    node_indices: HashMap<NodeId, NodeIndex>,
    /// Reverse mapping from NodeIndex to NodeId.
    index_to_id: HashMap<NodeIndex, NodeId>,
}

impl WorkflowGraph {
    /// Creates a new empty workflow graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a workflow's persisted node records.
    ///
    /// Every record is validated, becomes a vertex, and its declared edges
    /// become directed labeled edges. A declared target that does not exist
    /// in the record set fails with [`WorkflowError::DanglingEdge`]; no
    /// vertex is ever fabricated for it.
    pub fn from_records<I>(records: I) -> WorkflowResult<Self>
    where
        I: IntoIterator<Item = NodeRecord>,
    {
        let records: Vec<NodeRecord> = records.into_iter().collect();
        let mut graph = Self::new();

        for record in &records {
            validate_node(record)?;
            graph.add_node(record.id, record.to_data()?);
        }

        for record in &records {
            for (label, target) in record.outgoing_edges() {
                graph.add_edge(record.id, target, label)?;
            }
        }

        Ok(graph)
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns whether the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Adds a node with the given ID.
    pub fn add_node(&mut self, id: NodeId, data: NodeData) {
        let index = self.graph.add_node(data);
        self.node_indices.insert(id, index);
        self.index_to_id.insert(index, id);
    }

    /// Adds a labeled edge between two existing nodes.
    ///
    /// Returns [`WorkflowError::DanglingEdge`] when the target is not a
    /// vertex, and [`WorkflowError::InvalidDefinition`] when the source is
    /// not a vertex.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, label: EdgeLabel) -> WorkflowResult<()> {
        let from_index = self.node_indices.get(&from).ok_or_else(|| {
            WorkflowError::InvalidDefinition(format!("source node {from} does not exist"))
        })?;
        let to_index = self
            .node_indices
            .get(&to)
            .ok_or(WorkflowError::DanglingEdge {
                from,
                missing_target: to,
            })?;

        self.graph.add_edge(*from_index, *to_index, label);
        Ok(())
    }

    /// Returns a reference to a node's data.
    pub fn node(&self, id: NodeId) -> Option<&NodeData> {
        let index = self.node_indices.get(&id)?;
        self.graph.node_weight(*index)
    }

    /// Returns whether a node exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_indices.contains_key(&id)
    }

    /// Returns an iterator over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeData)> {
        self.graph.node_indices().filter_map(|index| {
            let id = self.index_to_id.get(&index)?;
            let data = self.graph.node_weight(index)?;
            Some((*id, data))
        })
    }

    /// Returns the outgoing edges of a node as `(label, target)` pairs.
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = (EdgeLabel, NodeId)> + '_ {
        let index = self.node_indices.get(&id).copied();
        self.graph
            .edges_directed(
                index.unwrap_or(NodeIndex::new(usize::MAX)),
                Direction::Outgoing,
            )
            .filter_map(move |edge_ref| {
                let to = *self.index_to_id.get(&edge_ref.target())?;
                Some((*edge_ref.weight(), to))
            })
    }

    /// Returns the successor of a node over the given edge label.
    pub fn successor(&self, id: NodeId, label: EdgeLabel) -> Option<NodeId> {
        self.outgoing(id)
            .find(|(edge_label, _)| *edge_label == label)
            .map(|(_, to)| to)
    }

    /// Returns the designated start node.
    ///
    /// A runnable graph has exactly one start node; zero or several is an
    /// invalid definition.
    pub fn start_node(&self) -> WorkflowResult<NodeId> {
        let mut starts = self
            .nodes()
            .filter(|(_, data)| matches!(data, NodeData::Start));

        let (start, _) = starts.next().ok_or_else(|| {
            WorkflowError::InvalidDefinition("workflow has no start node".into())
        })?;

        if starts.next().is_some() {
            return Err(WorkflowError::InvalidDefinition(
                "workflow has more than one start node".into(),
            ));
        }

        Ok(start)
    }

    /// Returns whether the graph contains a directed cycle.
    pub fn is_cyclic(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Returns whether the graph contains at least one condition node.
    pub fn has_condition_nodes(&self) -> bool {
        self.graph.node_weights().any(NodeData::is_condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{MessageStatus, NodeKind};

    fn message(id: NodeId, next: NodeId) -> NodeRecord {
        NodeRecord {
            id,
            kind: NodeKind::Message,
            status: Some(MessageStatus::Pending),
            message_text: Some("hello".into()),
            next_edge: Some(next),
            yes_edge: None,
            no_edge: None,
            expects_status: None,
        }
    }

    fn start(id: NodeId, next: NodeId) -> NodeRecord {
        NodeRecord {
            id,
            kind: NodeKind::Start,
            status: None,
            message_text: None,
            next_edge: Some(next),
            yes_edge: None,
            no_edge: None,
            expects_status: None,
        }
    }

    fn end(id: NodeId, incoming: NodeId) -> NodeRecord {
        NodeRecord {
            id,
            kind: NodeKind::End,
            status: None,
            message_text: None,
            next_edge: None,
            yes_edge: Some(incoming),
            no_edge: None,
            expects_status: None,
        }
    }

    #[test]
    fn builds_linear_graph_from_records() {
        let (s, m, e) = (NodeId::new(), NodeId::new(), NodeId::new());
        let graph =
            WorkflowGraph::from_records([start(s, m), message(m, e), end(e, m)]).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.start_node().unwrap(), s);
        assert_eq!(graph.successor(s, EdgeLabel::Next), Some(m));
        assert_eq!(graph.successor(m, EdgeLabel::Next), Some(e));
        assert!(graph.outgoing(e).next().is_none());
        assert!(!graph.is_cyclic());
    }

    #[test]
    fn dangling_edge_is_reported_not_fabricated() {
        let (s, m, missing) = (NodeId::new(), NodeId::new(), NodeId::new());
        let err = WorkflowGraph::from_records([start(s, m), message(m, missing)]).unwrap_err();

        match err {
            WorkflowError::DanglingEdge {
                from,
                missing_target,
            } => {
                assert_eq!(from, m);
                assert_eq!(missing_target, missing);
            }
            other => panic!("expected DanglingEdge, got {other:?}"),
        }
    }

    #[test]
    fn missing_start_node_is_invalid() {
        let (m, e) = (NodeId::new(), NodeId::new());
        let graph = WorkflowGraph::from_records([message(m, e), end(e, m)]).unwrap();
        assert!(matches!(
            graph.start_node(),
            Err(WorkflowError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn duplicate_start_nodes_are_invalid() {
        let (s1, s2, m, e) = (NodeId::new(), NodeId::new(), NodeId::new(), NodeId::new());
        let graph = WorkflowGraph::from_records([
            start(s1, m),
            start(s2, m),
            message(m, e),
            end(e, m),
        ])
        .unwrap();
        assert!(matches!(
            graph.start_node(),
            Err(WorkflowError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn cycle_is_detectable() {
        let (s, m1, m2) = (NodeId::new(), NodeId::new(), NodeId::new());
        let graph =
            WorkflowGraph::from_records([start(s, m1), message(m1, m2), message(m2, m1)])
                .unwrap();
        assert!(graph.is_cyclic());
    }
}
