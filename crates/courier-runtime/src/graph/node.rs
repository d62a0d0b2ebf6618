//! Node kinds, message statuses, branch rules, and node payloads.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::{EdgeLabel, NodeId};
use crate::validate::ValidationError;

/// The four node kinds a workflow graph is built from.
///
/// The enum is closed: unrecognized kind strings fail deserialization and
/// parsing, so an out-of-range kind never reaches validation or traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    /// Entry point of the workflow. Exactly one per runnable graph.
    Start,
    /// Dispatches a message and records its delivery status.
    Message,
    /// Branches on the status of the most recently created message.
    Condition,
    /// Terminal node. Traversal stops here.
    End,
}

impl NodeKind {
    /// Returns whether this is a start node.
    #[inline]
    pub const fn is_start(self) -> bool {
        matches!(self, NodeKind::Start)
    }

    /// Returns whether this is a message node.
    #[inline]
    pub const fn is_message(self) -> bool {
        matches!(self, NodeKind::Message)
    }

    /// Returns whether this is a condition node.
    #[inline]
    pub const fn is_condition(self) -> bool {
        matches!(self, NodeKind::Condition)
    }

    /// Returns whether this is an end node.
    #[inline]
    pub const fn is_end(self) -> bool {
        matches!(self, NodeKind::End)
    }
}

/// Delivery status of a message node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MessageStatus {
    /// Message has not been sent yet.
    Pending,
    /// Message was handed to the delivery channel.
    Sent,
    /// Recipient opened the message.
    Opened,
}

/// Branch predicate attached to a condition node.
///
/// The rule routes onto the `Yes` edge when the latest message status
/// equals the expected status and onto the `No` edge otherwise. Keeping
/// the expectation on the node makes new branching rules a data change,
/// not a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRule {
    /// Status that routes the traversal onto the `Yes` edge.
    pub expects: MessageStatus,
}

impl BranchRule {
    /// Creates a rule expecting the given status.
    #[inline]
    pub const fn new(expects: MessageStatus) -> Self {
        Self { expects }
    }

    /// Resolves the branch for an observed status.
    #[inline]
    pub fn branch(&self, status: MessageStatus) -> EdgeLabel {
        if status == self.expects {
            EdgeLabel::Yes
        } else {
            EdgeLabel::No
        }
    }
}

/// Payload carried by a workflow graph vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeData {
    /// Entry point.
    Start,
    /// Message dispatch with its text and current delivery status.
    Message {
        /// Message body.
        text: String,
        /// Delivery status at the time the graph was built.
        status: MessageStatus,
    },
    /// Branch point with its routing rule.
    Condition {
        /// Predicate deciding between the `Yes` and `No` edges.
        rule: BranchRule,
    },
    /// Terminal node.
    End,
}

impl NodeData {
    /// Returns whether this is a condition payload.
    #[inline]
    pub const fn is_condition(&self) -> bool {
        matches!(self, NodeData::Condition { .. })
    }

    /// Returns whether this is a terminal payload.
    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self, NodeData::End)
    }
}

/// Plain persisted shape of a node, as stored by the database layer.
///
/// Edge fields hold target node identifiers. For end nodes the `yes_edge`
/// and `no_edge` fields mark the presence of incoming edges and never
/// produce outgoing edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node identifier.
    pub id: NodeId,
    /// Node kind.
    pub kind: NodeKind,
    /// Delivery status. Required for message nodes.
    pub status: Option<MessageStatus>,
    /// Message body. Required for message nodes, non-empty.
    pub message_text: Option<String>,
    /// Linear successor. Required for start and message nodes.
    pub next_edge: Option<NodeId>,
    /// `Yes` successor of a condition node, or incoming marker of an end node.
    pub yes_edge: Option<NodeId>,
    /// `No` successor of a condition node, or incoming marker of an end node.
    pub no_edge: Option<NodeId>,
    /// Status a condition node routes on. Required for condition nodes.
    pub expects_status: Option<MessageStatus>,
}

impl NodeRecord {
    /// Converts the record into its graph payload.
    ///
    /// Missing required fields are reported as the same rule violations
    /// that [`validate_node`] raises.
    ///
    /// [`validate_node`]: crate::validate_node
    pub fn to_data(&self) -> Result<NodeData, ValidationError> {
        match self.kind {
            NodeKind::Start => Ok(NodeData::Start),
            NodeKind::Message => Ok(NodeData::Message {
                text: self
                    .message_text
                    .clone()
                    .ok_or(ValidationError::MessageMissingText)?,
                status: self.status.ok_or(ValidationError::MessageMissingStatus)?,
            }),
            NodeKind::Condition => Ok(NodeData::Condition {
                rule: BranchRule::new(
                    self.expects_status
                        .ok_or(ValidationError::ConditionMissingPredicate)?,
                ),
            }),
            NodeKind::End => Ok(NodeData::End),
        }
    }

    /// Returns the outgoing edges this record declares.
    ///
    /// End-node `yes_edge`/`no_edge` markers are not outgoing edges and
    /// are not reported here.
    pub fn outgoing_edges(&self) -> Vec<(EdgeLabel, NodeId)> {
        match self.kind {
            NodeKind::Start | NodeKind::Message => self
                .next_edge
                .map(|to| (EdgeLabel::Next, to))
                .into_iter()
                .collect(),
            NodeKind::Condition => {
                let mut edges = Vec::with_capacity(2);
                if let Some(to) = self.yes_edge {
                    edges.push((EdgeLabel::Yes, to));
                }
                if let Some(to) = self.no_edge {
                    edges.push((EdgeLabel::No, to));
                }
                edges
            }
            NodeKind::End => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn branch_rule_routes_on_match() {
        let rule = BranchRule::new(MessageStatus::Sent);
        assert_eq!(rule.branch(MessageStatus::Sent), EdgeLabel::Yes);
        assert_eq!(rule.branch(MessageStatus::Pending), EdgeLabel::No);
        assert_eq!(rule.branch(MessageStatus::Opened), EdgeLabel::No);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(NodeKind::from_str("decision").is_err());
        assert!(serde_json::from_str::<NodeKind>("\"decision\"").is_err());
        assert_eq!(NodeKind::from_str("condition").unwrap(), NodeKind::Condition);
    }

    #[test]
    fn end_record_declares_no_outgoing_edges() {
        let record = NodeRecord {
            id: NodeId::new(),
            kind: NodeKind::End,
            status: None,
            message_text: None,
            next_edge: None,
            yes_edge: Some(NodeId::new()),
            no_edge: None,
            expects_status: None,
        };
        assert!(record.outgoing_edges().is_empty());
    }
}
