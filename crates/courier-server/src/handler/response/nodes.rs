//! Response types for node endpoints.

use courier_postgres::model;
use courier_postgres::types::{MessageStatus, NodeKind};
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single node of a workflow graph.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Unique node identifier.
    pub id: Uuid,
    /// Workflow this node belongs to.
    pub workflow_id: Uuid,
    /// Node kind.
    pub kind: NodeKind,
    /// Delivery status. Only present on message nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
    /// Message body. Only present on message nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    /// Linear successor of a start or message node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_edge: Option<Uuid>,
    /// `Yes` successor of a condition node, or incoming marker of an end node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yes_edge: Option<Uuid>,
    /// `No` successor of a condition node, or incoming marker of an end node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_edge: Option<Uuid>,
    /// Status a condition node routes on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expects_status: Option<MessageStatus>,
    /// Timestamp when the node was created.
    pub created_at: Timestamp,
    /// Timestamp when the node was last updated.
    pub updated_at: Timestamp,
}

impl Node {
    /// Creates a response from the database model.
    pub fn from_model(node: model::Node) -> Self {
        Self {
            id: node.id,
            workflow_id: node.workflow_id,
            kind: node.kind,
            status: node.status,
            message_text: node.message_text,
            next_edge: node.next_edge,
            yes_edge: node.yes_edge,
            no_edge: node.no_edge,
            expects_status: node.expects_status,
            created_at: node.created_at.into(),
            updated_at: node.updated_at.into(),
        }
    }
}

/// Nodes of one workflow, in creation order.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowNodes {
    /// Workflow the nodes belong to.
    pub workflow_id: Uuid,
    /// Nodes in creation order.
    pub nodes: Vec<Node>,
}
