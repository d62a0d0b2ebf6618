//! Request types for node endpoints.

use courier_postgres::model;
use courier_postgres::types::{MessageStatus, NodeKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a new node.
///
/// Which fields are required depends on the node kind; the core validator
/// reports the specific violated rule before anything is persisted.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNode {
    /// Node ID. Generated when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Workflow this node belongs to.
    pub workflow_id: Uuid,
    /// Node kind.
    pub kind: NodeKind,
    /// Delivery status. Required for message nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
    /// Message body. Required for message nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    /// Linear successor. Required for start and message nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_edge: Option<Uuid>,
    /// `Yes` successor of a condition node, or incoming marker of an end node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yes_edge: Option<Uuid>,
    /// `No` successor of a condition node, or incoming marker of an end node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_edge: Option<Uuid>,
    /// Status a condition node routes on. Required for condition nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expects_status: Option<MessageStatus>,
}

impl CreateNode {
    /// Converts the request into an insert change set with a settled ID.
    pub fn into_model(self) -> model::NewNode {
        model::NewNode {
            id: self.id.unwrap_or_else(Uuid::now_v7),
            workflow_id: self.workflow_id,
            kind: self.kind,
            status: self.status,
            message_text: self.message_text,
            next_edge: self.next_edge,
            yes_edge: self.yes_edge,
            no_edge: self.no_edge,
            expects_status: self.expects_status,
        }
    }
}

/// Request to update a node.
///
/// Absent fields stay untouched; the merged result is re-validated against
/// the node-kind invariants before any mutation is applied.
#[must_use]
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNode {
    /// Node kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    /// Delivery status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
    /// Message body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    /// Linear successor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_edge: Option<Uuid>,
    /// `Yes` successor or incoming marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yes_edge: Option<Uuid>,
    /// `No` successor or incoming marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_edge: Option<Uuid>,
    /// Status a condition node routes on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expects_status: Option<MessageStatus>,
}

impl UpdateNode {
    /// Converts the request into an update change set.
    pub fn into_model(self) -> model::UpdateNode {
        model::UpdateNode {
            kind: self.kind,
            status: self.status.map(Some),
            message_text: self.message_text.map(Some),
            next_edge: self.next_edge.map(Some),
            yes_edge: self.yes_edge.map(Some),
            no_edge: self.no_edge.map(Some),
            expects_status: self.expects_status.map(Some),
            deleted_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use courier_runtime::validate_node;

    use super::*;

    #[test]
    fn valid_message_request_passes_validation() {
        let request = CreateNode {
            id: None,
            workflow_id: Uuid::now_v7(),
            kind: NodeKind::Message,
            status: Some(MessageStatus::Pending),
            message_text: Some("welcome aboard".into()),
            next_edge: Some(Uuid::now_v7()),
            yes_edge: None,
            no_edge: None,
            expects_status: None,
        };

        let model = request.into_model();
        assert!(validate_node(&model.to_record()).is_ok());
    }

    #[test]
    fn condition_without_predicate_fails_validation() {
        let request = CreateNode {
            id: None,
            workflow_id: Uuid::now_v7(),
            kind: NodeKind::Condition,
            status: None,
            message_text: None,
            next_edge: None,
            yes_edge: Some(Uuid::now_v7()),
            no_edge: Some(Uuid::now_v7()),
            expects_status: None,
        };

        let model = request.into_model();
        assert!(validate_node(&model.to_record()).is_err());
    }
}
