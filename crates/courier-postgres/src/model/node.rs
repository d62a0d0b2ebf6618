//! Node model for PostgreSQL database operations.

use courier_runtime::graph::NodeRecord;
use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::nodes;
use crate::types::{MessageStatus, NodeKind};

/// Node model representing one vertex of a workflow graph.
///
/// Edge columns hold target node identifiers. For end nodes the `yes_edge`
/// and `no_edge` columns mark incoming edges rather than outgoing targets.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = nodes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Node {
    /// Unique node identifier.
    pub id: Uuid,
    /// Reference to the workflow this node belongs to.
    pub workflow_id: Uuid,
    /// Node kind.
    pub kind: NodeKind,
    /// Delivery status. Only meaningful for message nodes.
    pub status: Option<MessageStatus>,
    /// Message body. Only meaningful for message nodes.
    pub message_text: Option<String>,
    /// Linear successor of a start or message node.
    pub next_edge: Option<Uuid>,
    /// `Yes` successor of a condition node, or incoming marker of an end node.
    pub yes_edge: Option<Uuid>,
    /// `No` successor of a condition node, or incoming marker of an end node.
    pub no_edge: Option<Uuid>,
    /// Status a condition node routes on.
    pub expects_status: Option<MessageStatus>,
    /// Timestamp when the node was created.
    pub created_at: Timestamp,
    /// Timestamp when the node was last updated.
    pub updated_at: Timestamp,
    /// Timestamp when the node was soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

/// Data for creating a new node.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = nodes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewNode {
    /// Node ID (caller-assigned or freshly generated).
    pub id: Uuid,
    /// Workflow ID (required).
    pub workflow_id: Uuid,
    /// Node kind.
    pub kind: NodeKind,
    /// Delivery status.
    pub status: Option<MessageStatus>,
    /// Message body.
    pub message_text: Option<String>,
    /// Linear successor.
    pub next_edge: Option<Uuid>,
    /// `Yes` successor or incoming marker.
    pub yes_edge: Option<Uuid>,
    /// `No` successor or incoming marker.
    pub no_edge: Option<Uuid>,
    /// Status a condition node routes on.
    pub expects_status: Option<MessageStatus>,
}

/// Data for updating a node.
///
/// Enumerates the permitted fields explicitly; outer `None` leaves a column
/// untouched, inner `None` clears it.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = nodes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateNode {
    /// Node kind.
    pub kind: Option<NodeKind>,
    /// Delivery status.
    pub status: Option<Option<MessageStatus>>,
    /// Message body.
    pub message_text: Option<Option<String>>,
    /// Linear successor.
    pub next_edge: Option<Option<Uuid>>,
    /// `Yes` successor or incoming marker.
    pub yes_edge: Option<Option<Uuid>>,
    /// `No` successor or incoming marker.
    pub no_edge: Option<Option<Uuid>>,
    /// Status a condition node routes on.
    pub expects_status: Option<Option<MessageStatus>>,
    /// Soft delete timestamp.
    pub deleted_at: Option<Option<Timestamp>>,
}

impl Node {
    /// Returns whether the node is deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns whether this is a message node.
    pub fn is_message(&self) -> bool {
        self.kind.is_message()
    }

    /// Projects the row into the runtime's plain record shape.
    pub fn to_record(&self) -> NodeRecord {
        NodeRecord {
            id: self.id.into(),
            kind: self.kind.into(),
            status: self.status.map(Into::into),
            message_text: self.message_text.clone(),
            next_edge: self.next_edge.map(Into::into),
            yes_edge: self.yes_edge.map(Into::into),
            no_edge: self.no_edge.map(Into::into),
            expects_status: self.expects_status.map(Into::into),
        }
    }
}

impl NewNode {
    /// Projects the change set into the runtime's plain record shape, so
    /// it can be validated before the insert reaches the database.
    pub fn to_record(&self) -> NodeRecord {
        NodeRecord {
            id: self.id.into(),
            kind: self.kind.into(),
            status: self.status.map(Into::into),
            message_text: self.message_text.clone(),
            next_edge: self.next_edge.map(Into::into),
            yes_edge: self.yes_edge.map(Into::into),
            no_edge: self.no_edge.map(Into::into),
            expects_status: self.expects_status.map(Into::into),
        }
    }
}

impl UpdateNode {
    /// Returns the record that would result from applying this change set,
    /// so it can be validated before any mutation reaches the database.
    pub fn merged_record(&self, node: &Node) -> NodeRecord {
        let merged = |patch: &Option<Option<Uuid>>, current: Option<Uuid>| {
            patch.unwrap_or(current).map(Into::into)
        };

        NodeRecord {
            id: node.id.into(),
            kind: self.kind.unwrap_or(node.kind).into(),
            status: self.status.unwrap_or(node.status).map(Into::into),
            message_text: self
                .message_text
                .clone()
                .unwrap_or_else(|| node.message_text.clone()),
            next_edge: merged(&self.next_edge, node.next_edge),
            yes_edge: merged(&self.yes_edge, node.yes_edge),
            no_edge: merged(&self.no_edge, node.no_edge),
            expects_status: self
                .expects_status
                .unwrap_or(node.expects_status)
                .map(Into::into),
        }
    }
}
