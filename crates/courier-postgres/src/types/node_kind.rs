//! Node kind enumeration for dispatch workflow nodes.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the role of a node within a workflow graph.
///
/// This enumeration corresponds to the `NODE_KIND` PostgreSQL enum. The set
/// is closed: the database and the deserializer both reject values outside
/// of it.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::NodeKind"]
pub enum NodeKind {
    /// Entry point of the workflow
    #[db_rename = "start"]
    #[serde(rename = "start")]
    Start,

    /// Dispatches a message to the recipient
    #[db_rename = "message"]
    #[serde(rename = "message")]
    Message,

    /// Branches on the latest message status
    #[db_rename = "condition"]
    #[serde(rename = "condition")]
    Condition,

    /// Terminal node
    #[db_rename = "end"]
    #[serde(rename = "end")]
    End,
}

impl NodeKind {
    /// Returns whether this is a start node.
    #[inline]
    pub fn is_start(self) -> bool {
        matches!(self, NodeKind::Start)
    }

    /// Returns whether this is a message node.
    #[inline]
    pub fn is_message(self) -> bool {
        matches!(self, NodeKind::Message)
    }

    /// Returns whether this is a condition node.
    #[inline]
    pub fn is_condition(self) -> bool {
        matches!(self, NodeKind::Condition)
    }

    /// Returns whether this is an end node.
    #[inline]
    pub fn is_end(self) -> bool {
        matches!(self, NodeKind::End)
    }
}

impl From<NodeKind> for courier_runtime::graph::NodeKind {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Start => Self::Start,
            NodeKind::Message => Self::Message,
            NodeKind::Condition => Self::Condition,
            NodeKind::End => Self::End,
        }
    }
}

impl From<courier_runtime::graph::NodeKind> for NodeKind {
    fn from(kind: courier_runtime::graph::NodeKind) -> Self {
        use courier_runtime::graph::NodeKind as Kind;
        match kind {
            Kind::Start => Self::Start,
            Kind::Message => Self::Message,
            Kind::Condition => Self::Condition,
            Kind::End => Self::End,
        }
    }
}
