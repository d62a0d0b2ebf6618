//! Message status enumeration tracking message delivery progress.

use diesel_derive_enum::DbEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the delivery status of a message node.
///
/// This enumeration corresponds to the `MESSAGE_STATUS` PostgreSQL enum and
/// doubles as the branching input: condition nodes route on the status of
/// the workflow's most recently created message node.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::MessageStatus"]
pub enum MessageStatus {
    /// Message has not been sent yet
    #[db_rename = "pending"]
    #[serde(rename = "pending")]
    #[default]
    Pending,

    /// Message was handed to the delivery channel
    #[db_rename = "sent"]
    #[serde(rename = "sent")]
    Sent,

    /// Recipient opened the message
    #[db_rename = "opened"]
    #[serde(rename = "opened")]
    Opened,
}

impl MessageStatus {
    /// Returns whether the message is still pending.
    #[inline]
    pub fn is_pending(self) -> bool {
        matches!(self, MessageStatus::Pending)
    }

    /// Returns whether the message was sent.
    #[inline]
    pub fn is_sent(self) -> bool {
        matches!(self, MessageStatus::Sent)
    }

    /// Returns whether the message was opened.
    #[inline]
    pub fn is_opened(self) -> bool {
        matches!(self, MessageStatus::Opened)
    }
}

impl From<MessageStatus> for courier_runtime::graph::MessageStatus {
    fn from(status: MessageStatus) -> Self {
        match status {
            MessageStatus::Pending => Self::Pending,
            MessageStatus::Sent => Self::Sent,
            MessageStatus::Opened => Self::Opened,
        }
    }
}

impl From<courier_runtime::graph::MessageStatus> for MessageStatus {
    fn from(status: courier_runtime::graph::MessageStatus) -> Self {
        use courier_runtime::graph::MessageStatus as Status;
        match status {
            Status::Pending => Self::Pending,
            Status::Sent => Self::Sent,
            Status::Opened => Self::Opened,
        }
    }
}
