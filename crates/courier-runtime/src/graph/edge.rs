//! Edge labels for workflow graphs.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Label on a directed edge between two nodes.
///
/// Linear nodes advance over their single `next` edge. A condition node
/// owns exactly one `Yes` and one `No` edge; branch resolution picks
/// between the two at run time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum EdgeLabel {
    /// Unconditional advance from a start or message node.
    #[default]
    #[strum(serialize = "next")]
    Next,
    /// Condition branch taken when the branch rule matches.
    #[strum(serialize = "Yes")]
    Yes,
    /// Condition branch taken when the branch rule does not match.
    #[strum(serialize = "No")]
    No,
}

impl EdgeLabel {
    /// Returns whether this label belongs to a condition branch.
    #[inline]
    pub const fn is_branch(self) -> bool {
        matches!(self, EdgeLabel::Yes | EdgeLabel::No)
    }
}
