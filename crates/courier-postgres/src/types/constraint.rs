//! Database constraint violations, organized per table.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Broad category of a constraint violation, used to pick a response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintCategory {
    /// A uniqueness constraint was violated.
    Uniqueness,
    /// A referenced row does not exist.
    Reference,
    /// A value failed a check constraint.
    Validation,
}

/// Workflows table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum WorkflowConstraint {
    // Workflow identity constraints
    #[strum(serialize = "workflows_pkey")]
    PrimaryKey,

    // Workflow name validation constraints
    #[strum(serialize = "workflows_name_length")]
    NameLength,
}

impl WorkflowConstraint {
    /// Creates a new [`WorkflowConstraint`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            WorkflowConstraint::PrimaryKey => ConstraintCategory::Uniqueness,
            WorkflowConstraint::NameLength => ConstraintCategory::Validation,
        }
    }
}

impl From<WorkflowConstraint> for String {
    #[inline]
    fn from(val: WorkflowConstraint) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for WorkflowConstraint {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Nodes table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum NodeConstraint {
    // Node identity constraints
    #[strum(serialize = "nodes_pkey")]
    PrimaryKey,

    // Node ownership constraints
    #[strum(serialize = "nodes_workflow_id_fkey")]
    WorkflowFk,

    // Node text validation constraints
    #[strum(serialize = "nodes_message_text_length")]
    MessageTextLength,
}

impl NodeConstraint {
    /// Creates a new [`NodeConstraint`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            NodeConstraint::PrimaryKey => ConstraintCategory::Uniqueness,
            NodeConstraint::WorkflowFk => ConstraintCategory::Reference,
            NodeConstraint::MessageTextLength => ConstraintCategory::Validation,
        }
    }
}

impl From<NodeConstraint> for String {
    #[inline]
    fn from(val: NodeConstraint) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for NodeConstraint {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Unified constraint violation enum that can represent any database constraint.
///
/// This enum wraps the per-table constraint types, providing a single
/// interface for handling any constraint violation while keeping the
/// per-table enums type safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Workflows table constraint.
    Workflow(WorkflowConstraint),
    /// Nodes table constraint.
    Node(NodeConstraint),
}

impl ConstraintViolation {
    /// Creates a new [`ConstraintViolation`] from a constraint name.
    ///
    /// Returns `None` when the name does not match any known constraint.
    pub fn new(constraint: &str) -> Option<Self> {
        WorkflowConstraint::new(constraint)
            .map(Self::Workflow)
            .or_else(|| NodeConstraint::new(constraint).map(Self::Node))
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            ConstraintViolation::Workflow(c) => c.categorize(),
            ConstraintViolation::Node(c) => c.categorize(),
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::Workflow(c) => c.fmt(f),
            ConstraintViolation::Node(c) => c.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_constraint_names() {
        assert_eq!(
            ConstraintViolation::new("workflows_pkey"),
            Some(ConstraintViolation::Workflow(WorkflowConstraint::PrimaryKey))
        );
        assert_eq!(
            ConstraintViolation::new("nodes_workflow_id_fkey"),
            Some(ConstraintViolation::Node(NodeConstraint::WorkflowFk))
        );
        assert_eq!(ConstraintViolation::new("documents_pkey"), None);
    }
}
