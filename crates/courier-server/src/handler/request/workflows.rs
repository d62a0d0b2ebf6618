//! Request types for workflow endpoints.

use courier_postgres::model;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a new workflow.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkflow {
    /// Workflow ID. Generated when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Workflow name.
    pub name: String,
}

impl CreateWorkflow {
    /// Converts the request into an insert change set.
    pub fn into_model(self) -> model::NewWorkflow {
        model::NewWorkflow {
            id: self.id.unwrap_or_else(Uuid::now_v7),
            name: self.name,
        }
    }
}

/// Request to rename a workflow.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkflow {
    /// New workflow name.
    pub name: String,
}

impl UpdateWorkflow {
    /// Converts the request into an update change set.
    pub fn into_model(self) -> model::UpdateWorkflow {
        model::UpdateWorkflow {
            name: Some(self.name),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_generates_id_when_omitted() {
        let request = CreateWorkflow {
            id: None,
            name: "onboarding drip".into(),
        };
        let model = request.into_model();
        assert!(!model.id.is_nil());
        assert_eq!(model.name, "onboarding drip");
    }

    #[test]
    fn create_keeps_caller_assigned_id() {
        let id = Uuid::now_v7();
        let request = CreateWorkflow {
            id: Some(id),
            name: "onboarding drip".into(),
        };
        assert_eq!(request.into_model().id, id);
    }
}
