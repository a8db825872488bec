/*
[INPUT]:  Queue service task schema and serde requirements
[OUTPUT]: Task payload union sent to POST /task
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the task payload shape changes
*/

use serde::{Deserialize, Serialize};

use super::enums::{TaskType, TextOp};

/// One unit of work for the queue service.
///
/// Serialized with the `type` tag first, e.g.
/// `{"type":"text","operation":"upper","value":"hello"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskPayload {
    Math { expr: String },
    Text { operation: TextOp, value: String },
}

impl TaskPayload {
    pub fn math(expr: impl Into<String>) -> Self {
        TaskPayload::Math { expr: expr.into() }
    }

    pub fn text(operation: TextOp, value: impl Into<String>) -> Self {
        TaskPayload::Text {
            operation,
            value: value.into(),
        }
    }

    pub fn task_type(&self) -> TaskType {
        match self {
            TaskPayload::Math { .. } => TaskType::Math,
            TaskPayload::Text { .. } => TaskType::Text,
        }
    }

    /// Compact JSON form, as echoed back to the operator on acceptance
    pub fn to_json(&self) -> String {
        // Only string and unit-enum fields: serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Canned tasks used to smoke-test a freshly deployed queue
pub fn sample_batch() -> Vec<TaskPayload> {
    vec![
        TaskPayload::math("factorial(10)"),
        TaskPayload::math("sqrt(144)"),
        TaskPayload::math("2**16"),
        TaskPayload::text(TextOp::Reverse, "kubernetes"),
        TaskPayload::text(TextOp::Upper, "hello world"),
        TaskPayload::text(TextOp::Length, "minikube"),
    ]
}
