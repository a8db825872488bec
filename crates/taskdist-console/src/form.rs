/*
[INPUT]:  Operator edits to the task draft
[OUTPUT]: Trimmed TaskPayload for the active task type, or nothing
[POS]:    Client core - editable task form
[UPDATE]: When task kinds or their fields change
*/

use taskdist_adapter::{TaskPayload, TaskType, TextOp};

/// Draft of the next task to submit.
///
/// Both sub-forms keep their values while inactive, so switching the task
/// type back and forth never loses input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    task_type: TaskType,
    math_expression: String,
    text_operation: TextOp,
    text_value: String,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task_type(&self) -> TaskType {
        self.task_type
    }

    pub fn math_expression(&self) -> &str {
        &self.math_expression
    }

    pub fn text_operation(&self) -> TextOp {
        self.text_operation
    }

    pub fn text_value(&self) -> &str {
        &self.text_value
    }

    pub fn set_task_type(&mut self, task_type: TaskType) {
        self.task_type = task_type;
    }

    pub fn toggle_task_type(&mut self) {
        self.task_type = match self.task_type {
            TaskType::Math => TaskType::Text,
            TaskType::Text => TaskType::Math,
        };
    }

    pub fn set_math_expression(&mut self, expr: impl Into<String>) {
        self.math_expression = expr.into();
    }

    pub fn set_text_operation(&mut self, operation: TextOp) {
        self.text_operation = operation;
    }

    /// Step through the operations, wrapping at both ends
    pub fn cycle_text_op(&mut self, delta: isize) {
        let len = TextOp::ALL.len() as isize;
        let next = (self.text_operation.index() as isize + delta).rem_euclid(len);
        self.text_operation = TextOp::ALL[next as usize];
    }

    pub fn set_text_value(&mut self, value: impl Into<String>) {
        self.text_value = value.into();
    }

    /// Free-text field of the active sub-form
    pub fn active_input_mut(&mut self) -> &mut String {
        match self.task_type {
            TaskType::Math => &mut self.math_expression,
            TaskType::Text => &mut self.text_value,
        }
    }

    /// Payload for the active sub-form, `None` when its input trims to empty
    pub fn build_payload(&self) -> Option<TaskPayload> {
        match self.task_type {
            TaskType::Math => {
                let expr = self.math_expression.trim();
                if expr.is_empty() {
                    return None;
                }
                Some(TaskPayload::math(expr))
            }
            TaskType::Text => {
                let value = self.text_value.trim();
                if value.is_empty() {
                    return None;
                }
                Some(TaskPayload::text(self.text_operation, value))
            }
        }
    }
}
