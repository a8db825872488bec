/*
[INPUT]:  Queue service task schema and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the service accepts new task kinds or text operations
*/

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    #[default]
    Math,
    Text,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Math => "math",
            TaskType::Text => "text",
        }
    }
}

/// Operation applied by the worker to a text task's value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextOp {
    #[default]
    Reverse,
    Upper,
    Lower,
    Length,
}

impl TextOp {
    pub const ALL: [TextOp; 4] = [TextOp::Reverse, TextOp::Upper, TextOp::Lower, TextOp::Length];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextOp::Reverse => "reverse",
            TextOp::Upper => "upper",
            TextOp::Lower => "lower",
            TextOp::Length => "length",
        }
    }

    /// Position in [`TextOp::ALL`]
    pub fn index(&self) -> usize {
        match self {
            TextOp::Reverse => 0,
            TextOp::Upper => 1,
            TextOp::Lower => 2,
            TextOp::Length => 3,
        }
    }
}

impl fmt::Display for TextOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TextOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reverse" => Ok(TextOp::Reverse),
            "upper" => Ok(TextOp::Upper),
            "lower" => Ok(TextOp::Lower),
            "length" => Ok(TextOp::Length),
            other => Err(format!(
                "unknown text operation '{other}', expected reverse/upper/lower/length"
            )),
        }
    }
}
