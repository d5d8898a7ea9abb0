//! JSON wire format of the request-handling layer.
//!
//! Request body:
//!
//! ```text
//! {"operations": [
//!     {"type": "calc", "op": "+", "var": "x", "left": 10, "right": "2"},
//!     {"type": "print", "var": "x"}
//! ]}
//! ```
//!
//! Operands may be sent as JSON strings or JSON numbers. A number is
//! classified by its text exactly as written, so `10` and `"10"` are the
//! same literal while `10.0` is a reference like `"10.0"`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;
use thiserror::Error;

use crate::{BinaryOp, Name, Operand, Operation};

/// Error converting a wire record into an [`Operation`].
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum WireError {
    #[error("operation #{index}: unknown type `{kind}` (expected `calc` or `print`)")]
    UnknownType { index: usize, kind: String },
    #[error("operation #{index}: calc is missing its {side} operand")]
    MissingOperand { index: usize, side: &'static str },
    #[error("operation #{index}: variable name is empty")]
    EmptyName { index: usize },
}

/// Incoming request: the unordered operation list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OperationRequest {
    #[serde(default)]
    pub operations: Vec<WireOperation>,
}

impl OperationRequest {
    /// Convert every wire record, failing on the first malformed one.
    pub fn into_operations(self) -> Result<Vec<Operation>, WireError> {
        self.operations
            .into_iter()
            .enumerate()
            .map(|(index, op)| op.into_operation(index))
            .collect()
    }
}

/// One operation as it appears on the wire.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WireOperation {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub op: String,
    pub var: String,
    #[serde(
        default,
        deserialize_with = "flex_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub left: Option<String>,
    #[serde(
        default,
        deserialize_with = "flex_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub right: Option<String>,
}

impl WireOperation {
    /// Convert into an [`Operation`]; `index` is used in error messages.
    pub fn into_operation(self, index: usize) -> Result<Operation, WireError> {
        if self.var.is_empty() {
            return Err(WireError::EmptyName { index });
        }
        match self.kind.as_str() {
            "calc" => {
                let left = self
                    .left
                    .ok_or(WireError::MissingOperand { index, side: "left" })?;
                let right = self
                    .right
                    .ok_or(WireError::MissingOperand { index, side: "right" })?;
                Ok(Operation::Calc {
                    target: Name::from(self.var),
                    op: BinaryOp::parse(&self.op),
                    left: Operand::parse(&left),
                    right: Operand::parse(&right),
                })
            }
            "print" => Ok(Operation::print(self.var)),
            _ => Err(WireError::UnknownType {
                index,
                kind: self.kind,
            }),
        }
    }
}

impl From<&Operation> for WireOperation {
    fn from(operation: &Operation) -> Self {
        match operation {
            Operation::Calc {
                target,
                op,
                left,
                right,
            } => WireOperation {
                kind: "calc".to_string(),
                op: op.symbol().to_string(),
                var: target.to_string(),
                left: Some(left.to_string()),
                right: Some(right.to_string()),
            },
            Operation::Print { target } => WireOperation {
                kind: "print".to_string(),
                op: String::new(),
                var: target.to_string(),
                left: None,
                right: None,
            },
        }
    }
}

/// One printed variable in the response.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct VariableValue {
    pub var: Name,
    pub value: i64,
}

/// Response body: printed values in print order plus an optional warning.
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct OperationResponse {
    pub items: Vec<VariableValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Accept an operand as either a JSON string or a JSON number.
///
/// Numbers keep their source text: `10.0` and `1e3` are not whole integers
/// on the wire, so they classify as references, never as literals.
fn flex_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let Some(raw) = Option::<Box<RawValue>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let text = raw.get();

    match text.as_bytes().first() {
        Some(b'"') => serde_json::from_str::<String>(text)
            .map(Some)
            .map_err(D::Error::custom),
        Some(b'-' | b'0'..=b'9') => Ok(Some(text.to_owned())),
        _ => Err(D::Error::custom(format!(
            "operand must be a string or a number, found `{text}`"
        ))),
    }
}
