use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const OPERAND_MIN: i64 = -99;
pub const OPERAND_MAX: i64 = 99;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown operator code {0}")]
pub struct UnknownOperator(pub i64);

/// Arithmetic operator, carried on the wire as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum Operator {
    Add = 0,
    Subtract = 1,
    Multiply = 2,
    Divide = 3,
}

impl From<Operator> for u8 {
    fn from(operator: Operator) -> Self {
        operator as u8
    }
}

impl TryFrom<i64> for Operator {
    type Error = UnknownOperator;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Operator::Add),
            1 => Ok(Operator::Subtract),
            2 => Ok(Operator::Multiply),
            3 => Ok(Operator::Divide),
            other => Err(UnknownOperator(other)),
        }
    }
}

/// A recorded, not evaluated, arithmetic expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: Uuid,
    pub left_operand: i64,
    pub right_operand: i64,
    pub operator: Operator,
    pub created_at: DateTime<Utc>,
    // Equal to created_at; nothing updates an operation.
    pub updated_at: DateTime<Utc>,
}
