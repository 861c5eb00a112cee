use crate::modules::operations::core::operation::{OPERAND_MAX, OPERAND_MIN, Operation};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("{field} is required and must be non-zero")]
    OperandRequired { field: &'static str },

    #[error(
        "{field} must be between {min} and {max}, got {value}",
        min = OPERAND_MIN,
        max = OPERAND_MAX
    )]
    OperandOutOfRange { field: &'static str, value: i64 },

    #[error("operator is required")]
    OperatorRequired,

    #[error(
        "operator must be one of 0 (ADD), 1 (SUBTRACT), 2 (MULTIPLY), 3 (DIVIDE), got {value}"
    )]
    UnknownOperator { value: i64 },
}

pub enum Decision {
    Accepted { operation: Operation },
    Rejected { reason: DecideError },
}
