use crate::modules::operations::core::operation::{
    OPERAND_MAX, OPERAND_MIN, Operation, Operator,
};
use crate::modules::operations::use_cases::record_operation::command::RecordOperation;
use crate::modules::operations::use_cases::record_operation::decision::{DecideError, Decision};

fn check_operand(field: &'static str, value: Option<i64>) -> Result<i64, DecideError> {
    match value {
        None | Some(0) => Err(DecideError::OperandRequired { field }),
        Some(v) if !(OPERAND_MIN..=OPERAND_MAX).contains(&v) => {
            Err(DecideError::OperandOutOfRange { field, value: v })
        }
        Some(v) => Ok(v),
    }
}

fn check_operator(code: Option<i64>) -> Result<Operator, DecideError> {
    let code = code.ok_or(DecideError::OperatorRequired)?;
    Operator::try_from(code).map_err(|e| DecideError::UnknownOperator { value: e.0 })
}

fn validate(command: &RecordOperation) -> Result<(i64, i64, Operator), DecideError> {
    let left = check_operand("leftOperand", command.left_operand)?;
    let right = check_operand("rightOperand", command.right_operand)?;
    let operator = check_operator(command.operator)?;
    Ok((left, right, operator))
}

pub fn decide_record(command: RecordOperation) -> Decision {
    match validate(&command) {
        Ok((left_operand, right_operand, operator)) => Decision::Accepted {
            operation: Operation {
                id: command.operation_id,
                left_operand,
                right_operand,
                operator,
                created_at: command.recorded_at,
                updated_at: command.recorded_at,
            },
        },
        Err(reason) => Decision::Rejected { reason },
    }
}
