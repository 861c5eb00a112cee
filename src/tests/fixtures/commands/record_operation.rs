// Shared test fixture for the RecordOperation command.

use crate::modules::operations::core::operation::Operator;
use crate::modules::operations::use_cases::record_operation::command::RecordOperation;
use chrono::{TimeZone, Utc};
use uuid::Uuid;

pub struct RecordOperationBuilder {
    inner: RecordOperation,
}

impl Default for RecordOperationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordOperationBuilder {
    pub fn new() -> Self {
        Self {
            inner: RecordOperation {
                operation_id: Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0001),
                left_operand: Some(5),
                right_operand: Some(3),
                operator: Some(0),
                recorded_at: Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap(),
            },
        }
    }

    pub fn operation_id(mut self, v: Uuid) -> Self {
        self.inner.operation_id = v;
        self
    }

    pub fn left_operand(self, v: i64) -> Self {
        self.raw_left_operand(Some(v))
    }

    pub fn raw_left_operand(mut self, v: Option<i64>) -> Self {
        self.inner.left_operand = v;
        self
    }

    pub fn right_operand(self, v: i64) -> Self {
        self.raw_right_operand(Some(v))
    }

    pub fn raw_right_operand(mut self, v: Option<i64>) -> Self {
        self.inner.right_operand = v;
        self
    }

    pub fn operator(self, v: Operator) -> Self {
        self.raw_operator(Some(u8::from(v) as i64))
    }

    pub fn raw_operator(mut self, v: Option<i64>) -> Self {
        self.inner.operator = v;
        self
    }

    pub fn build(self) -> RecordOperation {
        self.inner
    }
}

#[cfg(test)]
mod record_operation_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_a_valid_addition() {
        let built = RecordOperationBuilder::default().build();
        assert_eq!(built.left_operand, Some(5));
        assert_eq!(built.right_operand, Some(3));
        assert_eq!(built.operator, Some(0));
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let id = Uuid::nil();
        let custom = RecordOperationBuilder::new()
            .operation_id(id)
            .left_operand(-7)
            .raw_right_operand(None)
            .operator(Operator::Divide)
            .build();

        assert_eq!(custom.operation_id, id);
        assert_eq!(custom.left_operand, Some(-7));
        assert_eq!(custom.right_operand, None);
        assert_eq!(custom.operator, Some(3));
    }
}
