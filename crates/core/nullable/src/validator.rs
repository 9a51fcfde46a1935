use ::validator::{ValidateLength, ValidateRange, ValidateRequired};

use crate::Nullable;

/// Absent and null both fail `required`
impl<T> ValidateRequired for Nullable<T> {
    fn is_some(&self) -> bool {
        self.has_value()
    }
}

/// Without a value there is no length to check
impl<T: ValidateLength<u64>> ValidateLength<u64> for Nullable<T> {
    fn length(&self) -> Option<u64> {
        match self {
            Nullable::Value(value) => value.length(),
            _ => None,
        }
    }
}

impl<T: ValidateRange<T>> ValidateRange<T> for Nullable<T> {
    fn greater_than(&self, max: T) -> Option<bool> {
        match self {
            Nullable::Value(value) => value.greater_than(max),
            _ => None,
        }
    }

    fn less_than(&self, min: T) -> Option<bool> {
        match self {
            Nullable::Value(value) => value.less_than(min),
            _ => None,
        }
    }
}
