use std::fmt;

use crate::constants::{FAILURE_MESSAGE, SUCCESS_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    NotOk,
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::Ok => write!(f, "ok"),
            ResponseStatus::NotOk => write!(f, "nok"),
        }
    }
}

/// The single outcome reported for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResponse {
    pub result: ResponseStatus,
    pub message: String,
}

impl ProcessResponse {
    pub fn ok() -> Self {
        ProcessResponse {
            result: ResponseStatus::Ok,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn not_ok() -> Self {
        ProcessResponse {
            result: ResponseStatus::NotOk,
            message: FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result == ResponseStatus::Ok
    }
}

impl fmt::Display for ProcessResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ result: '{}', message: '{}' }}", self.result, self.message)
    }
}
