//! Turns operation failures into a user message plus one diagnostic record.

use chrono::{DateTime, Utc};
use shared::error::FailureKind;
use tracing::error;

use crate::{error::ClientError, types::Operation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub operation: Operation,
    pub kind: FailureKind,
    pub detail: String,
    pub at: DateTime<Utc>,
}

/// A failed operation, already logged. Pages only need `user_message`.
#[derive(Debug)]
pub struct FailureReport {
    pub user_message: &'static str,
    pub record: DiagnosticRecord,
    pub error: ClientError,
}

impl FailureReport {
    pub fn kind(&self) -> FailureKind {
        self.record.kind
    }

    pub fn status(&self) -> Option<u16> {
        self.error.status()
    }
}

pub fn report_failure(operation: Operation, err: ClientError) -> FailureReport {
    let record = DiagnosticRecord {
        operation,
        kind: err.kind(),
        detail: err.detail(),
        at: Utc::now(),
    };
    error!(
        %operation,
        kind = %record.kind,
        detail = %record.detail,
        "catalog operation failed"
    );
    FailureReport {
        user_message: operation.failure_message(),
        record,
        error: err,
    }
}

#[cfg(test)]
#[path = "tests/reporter_tests.rs"]
mod tests;
