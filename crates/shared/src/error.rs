use std::fmt;

use thiserror::Error;

/// Discriminant of every way a catalog operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Connection,
    HttpStatus,
    Decode,
    Shape,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::HttpStatus => "http_status",
            Self::Decode => "decode",
            Self::Shape => "shape",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{kind} must be at least 1, got {value}")]
    NonPositiveId { kind: &'static str, value: i64 },
    #[error("price must be a non-negative number, got {0}")]
    InvalidPrice(f64),
    #[error("title must not be empty")]
    EmptyTitle,
}
