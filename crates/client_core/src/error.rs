use shared::error::FailureKind;
use thiserror::Error;

use crate::response::ShapeError;

/// Failure of a single catalog exchange, classified by where it broke.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("could not reach {url}: {detail}")]
    Connection { url: String, detail: String },
    #[error("{url} responded with HTTP {status}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },
    #[error("response from {url} is not valid JSON: {detail}")]
    Decode { url: String, detail: String },
    #[error("unexpected response shape: {0}")]
    Shape(#[from] ShapeError),
}

impl ClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Connection { .. } => FailureKind::Connection,
            Self::HttpStatus { .. } => FailureKind::HttpStatus,
            Self::Decode { .. } => FailureKind::Decode,
            Self::Shape(_) => FailureKind::Shape,
        }
    }

    /// HTTP status code for `HttpStatus` failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// One-line detail for diagnostic records. Error bodies are opaque and
    /// included verbatim.
    pub fn detail(&self) -> String {
        match self {
            Self::HttpStatus { body, .. } if !body.is_empty() => format!("{self}: {body}"),
            _ => self.to_string(),
        }
    }
}
