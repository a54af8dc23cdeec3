use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! id_newtype {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Ids handed out by the catalog service start at 1.
            pub fn new(raw: i64) -> Result<Self, DomainError> {
                if raw < 1 {
                    return Err(DomainError::NonPositiveId {
                        kind: $label,
                        value: raw,
                    });
                }
                Ok(Self(raw))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(MovieId, "movie id");
id_newtype!(UserId, "user id");

/// A catalog entry as served by `GET /movies` and friends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub price: f64,
}

pub fn validate_price(price: f64) -> Result<f64, DomainError> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::InvalidPrice(price));
    }
    Ok(price)
}

pub fn validate_title(title: &str) -> Result<&str, DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::EmptyTitle);
    }
    Ok(title)
}

/// The acting identity for the whole process. There is no login; the id comes
/// from configuration and never changes after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
