use serde::{Deserialize, Serialize};

use crate::domain::{MovieId, UserId};

/// Body of `POST /purchase`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub movie_id: MovieId,
    pub user_id: UserId,
}

/// Body of `POST /feedback`. The comment is free text and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub movie_id: MovieId,
    pub comment: String,
}

/// Body of `POST /movies`. The service assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovieRequest {
    pub title: String,
    pub price: f64,
}

/// `{message}` confirmation returned by every POST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response of `GET /purchases/{user_id}`; purchases are identified by title only.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PurchasesResponse {
    pub purchases: Vec<String>,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
