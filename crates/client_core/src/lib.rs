use std::time::Duration;

use shared::{
    domain::{validate_price, Movie, MovieId, UserId},
    protocol::{
        FeedbackRequest, MessageResponse, NewMovieRequest, PurchaseRequest, PurchasesResponse,
    },
};
use tracing::{debug, info};

pub mod error;
pub mod reporter;
pub mod response;
pub mod transport;
pub mod types;

pub use error::ClientError;
pub use reporter::{report_failure, DiagnosticRecord, FailureReport};
pub use response::{FromPayload, ShapeError};
pub use transport::{
    BackendClient, BackendRequest, CatalogTransport, HttpMethod, TransportSetupError,
};
pub use types::Operation;

/// Dispatches each storefront intent as a single catalog request.
///
/// Every operation either returns display data or a [`FailureReport`] that
/// has already been logged; nothing propagates past this boundary. Calls are
/// independent: invoking an operation twice sends two requests.
pub struct StoreClient<T = BackendClient> {
    transport: T,
}

impl StoreClient<BackendClient> {
    pub fn connect(
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportSetupError> {
        Ok(Self::new(BackendClient::new(base_url, timeout)?))
    }
}

impl<T: CatalogTransport> StoreClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_movies(&self) -> Result<Vec<Movie>, FailureReport> {
        let operation = Operation::ListMovies;
        info!(%operation, "fetching all movies");
        let movies: Vec<Movie> = self
            .run(operation, Ok(BackendRequest::get(["movies"])))
            .await?;
        debug!(%operation, ?movies, "movies payload");
        info!(
            %operation,
            count = movies.len(),
            "movies fetched"
        );
        Ok(movies)
    }

    pub async fn get_movie(&self, movie_id: MovieId) -> Result<Movie, FailureReport> {
        let operation = Operation::GetMovie;
        info!(%operation, movie_id = movie_id.0, "fetching movie details");
        let movie: Movie = self
            .run(
                operation,
                Ok(BackendRequest::get(["movies".to_string(), movie_id.to_string()])),
            )
            .await?;
        info!(
            %operation,
            movie_id = movie.id.0,
            title = %movie.title,
            "movie details received"
        );
        Ok(movie)
    }

    /// An empty result is a successful search with no matches.
    pub async fn search_movies(&self, keyword: &str) -> Result<Vec<Movie>, FailureReport> {
        let operation = Operation::SearchMovies;
        info!(%operation, keyword, "searching movies");
        let movies: Vec<Movie> = self
            .run(
                operation,
                Ok(BackendRequest::get(["movies", "search", keyword])),
            )
            .await?;
        info!(
            %operation,
            keyword,
            count = movies.len(),
            "search results received"
        );
        Ok(movies)
    }

    pub async fn purchase(
        &self,
        movie_id: MovieId,
        user_id: UserId,
    ) -> Result<String, FailureReport> {
        let operation = Operation::Purchase;
        info!(
            %operation,
            movie_id = movie_id.0,
            user_id = user_id.0,
            "sending purchase request"
        );
        let body = PurchaseRequest { movie_id, user_id };
        self.confirm(operation, BackendRequest::post(["purchase"], &body))
            .await
    }

    pub async fn list_purchases(&self, user_id: UserId) -> Result<Vec<String>, FailureReport> {
        let operation = Operation::ListPurchases;
        info!(%operation, user_id = user_id.0, "fetching purchases");
        let response: PurchasesResponse = self
            .run(
                operation,
                Ok(BackendRequest::get([
                    "purchases".to_string(),
                    user_id.to_string(),
                ])),
            )
            .await?;
        info!(
            %operation,
            user_id = user_id.0,
            count = response.purchases.len(),
            "purchases retrieved"
        );
        Ok(response.purchases)
    }

    pub async fn submit_feedback(
        &self,
        movie_id: MovieId,
        comment: &str,
    ) -> Result<String, FailureReport> {
        let operation = Operation::SubmitFeedback;
        info!(
            %operation,
            movie_id = movie_id.0,
            comment,
            "submitting feedback"
        );
        let body = FeedbackRequest {
            movie_id,
            comment: comment.to_string(),
        };
        self.confirm(operation, BackendRequest::post(["feedback"], &body))
            .await
    }

    pub async fn add_movie(&self, title: &str, price: f64) -> Result<String, FailureReport> {
        let operation = Operation::AddMovie;
        info!(%operation, title, price, "adding movie");
        let price = validate_price(price).map_err(|source| {
            report_failure(
                operation,
                ClientError::Shape(ShapeError::InvalidValue {
                    path: "request.price".into(),
                    source,
                }),
            )
        })?;
        let body = NewMovieRequest {
            title: title.to_string(),
            price,
        };
        self.confirm(operation, BackendRequest::post(["movies"], &body))
            .await
    }

    async fn confirm(
        &self,
        operation: Operation,
        request: Result<BackendRequest, ClientError>,
    ) -> Result<String, FailureReport> {
        let response: MessageResponse = self.run(operation, request).await?;
        info!(
            %operation,
            message = %response.message,
            "confirmation received"
        );
        Ok(response.message)
    }

    async fn run<R: FromPayload>(
        &self,
        operation: Operation,
        request: Result<BackendRequest, ClientError>,
    ) -> Result<R, FailureReport> {
        let request = request.map_err(|err| report_failure(operation, err))?;
        debug!(
            %operation,
            method = request.method.as_str(),
            path = %request.path(),
            "dispatching catalog request"
        );

        let outcome = match self.transport.execute(&request).await {
            Ok(payload) => R::from_payload(&payload).map_err(ClientError::from),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(value) => {
                debug!(%operation, "catalog operation succeeded");
                Ok(value)
            }
            Err(err) => Err(report_failure(operation, err)),
        }
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
