use std::fmt;

/// One user intent, mapped to exactly one catalog request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListMovies,
    GetMovie,
    SearchMovies,
    Purchase,
    ListPurchases,
    SubmitFeedback,
    AddMovie,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::ListMovies,
        Operation::GetMovie,
        Operation::SearchMovies,
        Operation::Purchase,
        Operation::ListPurchases,
        Operation::SubmitFeedback,
        Operation::AddMovie,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ListMovies => "list_movies",
            Self::GetMovie => "get_movie",
            Self::SearchMovies => "search_movies",
            Self::Purchase => "purchase",
            Self::ListPurchases => "list_purchases",
            Self::SubmitFeedback => "submit_feedback",
            Self::AddMovie => "add_movie",
        }
    }

    /// Short message shown to the user when this operation fails, whatever
    /// the failure kind.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::ListMovies => "Could not fetch movies",
            Self::GetMovie => "Movie not found",
            Self::SearchMovies => "Error searching movies",
            Self::Purchase => "Could not complete purchase",
            Self::ListPurchases => "Could not fetch purchases",
            Self::SubmitFeedback => "Error submitting feedback",
            Self::AddMovie => "Error adding movie",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
