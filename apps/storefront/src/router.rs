//! Page selection and input forwarding to the store client.

use clap::{Parser, Subcommand};
use client_core::{BackendClient, CatalogTransport, StoreClient};
use shared::domain::{validate_price, MovieId, Session};
use tracing::info;

use crate::views::{self, Line, Screen};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Page {
    /// List available movies; `--buy` purchases one of them.
    Home {
        #[arg(long, value_name = "MOVIE_ID", value_parser = parse_movie_id)]
        buy: Option<MovieId>,
    },
    /// Show a single movie.
    Detail {
        #[arg(value_parser = parse_movie_id)]
        movie_id: MovieId,
    },
    /// Search movies by title.
    Search {
        #[arg(default_value = "")]
        keyword: String,
    },
    /// Titles bought by the session user.
    Purchases,
    /// Leave a comment on a movie.
    Feedback {
        #[arg(value_parser = parse_movie_id)]
        movie_id: MovieId,
        #[arg(long, default_value = "")]
        comment: String,
    },
    /// Add a movie to the catalog (admin).
    AddMovie {
        #[arg(long)]
        title: String,
        #[arg(long, value_parser = parse_price)]
        price: f64,
    },
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home { .. } => "home",
            Self::Detail { .. } => "movie_detail",
            Self::Search { .. } => "search",
            Self::Purchases => "my_purchases",
            Self::Feedback { .. } => "feedback",
            Self::AddMovie { .. } => "add_movie",
        }
    }
}

fn parse_movie_id(raw: &str) -> Result<MovieId, String> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a whole number"))?;
    MovieId::new(value).map_err(|err| err.to_string())
}

fn parse_price(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    validate_price(value).map_err(|err| err.to_string())
}

/// One line typed in interactive mode.
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct PageLine {
    #[command(subcommand)]
    page: Page,
}

#[derive(Debug, PartialEq)]
pub enum Input {
    Page(Page),
    Quit,
    Blank,
}

pub fn parse_line(line: &str) -> Result<Input, String> {
    let words = split_words(line)?;
    match words.first().map(String::as_str) {
        None => Ok(Input::Blank),
        Some("quit" | "exit") => Ok(Input::Quit),
        Some(_) => PageLine::try_parse_from(words)
            .map(|parsed| Input::Page(parsed.page))
            .map_err(|err| err.render().to_string()),
    }
}

/// Whitespace splitting with single and double quotes, so titles and
/// comments can contain spaces.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

pub struct PageRouter<T = BackendClient> {
    client: StoreClient<T>,
    session: Session,
}

impl<T: CatalogTransport> PageRouter<T> {
    pub fn new(client: StoreClient<T>, session: Session) -> Self {
        Self { client, session }
    }

    pub async fn show(&self, page: &Page) -> Screen {
        info!(page = page.name(), "page selected");
        let screen = self.render(page).await;
        info!(
            page = page.name(),
            lines = screen.lines.len(),
            failed = screen.has_errors(),
            "page rendered"
        );
        screen
    }

    async fn render(&self, page: &Page) -> Screen {
        let mut screen = Screen::default();
        match page {
            Page::Home { buy } => self.home(*buy, &mut screen).await,
            Page::Detail { movie_id } => match self.client.get_movie(*movie_id).await {
                Ok(movie) => {
                    screen.extend(views::movie_detail(&movie));
                }
                Err(report) => {
                    screen.push(Line::Error(report.user_message.into()));
                }
            },
            Page::Search { keyword } => {
                // Nothing is searched until there is something to search for.
                if keyword.trim().is_empty() {
                    return screen;
                }
                match self.client.search_movies(keyword).await {
                    Ok(movies) => {
                        screen.extend(views::search_results(&movies));
                    }
                    Err(report) => {
                        screen.push(Line::Error(report.user_message.into()));
                    }
                }
            }
            Page::Purchases => {
                screen.push(Line::Header("My Purchases".into()));
                match self.client.list_purchases(self.session.user_id).await {
                    Ok(titles) => {
                        screen.extend(views::purchase_history(&titles));
                    }
                    Err(report) => {
                        screen.push(Line::Error(report.user_message.into()));
                    }
                }
            }
            Page::Feedback { movie_id, comment } => {
                let outcome = self.client.submit_feedback(*movie_id, comment).await;
                push_confirmation(&mut screen, outcome);
            }
            Page::AddMovie { title, price } => {
                screen.push(Line::Header("Add New Movie".into()));
                let outcome = self.client.add_movie(title, *price).await;
                push_confirmation(&mut screen, outcome);
            }
        }
        screen
    }

    async fn home(&self, buy: Option<MovieId>, screen: &mut Screen) {
        screen.push(Line::Header("Available Movies".into()));
        let movies = match self.client.list_movies().await {
            Ok(movies) => movies,
            Err(report) => {
                screen.push(Line::Error(report.user_message.into()));
                return;
            }
        };
        screen.extend(views::movie_listing(&movies));

        let Some(movie_id) = buy else {
            return;
        };
        // Only listed titles can be bought from this page.
        if !movies.iter().any(|movie| movie.id == movie_id) {
            screen.push(Line::Warning(format!(
                "Movie {movie_id} is not in the catalog"
            )));
            return;
        }
        let outcome = self.client.purchase(movie_id, self.session.user_id).await;
        push_confirmation(screen, outcome);
    }
}

fn push_confirmation(screen: &mut Screen, outcome: Result<String, client_core::FailureReport>) {
    match outcome {
        Ok(message) => screen.push(Line::Success(message)),
        Err(report) => screen.push(Line::Error(report.user_message.into())),
    };
}

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod tests;
