//! Terminal rendering of page results.

use std::fmt;

use shared::domain::Movie;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Header(String),
    Subheader(String),
    Text(String),
    Bullet(String),
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

impl Line {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(text) => write!(f, "== {text} =="),
            Self::Subheader(text) => write!(f, "{text}"),
            Self::Text(text) => write!(f, "  {text}"),
            Self::Bullet(text) => write!(f, "- {text}"),
            Self::Success(text) => write!(f, "[ok] {text}"),
            Self::Info(text) => write!(f, "[info] {text}"),
            Self::Warning(text) => write!(f, "[warn] {text}"),
            Self::Error(text) => write!(f, "[error] {text}"),
        }
    }
}

/// Everything one page interaction shows, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub lines: Vec<Line>,
}

impl Screen {
    pub fn push(&mut self, line: Line) -> &mut Self {
        self.lines.push(line);
        self
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line>) -> &mut Self {
        self.lines.extend(lines);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.lines.iter().any(Line::is_error)
    }
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

pub fn movie_listing(movies: &[Movie]) -> Vec<Line> {
    movies
        .iter()
        .flat_map(|movie| {
            [
                Line::Subheader(format!("#{} {}", movie.id, movie.title)),
                Line::Text(format!("Price: {}", format_price(movie.price))),
            ]
        })
        .collect()
}

pub fn movie_detail(movie: &Movie) -> Vec<Line> {
    vec![
        Line::Text(format!("Title: {}", movie.title)),
        Line::Text(format!("Price: {}", format_price(movie.price))),
    ]
}

pub fn search_results(movies: &[Movie]) -> Vec<Line> {
    if movies.is_empty() {
        return vec![Line::Warning("No movies matched your search.".into())];
    }
    movie_listing(movies)
}

pub fn purchase_history(titles: &[String]) -> Vec<Line> {
    if titles.is_empty() {
        return vec![Line::Info("No purchases found.".into())];
    }
    titles.iter().cloned().map(Line::Bullet).collect()
}

#[cfg(test)]
#[path = "tests/views_tests.rs"]
mod tests;
