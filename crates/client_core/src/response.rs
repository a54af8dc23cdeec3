//! Shape validation of decoded catalog responses.
//!
//! Every failure names the JSON path of the offending field, e.g.
//! `$[1].price` or `$.message`.

use serde_json::{Map, Value};
use shared::{
    domain::{Movie, MovieId},
    error::DomainError,
    protocol::{MessageResponse, PurchasesResponse},
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("missing field `{path}`")]
    MissingField { path: String },
    #[error("expected {expected} at `{path}`, found {found}")]
    Mismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("invalid value at `{path}`: {source}")]
    InvalidValue {
        path: String,
        #[source]
        source: DomainError,
    },
}

/// Types that can be extracted from a decoded response body.
pub trait FromPayload: Sized {
    fn from_payload(value: &Value) -> Result<Self, ShapeError>;
}

impl FromPayload for Movie {
    fn from_payload(value: &Value) -> Result<Self, ShapeError> {
        movie_at(value, "$")
    }
}

impl FromPayload for Vec<Movie> {
    fn from_payload(value: &Value) -> Result<Self, ShapeError> {
        let items = expect_array(value, "$")?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| movie_at(item, &format!("$[{index}]")))
            .collect()
    }
}

impl FromPayload for MessageResponse {
    fn from_payload(value: &Value) -> Result<Self, ShapeError> {
        let object = expect_object(value, "$")?;
        let message = expect_str(field(object, "$", "message")?, "$.message")?;
        Ok(Self {
            message: message.to_string(),
        })
    }
}

impl FromPayload for PurchasesResponse {
    fn from_payload(value: &Value) -> Result<Self, ShapeError> {
        let object = expect_object(value, "$")?;
        let items = expect_array(field(object, "$", "purchases")?, "$.purchases")?;
        let purchases = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                expect_str(item, &format!("$.purchases[{index}]")).map(str::to_string)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { purchases })
    }
}

fn movie_at(value: &Value, path: &str) -> Result<Movie, ShapeError> {
    let object = expect_object(value, path)?;

    let id_path = format!("{path}.id");
    let raw_id = field(object, path, "id")?;
    let id = raw_id.as_i64().ok_or_else(|| ShapeError::Mismatch {
        path: id_path.clone(),
        expected: "integer",
        found: type_name(raw_id),
    })?;

    let title_path = format!("{path}.title");
    let title = expect_str(field(object, path, "title")?, &title_path)?;

    let price_path = format!("{path}.price");
    let raw_price = field(object, path, "price")?;
    let price = raw_price.as_f64().ok_or_else(|| ShapeError::Mismatch {
        path: price_path.clone(),
        expected: "number",
        found: type_name(raw_price),
    })?;

    let id = MovieId::new(id).map_err(|source| ShapeError::InvalidValue {
        path: id_path,
        source,
    })?;
    shared::domain::validate_title(title).map_err(|source| ShapeError::InvalidValue {
        path: title_path,
        source,
    })?;
    let price =
        shared::domain::validate_price(price).map_err(|source| ShapeError::InvalidValue {
            path: price_path,
            source,
        })?;

    Ok(Movie {
        id,
        title: title.to_string(),
        price,
    })
}

fn field<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    name: &str,
) -> Result<&'a Value, ShapeError> {
    object.get(name).ok_or_else(|| ShapeError::MissingField {
        path: format!("{path}.{name}"),
    })
}

fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, ShapeError> {
    value.as_object().ok_or_else(|| ShapeError::Mismatch {
        path: path.to_string(),
        expected: "object",
        found: type_name(value),
    })
}

fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, ShapeError> {
    value.as_array().ok_or_else(|| ShapeError::Mismatch {
        path: path.to_string(),
        expected: "array",
        found: type_name(value),
    })
}

fn expect_str<'a>(value: &'a Value, path: &str) -> Result<&'a str, ShapeError> {
    value.as_str().ok_or_else(|| ShapeError::Mismatch {
        path: path.to_string(),
        expected: "string",
        found: type_name(value),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "tests/response_tests.rs"]
mod tests;
