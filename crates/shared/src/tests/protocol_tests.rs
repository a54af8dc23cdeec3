use super::*;
use serde_json::json;

#[test]
fn purchase_request_uses_snake_case_wire_names() {
    let body = PurchaseRequest {
        movie_id: MovieId(5),
        user_id: UserId(123),
    };
    assert_eq!(
        serde_json::to_value(&body).expect("serialize"),
        json!({"movie_id": 5, "user_id": 123})
    );
}

#[test]
fn feedback_request_keeps_empty_comment() {
    let body = FeedbackRequest {
        movie_id: MovieId(2),
        comment: String::new(),
    };
    assert_eq!(
        serde_json::to_value(&body).expect("serialize"),
        json!({"movie_id": 2, "comment": ""})
    );
}

#[test]
fn new_movie_request_matches_admin_payload() {
    let body = NewMovieRequest {
        title: "Dune".into(),
        price: 9.99,
    };
    assert_eq!(
        serde_json::to_value(&body).expect("serialize"),
        json!({"title": "Dune", "price": 9.99})
    );
}
