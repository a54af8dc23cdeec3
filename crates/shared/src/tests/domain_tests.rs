use super::*;

#[test]
fn ids_below_one_are_rejected() {
    assert_eq!(MovieId::new(1).expect("valid"), MovieId(1));
    assert!(matches!(
        MovieId::new(0),
        Err(DomainError::NonPositiveId {
            kind: "movie id",
            value: 0
        })
    ));
    assert!(UserId::new(-4).is_err());
}

#[test]
fn blank_titles_are_rejected() {
    assert_eq!(validate_title("Arrival"), Ok("Arrival"));
    assert_eq!(validate_title(""), Err(DomainError::EmptyTitle));
    assert_eq!(validate_title("   "), Err(DomainError::EmptyTitle));
}

#[test]
fn price_rejects_non_finite_values() {
    assert!(validate_price(f64::NAN).is_err());
    assert!(validate_price(f64::INFINITY).is_err());
    assert_eq!(validate_price(9.99).expect("valid"), 9.99);
}

#[test]
fn ids_serialize_as_bare_integers() {
    let movie = Movie {
        id: MovieId(7),
        title: "Dune".into(),
        price: 9.99,
    };
    let json = serde_json::to_value(&movie).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({"id": 7, "title": "Dune", "price": 9.99})
    );
}
