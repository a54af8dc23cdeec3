use super::*;
use crate::{response::ShapeError, test_support::CapturedEvents};
use tracing::Level;

#[test]
fn http_status_report_keeps_code_and_body() {
    let report = report_failure(
        Operation::GetMovie,
        ClientError::HttpStatus {
            url: "http://localhost:8000/movies/9".into(),
            status: 404,
            body: r#"{"detail":"Movie not found"}"#.into(),
        },
    );

    assert_eq!(report.user_message, "Movie not found");
    assert_eq!(report.kind(), FailureKind::HttpStatus);
    assert_eq!(report.status(), Some(404));
    assert_eq!(report.record.operation, Operation::GetMovie);
    assert!(report.record.detail.contains("HTTP 404"));
    assert!(report.record.detail.contains("Movie not found"));
}

#[test]
fn shape_report_names_the_field() {
    let report = report_failure(
        Operation::SubmitFeedback,
        ClientError::Shape(ShapeError::MissingField {
            path: "$.message".into(),
        }),
    );

    assert_eq!(report.user_message, "Error submitting feedback");
    assert_eq!(report.kind(), FailureKind::Shape);
    assert_eq!(report.status(), None);
    assert!(report.record.detail.contains("$.message"));
}

#[test]
fn every_operation_has_its_own_message() {
    let mut messages: Vec<_> = Operation::ALL
        .iter()
        .map(|operation| operation.failure_message())
        .collect();
    messages.sort_unstable();
    messages.dedup();
    assert_eq!(messages.len(), Operation::ALL.len());
}

#[test]
fn each_report_logs_one_error_record() {
    let (events, _guard) = CapturedEvents::install();

    report_failure(
        Operation::GetMovie,
        ClientError::HttpStatus {
            url: "http://localhost:8000/movies/9".into(),
            status: 404,
            body: String::new(),
        },
    );
    report_failure(
        Operation::ListPurchases,
        ClientError::Connection {
            url: "http://localhost:8000/purchases/123".into(),
            detail: "connection refused".into(),
        },
    );

    let failures = events.with_message("catalog operation failed");
    assert_eq!(failures.len(), 2);
    assert!(failures.iter().all(|event| event.level == Level::ERROR));
    assert_eq!(failures[0].field("operation"), Some("get_movie"));
    assert_eq!(failures[0].field("kind"), Some("http_status"));
    assert!(failures[0]
        .field("detail")
        .is_some_and(|detail| detail.contains("HTTP 404")));
    assert_eq!(failures[1].field("operation"), Some("list_purchases"));
    assert_eq!(failures[1].field("kind"), Some("connection"));
}
