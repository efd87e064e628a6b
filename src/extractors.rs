//! Custom axum extractors
//!
//! Wraps the stock `Json` and `Path` extractors so malformed input is
//! rejected with the same JSON error body the rest of the API produces,
//! instead of axum's plain-text defaults. A bad body or path id therefore
//! becomes a 400 before any statement reaches the store.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// JSON body extractor that rejects with 400 and a JSON error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Path extractor that rejects with 400 and a JSON error body
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::routing::{get, post};
    use axum::Router;
    use tower::ServiceExt;

    use crate::models::CreateTodoRequest;

    async fn echo_title(Json(payload): Json<CreateTodoRequest>) -> Json<Option<String>> {
        Json(payload.title)
    }

    async fn echo_id(Path(id): Path<i32>) -> Json<i32> {
        Json(id)
    }

    fn test_router() -> Router {
        Router::new()
            .route("/echo", post(echo_title))
            .route("/items/{id}", get(echo_id))
    }

    #[tokio::test]
    async fn malformed_json_body_is_400_with_json_error() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/echo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn wrong_field_type_is_400() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/echo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"title": 5}"#))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_integer_path_id_is_400() {
        let request = Request::builder()
            .uri("/items/abc")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn valid_body_passes_through() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/echo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"title": "Buy milk"}"#))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#""Buy milk""#);
    }
}
