//! Route table for the Person resource

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application router.
///
/// Collection operations hang off `/person`, item operations off
/// `/person/{id}`. Unknown paths and methods fall through to axum's built-in
/// 404/405 responses.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/person", get(handlers::find_all).post(handlers::create))
        .route(
            "/person/{id}",
            get(handlers::find_by_id)
                .put(handlers::update)
                .delete(handlers::delete),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::PersonMapper;
    use crate::repository::{Repository, RepositoryResult};
    use crate::ids::PersonId;
    use crate::models::PersonDocument;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct EmptyRepository;

    #[async_trait]
    impl Repository for EmptyRepository {
        async fn find_all(&self) -> RepositoryResult<Vec<PersonDocument>> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: &PersonId) -> RepositoryResult<Option<PersonDocument>> {
            Ok(None)
        }

        async fn create(&self, document: PersonDocument) -> RepositoryResult<PersonDocument> {
            Ok(document)
        }

        async fn update(&self, _document: &PersonDocument) -> RepositoryResult<u64> {
            Ok(0)
        }

        async fn delete(&self, _id: &PersonId) -> RepositoryResult<u64> {
            Ok(0)
        }
    }

    fn app() -> Router {
        router(AppState::new(
            Arc::new(EmptyRepository),
            Arc::new(PersonMapper),
        ))
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_405() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/person")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
