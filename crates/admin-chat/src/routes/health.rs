//! Health check endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
}

/// Health check endpoint.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assistant_core::{async_trait, Assistant, AssistantError};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::routes::router;
    use crate::state::AppState;

    struct NullAssistant;

    #[async_trait]
    impl Assistant for NullAssistant {
        async fn handle_message(
            &self,
            _message: &str,
        ) -> std::result::Result<String, AssistantError> {
            Ok(String::new())
        }

        fn name(&self) -> &str {
            "NullAssistant"
        }
    }

    #[tokio::test]
    async fn test_health() {
        let app = router().with_state(AppState::new(Arc::new(NullAssistant)));

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
    }
}
