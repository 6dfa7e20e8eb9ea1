//! Booking listing tool.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::client::BookingApi;
use crate::error::ToolError;
use crate::tool::{ArgKind, ArgSpec, Tool, ToolArgs, ToolOutput};

/// Number of bookings returned when no limit is given.
const DEFAULT_LIMIT: u32 = 50;

const ARGS: &[ArgSpec] = &[
    ArgSpec::optional("status", ArgKind::Str),
    ArgSpec::optional("limit", ArgKind::Int),
];

/// Fetches recent bookings, optionally filtered by status.
pub struct GetBookings {
    api: BookingApi,
}

impl GetBookings {
    /// Create the tool over a booking API client.
    pub fn new(api: BookingApi) -> Self {
        Self { api }
    }

    async fn fetch(&self, status: Option<&str>, limit: u32) -> Result<String, ToolError> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(status) = status {
            query.push(("status", status.to_string()));
        }

        let payload = self.api.get_json("/api/bookings", &query).await?;
        let count = payload.as_array().map(|bookings| bookings.len()).ok_or_else(|| {
            ToolError::ExecutionFailed(
                "unexpected response shape: expected a JSON array".to_string(),
            )
        })?;

        Ok(format!(
            "Retrieved {} bookings: {}",
            count,
            serde_json::to_string_pretty(&payload)?
        ))
    }
}

#[async_trait]
impl Tool for GetBookings {
    fn name(&self) -> &str {
        "get_bookings"
    }

    fn description(&self) -> &str {
        "Fetches recent bookings from the booking system, optionally filtered by status."
    }

    fn arguments(&self) -> &'static [ArgSpec] {
        ARGS
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let status = args.get("status").map(|s| s.to_string());
        let limit = args.get_u32("limit")?.unwrap_or(DEFAULT_LIMIT);

        debug!("Fetching bookings (status: {:?}, limit: {})", status, limit);

        match self.fetch(status.as_deref(), limit).await {
            Ok(summary) => Ok(ToolOutput::success(summary)),
            Err(e) => {
                warn!("Booking fetch failed: {}", e);
                Ok(ToolOutput::failure(format!("Error fetching bookings: {}", e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn bookings_route() -> Router {
        Router::new().route(
            "/api/bookings",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                // Echo the received params inside each booking for assertions
                let limit = params.get("limit").cloned().unwrap_or_default();
                let status = params.get("status").cloned();
                Json(json!([
                    { "id": "b1", "limit": limit, "status": status },
                    { "id": "b2" }
                ]))
            }),
        )
    }

    #[tokio::test]
    async fn test_success_string_counts_bookings() {
        let base = serve(bookings_route()).await;
        let tool = GetBookings::new(BookingApi::new(base).unwrap());

        let result = tool.execute(ToolArgs::parse("limit=5")).await.unwrap();
        assert!(result.success);
        assert!(result.content.starts_with("Retrieved 2 bookings:"));
        assert!(result.content.contains("\"limit\": \"5\""));
    }

    #[tokio::test]
    async fn test_default_limit_sent_when_absent() {
        let base = serve(bookings_route()).await;
        let tool = GetBookings::new(BookingApi::new(base).unwrap());

        let result = tool.execute(ToolArgs::parse("")).await.unwrap();
        assert!(result.success);
        assert!(result.content.contains("\"limit\": \"50\""));
    }

    #[tokio::test]
    async fn test_status_filter_forwarded() {
        let base = serve(bookings_route()).await;
        let tool = GetBookings::new(BookingApi::new(base).unwrap());

        let result = tool
            .execute(ToolArgs::parse("status='paid'"))
            .await
            .unwrap();
        assert!(result.content.contains("\"status\": \"paid\""));
    }

    #[tokio::test]
    async fn test_non_array_body_is_labelled_failure() {
        let router = Router::new().route(
            "/api/bookings",
            get(|| async { Json(json!({ "unexpected": true })) }),
        );
        let base = serve(router).await;
        let tool = GetBookings::new(BookingApi::new(base).unwrap());

        let result = tool.execute(ToolArgs::parse("")).await.unwrap();
        assert!(!result.success);
        assert!(result.content.starts_with("Error fetching bookings:"));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_labelled_failure() {
        let tool = GetBookings::new(BookingApi::new("http://127.0.0.1:1").unwrap());

        let result = tool.execute(ToolArgs::parse("")).await.unwrap();
        assert!(!result.success);
        assert!(result.content.starts_with("Error fetching bookings:"));
    }
}
