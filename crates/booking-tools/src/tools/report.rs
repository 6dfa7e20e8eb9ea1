//! Booking report tool.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::client::BookingApi;
use crate::error::ToolError;
use crate::tool::{ArgKind, ArgSpec, Tool, ToolArgs, ToolOutput};

const ARGS: &[ArgSpec] = &[
    ArgSpec::optional("start_date", ArgKind::Str),
    ArgSpec::optional("end_date", ArgKind::Str),
];

/// Generates a booking and revenue report, optionally scoped to a date
/// range.
pub struct BookingReport {
    api: BookingApi,
}

impl BookingReport {
    /// Create the tool over a booking API client.
    pub fn new(api: BookingApi) -> Self {
        Self { api }
    }

    async fn fetch(&self, start: Option<&str>, end: Option<&str>) -> Result<String, ToolError> {
        let mut query = Vec::new();
        if let Some(start) = start {
            query.push(("startDate", start.to_string()));
        }
        if let Some(end) = end {
            query.push(("endDate", end.to_string()));
        }

        let payload = self.api.get_json("/api/bookings/report", &query).await?;

        Ok(format!(
            "Booking Report: {}",
            serde_json::to_string_pretty(&payload)?
        ))
    }
}

#[async_trait]
impl Tool for BookingReport {
    fn name(&self) -> &str {
        "generate_booking_report"
    }

    fn description(&self) -> &str {
        "Generates a booking and revenue report, optionally for a date range."
    }

    fn arguments(&self) -> &'static [ArgSpec] {
        ARGS
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let start = args.get("start_date");
        let end = args.get("end_date");

        debug!("Generating booking report ({:?} to {:?})", start, end);

        match self.fetch(start, end).await {
            Ok(summary) => Ok(ToolOutput::success(summary)),
            Err(e) => {
                warn!("Report generation failed: {}", e);
                Ok(ToolOutput::failure(format!("Error generating report: {}", e)))
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

    fn report_route() -> Router {
        Router::new().route(
            "/api/bookings/report",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({
                    "totalRevenue": 1234,
                    "startDate": params.get("startDate"),
                    "endDate": params.get("endDate"),
                }))
            }),
        )
    }

    #[tokio::test]
    async fn test_report_with_camel_case_range_params() {
        let base = serve(report_route()).await;
        let tool = BookingReport::new(BookingApi::new(base).unwrap());

        let result = tool
            .execute(ToolArgs::parse(
                "start_date='2025-01-01', end_date='2025-01-31'",
            ))
            .await
            .unwrap();

        assert!(result.success);
        assert!(result.content.starts_with("Booking Report:"));
        assert!(result.content.contains("\"startDate\": \"2025-01-01\""));
        assert!(result.content.contains("\"endDate\": \"2025-01-31\""));
    }

    #[tokio::test]
    async fn test_report_without_range() {
        let base = serve(report_route()).await;
        let tool = BookingReport::new(BookingApi::new(base).unwrap());

        let result = tool.execute(ToolArgs::parse("")).await.unwrap();
        assert!(result.success);
        assert!(result.content.contains("\"startDate\": null"));
    }

    #[tokio::test]
    async fn test_error_status_is_labelled_failure() {
        let router = Router::new().route(
            "/api/bookings/report",
            get(|| async { axum::http::StatusCode::BAD_GATEWAY }),
        );
        let base = serve(router).await;
        let tool = BookingReport::new(BookingApi::new(base).unwrap());

        let result = tool.execute(ToolArgs::parse("")).await.unwrap();
        assert!(!result.success);
        assert!(result.content.starts_with("Error generating report:"));
        assert!(result.content.contains("502"));
    }
}
