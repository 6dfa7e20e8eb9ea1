//! Occupancy insights tool.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::client::BookingApi;
use crate::error::ToolError;
use crate::tool::{ArgKind, ArgSpec, Tool, ToolArgs, ToolOutput};

const ARGS: &[ArgSpec] = &[
    ArgSpec::required("start_date", ArgKind::Str),
    ArgSpec::required("end_date", ArgKind::Str),
];

/// Calculates occupancy for a date range.
pub struct CalculateOccupancy {
    api: BookingApi,
}

impl CalculateOccupancy {
    /// Create the tool over a booking API client.
    pub fn new(api: BookingApi) -> Self {
        Self { api }
    }

    async fn fetch(&self, start: &str, end: &str) -> Result<String, ToolError> {
        let query = [
            ("startDate", start.to_string()),
            ("endDate", end.to_string()),
        ];

        let payload = self.api.get_json("/api/calendar/occupancy", &query).await?;

        Ok(format!(
            "Occupancy Insights: {}",
            serde_json::to_string_pretty(&payload)?
        ))
    }
}

#[async_trait]
impl Tool for CalculateOccupancy {
    fn name(&self) -> &str {
        "calculate_occupancy"
    }

    fn description(&self) -> &str {
        "Calculates occupancy rates for a date range."
    }

    fn arguments(&self) -> &'static [ArgSpec] {
        ARGS
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let start = args.require("start_date")?;
        let end = args.require("end_date")?;

        debug!("Calculating occupancy ({} to {})", start, end);

        match self.fetch(start, end).await {
            Ok(summary) => Ok(ToolOutput::success(summary)),
            Err(e) => {
                warn!("Occupancy fetch failed: {}", e);
                Ok(ToolOutput::failure(format!(
                    "Error calculating occupancy: {}",
                    e
                )))
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

    #[tokio::test]
    async fn test_occupancy_success() {
        let router = Router::new().route(
            "/api/calendar/occupancy",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({
                    "occupancyRate": 0.82,
                    "startDate": params.get("startDate"),
                    "endDate": params.get("endDate"),
                }))
            }),
        );
        let base = serve(router).await;
        let tool = CalculateOccupancy::new(BookingApi::new(base).unwrap());

        let result = tool
            .execute(ToolArgs::parse(
                "start_date='2025-02-01', end_date='2025-02-28'",
            ))
            .await
            .unwrap();

        assert!(result.success);
        assert!(result.content.starts_with("Occupancy Insights:"));
        assert!(result.content.contains("\"startDate\": \"2025-02-01\""));
    }

    #[tokio::test]
    async fn test_missing_range_is_argument_error() {
        let tool = CalculateOccupancy::new(BookingApi::new("http://127.0.0.1:1").unwrap());

        let result = tool.execute(ToolArgs::parse("start_date='2025-02-01'")).await;
        assert!(matches!(result, Err(ToolError::MissingArgument(name)) if name == "end_date"));
    }

    #[tokio::test]
    async fn test_api_failure_is_labelled() {
        let tool = CalculateOccupancy::new(BookingApi::new("http://127.0.0.1:1").unwrap());

        let result = tool
            .execute(ToolArgs::parse("start_date=a, end_date=b"))
            .await
            .unwrap();
        assert!(!result.success);
        assert!(result.content.starts_with("Error calculating occupancy:"));
    }
}
