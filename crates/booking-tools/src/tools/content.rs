//! Website content block tools.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::BookingApi;
use crate::error::ToolError;
use crate::tool::{ArgKind, ArgSpec, Tool, ToolArgs, ToolOutput};

/// Fetches every website content block.
pub struct GetContentBlocks {
    api: BookingApi,
}

impl GetContentBlocks {
    /// Create the tool over a booking API client.
    pub fn new(api: BookingApi) -> Self {
        Self { api }
    }

    async fn fetch(&self) -> Result<String, ToolError> {
        let payload = self.api.get_json("/api/content", &[]).await?;

        Ok(format!(
            "Content Blocks: {}",
            serde_json::to_string_pretty(&payload)?
        ))
    }
}

#[async_trait]
impl Tool for GetContentBlocks {
    fn name(&self) -> &str {
        "get_content_blocks"
    }

    fn description(&self) -> &str {
        "Fetches the website's content blocks."
    }

    fn arguments(&self) -> &'static [ArgSpec] {
        &[]
    }

    async fn execute(&self, _args: ToolArgs) -> Result<ToolOutput, ToolError> {
        debug!("Fetching content blocks");

        match self.fetch().await {
            Ok(summary) => Ok(ToolOutput::success(summary)),
            Err(e) => {
                warn!("Content fetch failed: {}", e);
                Ok(ToolOutput::failure(format!("Error fetching content: {}", e)))
            }
        }
    }
}

const UPDATE_ARGS: &[ArgSpec] = &[
    ArgSpec::required("id", ArgKind::Str),
    ArgSpec::required("data", ArgKind::Object),
];

/// Updates a single website content block.
pub struct UpdateContentBlock {
    api: BookingApi,
}

impl UpdateContentBlock {
    /// Create the tool over a booking API client.
    pub fn new(api: BookingApi) -> Self {
        Self { api }
    }

    async fn update(&self, id: &str, data: Value) -> Result<(), ToolError> {
        self.api
            .put_json(&format!("/api/content/{}", id), &data)
            .await
    }
}

#[async_trait]
impl Tool for UpdateContentBlock {
    fn name(&self) -> &str {
        "update_content_block"
    }

    fn description(&self) -> &str {
        "Updates one website content block with a JSON object of fields."
    }

    fn arguments(&self) -> &'static [ArgSpec] {
        UPDATE_ARGS
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let id = args.require("id")?.to_string();
        let data = Value::Object(args.require_object("data")?);

        debug!("Updating content block '{}'", id);

        match self.update(&id, data).await {
            Ok(()) => Ok(ToolOutput::success(format!("Updated content block {}", id))),
            Err(e) => {
                warn!("Content update failed: {}", e);
                Ok(ToolOutput::failure(format!("Error updating content: {}", e)))
            }
        }
    }
}
