//! Executes detected tool calls and splices results into the reply.

use regex::Regex;
use tracing::{debug, warn};

use crate::error::ToolError;
use crate::registry::ToolRegistry;
use crate::scan::{call_pattern, scan_calls};
use crate::tool::ToolArgs;

/// Runs the tool calls found in a model reply and substitutes their
/// results.
///
/// Substitution is span-based: each detected occurrence is executed and
/// replaced exactly once, left to right, and text between calls is copied
/// through untouched.
pub struct ToolSplicer {
    registry: ToolRegistry,
    pattern: Regex,
}

impl ToolSplicer {
    /// Build a splicer over the given registry.
    ///
    /// The scan pattern is compiled once from the registry's tool names.
    pub fn new(registry: ToolRegistry) -> Result<Self, ToolError> {
        let pattern = call_pattern(&registry.list_tools())?;
        Ok(Self { registry, pattern })
    }

    /// The registry this splicer dispatches to.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Execute every call in `text` and return the reply with results
    /// spliced in. Text without calls is returned unchanged.
    pub async fn process(&self, text: &str) -> String {
        let calls = scan_calls(&self.pattern, text);
        if calls.is_empty() {
            return text.to_string();
        }

        debug!("Found {} tool call(s) in reply", calls.len());

        let mut spliced = String::with_capacity(text.len());
        let mut last_end = 0;

        for call in calls {
            let args = ToolArgs::parse(&call.raw_args);
            let result = match self.registry.execute(&call.name, args).await {
                Ok(output) => output.content,
                Err(e) => {
                    warn!("Tool '{}' rejected the call: {}", call.name, e);
                    format!("Error executing {}: {}", call.name, e)
                }
            };

            spliced.push_str(&text[last_end..call.start]);
            spliced.push_str("\n\n");
            spliced.push_str(&result);
            spliced.push_str("\n\n");
            last_end = call.end;
        }

        spliced.push_str(&text[last_end..]);
        spliced
    }
}
