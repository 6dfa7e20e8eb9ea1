//! Tool trait definition, argument parsing, and argument schemas.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ToolError;

/// Expected type for a declared tool argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Free-form string, passed through as-is.
    Str,
    /// Unsigned integer.
    Int,
    /// JSON object literal.
    Object,
}

/// One argument in a tool's declared schema.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    /// Argument name as written in a call.
    pub name: &'static str,
    /// Expected value type.
    pub kind: ArgKind,
    /// Whether the argument must be present.
    pub required: bool,
}

impl ArgSpec {
    /// Declare a required argument.
    pub const fn required(name: &'static str, kind: ArgKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// Declare an optional argument.
    pub const fn optional(name: &'static str, kind: ArgKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Arguments passed to a tool, parsed from the textual call syntax.
///
/// Every value arrives as a string; the typed getters coerce on access.
/// Insertion order is preserved so validation reports the first offending
/// argument as written.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    values: IndexMap<String, String>,
}

impl ToolArgs {
    /// Create arguments from already-parsed key-value pairs.
    pub fn new(values: IndexMap<String, String>) -> Self {
        Self { values }
    }

    /// Parse the raw text between a call's parentheses.
    ///
    /// Fields are comma-separated `name=value` pairs. Whitespace around
    /// names and values is trimmed, and one layer of quoting (single or
    /// double, each side independently) is stripped from the value. Fields
    /// without `=` are dropped silently. Commas and `=` inside quoted
    /// values are not supported.
    pub fn parse(raw: &str) -> Self {
        let mut values = IndexMap::new();

        for field in raw.split(',') {
            if let Some((key, value)) = field.split_once('=') {
                values.insert(key.trim().to_string(), unquote(value.trim()).to_string());
            }
        }

        Self { values }
    }

    /// Number of parsed arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up an argument's raw string value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|value| value.as_str())
    }

    /// Get a required string argument.
    pub fn require(&self, key: &str) -> Result<&str, ToolError> {
        self.get(key)
            .ok_or_else(|| ToolError::MissingArgument(key.to_string()))
    }

    /// Get an optional integer argument, coercing from its string form.
    pub fn get_u32(&self, key: &str) -> Result<Option<u32>, ToolError> {
        match self.get(key) {
            Some(raw) => {
                let value = raw.parse().map_err(|_| ToolError::InvalidArgument {
                    name: key.to_string(),
                    reason: format!("expected an integer, got '{}'", raw),
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Get a required JSON object argument, coercing from its string form.
    pub fn require_object(&self, key: &str) -> Result<Map<String, Value>, ToolError> {
        let raw = self.require(key)?;
        let invalid = || ToolError::InvalidArgument {
            name: key.to_string(),
            reason: "expected a JSON object".to_string(),
        };

        match serde_json::from_str(raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(invalid()),
            Err(_) => Err(invalid()),
        }
    }

    /// Check the parsed arguments against a tool's declared schema.
    ///
    /// Rejects unknown names, missing required arguments, and values that
    /// do not coerce to the declared kind.
    pub fn validate(&self, specs: &[ArgSpec]) -> Result<(), ToolError> {
        for name in self.values.keys() {
            if !specs.iter().any(|spec| spec.name == name.as_str()) {
                return Err(ToolError::UnexpectedArgument(name.clone()));
            }
        }

        for spec in specs {
            if self.get(spec.name).is_none() {
                if spec.required {
                    return Err(ToolError::MissingArgument(spec.name.to_string()));
                }
                continue;
            }

            match spec.kind {
                ArgKind::Str => {}
                ArgKind::Int => {
                    self.get_u32(spec.name)?;
                }
                ArgKind::Object => {
                    self.require_object(spec.name)?;
                }
            }
        }

        Ok(())
    }
}

/// Strip one layer of quoting from a value.
///
/// The quote characters do not need to match; each side is stripped
/// independently.
fn unquote(value: &str) -> &str {
    let value = value
        .strip_prefix('"')
        .or_else(|| value.strip_prefix('\''))
        .unwrap_or(value);
    value
        .strip_suffix('"')
        .or_else(|| value.strip_suffix('\''))
        .unwrap_or(value)
}

/// Output from a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// The text spliced into the reply.
    pub content: String,
    /// Whether the execution was successful.
    pub success: bool,
}

impl ToolOutput {
    /// Create a successful output.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed output.
    pub fn failure(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            success: false,
        }
    }
}

/// Trait for data tools callable from a model reply.
///
/// External failures (network, API status, payload shape) are reported as a
/// failure [`ToolOutput`] whose content is the user-facing error line;
/// `Err` is reserved for argument problems surfaced before or during
/// execution.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for scanning and dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Declared argument schema, validated before execution.
    fn arguments(&self) -> &'static [ArgSpec];

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}
