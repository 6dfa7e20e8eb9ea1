//! Detection of textual tool calls in a model reply.
//!
//! The model is instructed to write calls like `get_bookings(limit=5)`
//! directly in its reply. One pattern covering every registered tool name
//! is run once, left to right, so matches come back in order with
//! non-overlapping spans.

use regex::Regex;

use crate::error::ToolError;

/// A tool call found in a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedCall {
    /// The tool name as matched.
    pub name: String,
    /// The raw text between the parentheses.
    pub raw_args: String,
    /// Byte offset of the start of the full match.
    pub start: usize,
    /// Byte offset one past the end of the full match.
    pub end: usize,
}

/// Compile the scan pattern for a set of tool names.
///
/// Matches `name(args)` where `name` is one of the given names on an
/// identifier boundary, the opening parenthesis follows immediately, and
/// `args` is the shortest run of any characters (newlines included) up to
/// the next closing parenthesis. Calls nested inside another call's
/// argument text are consumed by the outer span and not detected.
pub fn call_pattern(names: &[&str]) -> Result<Regex, ToolError> {
    if names.is_empty() {
        return Err(ToolError::ExecutionFailed(
            "no tool names to scan for".to_string(),
        ));
    }

    let alternation = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(r"\b({})\(((?s:.*?))\)", alternation);

    Regex::new(&pattern)
        .map_err(|e| ToolError::ExecutionFailed(format!("invalid scan pattern: {}", e)))
}

/// Scan `text` for calls to any of the pattern's tool names.
pub fn scan_calls(pattern: &Regex, text: &str) -> Vec<DetectedCall> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| {
            let full = caps.get(0)?;
            let name = caps.get(1)?;
            let raw_args = caps.get(2)?;
            Some(DetectedCall {
                name: name.as_str().to_string(),
                raw_args: raw_args.as_str().to_string(),
                start: full.start(),
                end: full.end(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &[
        "get_bookings",
        "generate_booking_report",
        "calculate_occupancy",
        "get_content_blocks",
        "update_content_block",
    ];

    fn scan(text: &str) -> Vec<DetectedCall> {
        let pattern = call_pattern(NAMES).unwrap();
        scan_calls(&pattern, text)
    }

    #[test]
    fn test_detects_call_with_arguments() {
        let text = "Sure: get_bookings(status='paid', limit=10) as requested.";
        let calls = scan(text);

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "get_bookings");
        assert_eq!(calls[0].raw_args, "status='paid', limit=10");
        assert_eq!(
            &text[calls[0].start..calls[0].end],
            "get_bookings(status='paid', limit=10)"
        );
    }

    #[test]
    fn test_detects_zero_argument_call() {
        let calls = scan("Current content: get_content_blocks()");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "get_content_blocks");
        assert_eq!(calls[0].raw_args, "");
    }

    #[test]
    fn test_no_calls_in_plain_text() {
        assert!(scan("Bookings are looking healthy this month.").is_empty());
    }

    #[test]
    fn test_multiple_calls_in_order_with_disjoint_spans() {
        let text = "a get_content_blocks() b calculate_occupancy(start_date=x, end_date=y) c";
        let calls = scan(text);

        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].name, "get_content_blocks");
        assert_eq!(calls[1].name, "calculate_occupancy");
        assert!(calls[0].end <= calls[1].start);
    }

    #[test]
    fn test_arguments_may_span_newlines() {
        let text = "get_bookings(status='paid',\n  limit=3)";
        let calls = scan(text);

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].raw_args, "status='paid',\n  limit=3");
    }

    #[test]
    fn test_repeated_identical_call_yields_two_spans() {
        let text = "get_content_blocks() and again get_content_blocks()";
        let calls = scan(text);

        assert_eq!(calls.len(), 2);
        assert_ne!(calls[0].start, calls[1].start);
        assert_eq!(calls[0].raw_args, calls[1].raw_args);
    }

    #[test]
    fn test_identifier_boundary_is_respected() {
        // A longer identifier containing a tool name is not a call
        assert!(scan("my_get_bookings(limit=1)").is_empty());
        assert!(scan("xget_bookings(limit=1)").is_empty());
    }

    #[test]
    fn test_name_without_parenthesis_is_not_a_call() {
        assert!(scan("Use get_bookings to see bookings.").is_empty());
        assert!(scan("get_bookings (limit=1)").is_empty());
    }

    #[test]
    fn test_lazy_capture_stops_at_first_close() {
        let calls = scan("get_bookings(limit=1) tail) text");
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].raw_args, "limit=1");
    }

    #[test]
    fn test_unclosed_call_is_not_detected() {
        assert!(scan("get_bookings(limit=1").is_empty());
    }

    #[test]
    fn test_empty_name_list_is_rejected() {
        assert!(call_pattern(&[]).is_err());
    }
}
