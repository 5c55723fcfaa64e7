//! Best-effort extraction of an analysis and a chart specification from
//! free-form model output.
//!
//! The analysis prompt asks the model to answer in two labeled
//! sections, but the upstream generator is not contractually structured
//! output. This extractor pattern-matches over the raw text and never
//! fails: a missing marker, missing braces or malformed JSON inside the
//! chart block only reduce what is extracted.
//!
//! Failure modes:
//!
//! - no `Chart Configuration:` marker, or no brace-delimited block
//!   after it: the whole (label-stripped, trimmed) response becomes the
//!   analysis and no chart specification is captured
//! - malformed JSON inside the braces: still captured verbatim; the
//!   chart specification is an opaque string, validated by whoever
//!   eventually renders it

/// Marker introducing the chart specification section.
pub const CHART_MARKER: &str = "Chart Configuration:";

/// Label introducing the analysis section, stripped when leading.
const ANALYSIS_LABEL: &str = "Analysis Result:";

/// Result of splitting a raw model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedAnalysis {
    /// Natural-language analysis text, label-stripped and trimmed.
    pub analysis: String,
    /// Candidate chart specification, captured verbatim from the first
    /// `{` after the marker through the last `}` of the response.
    pub chart: Option<String>,
}

/// Split a raw model response into analysis text and an optional chart
/// specification.
pub fn split_response(text: &str) -> ExtractedAnalysis {
    if let Some(marker_pos) = text.find(CHART_MARKER) {
        let after = &text[marker_pos + CHART_MARKER.len()..];

        // Greedy capture: first opening brace through the last closing
        // brace of the remaining text.
        if let Some(open) = after.find('{') {
            if let Some(close) = after.rfind('}') {
                if close >= open {
                    return ExtractedAnalysis {
                        analysis: strip_label(&text[..marker_pos]),
                        chart: Some(after[open..=close].to_string()),
                    };
                }
            }
        }
    }

    ExtractedAnalysis {
        analysis: strip_label(text),
        chart: None,
    }
}

/// Strip a leading analysis label and surrounding whitespace.
fn strip_label(text: &str) -> String {
    let trimmed = text.trim();
    trimmed
        .strip_prefix(ANALYSIS_LABEL)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_section_response() {
        let raw = "Analysis Result:\nRevenue grew steadily.\n\nChart Configuration:\n{\"type\":\"bar\",\"labels\":[\"Jul\",\"Aug\"]}";
        let extracted = split_response(raw);

        assert_eq!(extracted.analysis, "Revenue grew steadily.");
        assert_eq!(
            extracted.chart.as_deref(),
            Some("{\"type\":\"bar\",\"labels\":[\"Jul\",\"Aug\"]}")
        );
    }

    #[test]
    fn test_no_marker_keeps_full_response() {
        let raw = "  The data shows a clear upward trend.  ";
        let extracted = split_response(raw);

        assert_eq!(extracted.analysis, "The data shows a clear upward trend.");
        assert!(extracted.chart.is_none());
    }

    #[test]
    fn test_no_marker_strips_leading_label() {
        let raw = "Analysis Result:\nJust the analysis.";
        let extracted = split_response(raw);

        assert_eq!(extracted.analysis, "Just the analysis.");
        assert!(extracted.chart.is_none());
    }

    #[test]
    fn test_marker_without_braces_is_analysis_only() {
        let raw = "Analysis Result:\nNumbers look flat.\n\nChart Configuration:\nnone applicable";
        let extracted = split_response(raw);

        // The whole response (minus the leading label) is kept.
        assert!(extracted.chart.is_none());
        assert!(extracted.analysis.contains("Numbers look flat."));
        assert!(extracted.analysis.contains("none applicable"));
    }

    #[test]
    fn test_malformed_json_still_captured_verbatim() {
        let raw = "Chart Configuration:\n{not json at all}";
        let extracted = split_response(raw);

        assert_eq!(extracted.chart.as_deref(), Some("{not json at all}"));
    }

    #[test]
    fn test_greedy_capture_spans_nested_braces() {
        let raw = "Analysis Result:\nX\n\nChart Configuration:\n{\"datasets\":[{\"data\":[1,2]}]}";
        let extracted = split_response(raw);

        assert_eq!(extracted.analysis, "X");
        assert_eq!(
            extracted.chart.as_deref(),
            Some("{\"datasets\":[{\"data\":[1,2]}]}")
        );
    }

    #[test]
    fn test_prose_after_chart_block_included_by_greedy_match() {
        // The capture runs to the last closing brace, so trailing prose
        // without braces is excluded but an extra brace extends it.
        let raw = "Chart Configuration: {\"a\":1} trailing note";
        let extracted = split_response(raw);

        assert_eq!(extracted.chart.as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_empty_response() {
        let extracted = split_response("");
        assert_eq!(extracted.analysis, "");
        assert!(extracted.chart.is_none());
    }
}
