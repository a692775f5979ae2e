//! The curated report: parse target for the agent's JSON output.
//!
//! `title` and `link` are required on every item; every other field defaults
//! to the empty string when the model omits it. Parsing performs no schema
//! validation or repair beyond deserialization - a malformed payload is the
//! caller's error to surface.

use serde::Deserialize;

/// An enriched tech item.
#[derive(Debug, Clone, Deserialize)]
pub struct TechItem {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub link: String,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub related_developments: String,
}

/// An enriched world/Indian politics item.
#[derive(Debug, Clone, Deserialize)]
pub struct PoliticalItem {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub link: String,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub key_players: String,
    #[serde(default)]
    pub connections: String,
    #[serde(default)]
    pub impact_analysis: String,
    #[serde(default)]
    pub complete_picture: String,
}

/// An enriched business/market item.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessItem {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub link: String,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub what_it_is: String,
    #[serde(default)]
    pub why_it_matters: String,
    #[serde(default)]
    pub impact_analysis: String,
    #[serde(default)]
    pub market_context: String,
    #[serde(default)]
    pub investor_perspective: String,
}

/// The full curated report for one digest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub global_enterprise_tech: Vec<TechItem>,
    #[serde(default)]
    pub world_politics: Vec<PoliticalItem>,
    #[serde(default)]
    pub indian_politics: Vec<PoliticalItem>,
    #[serde(default)]
    pub business_market: Vec<BusinessItem>,
    #[serde(default)]
    pub generated_at: String,
}

impl Report {
    /// Parse the model's raw output, tolerating an optional code fence.
    pub fn from_model_output(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(strip_code_fence(raw))
    }
}

/// Strip one optional leading code fence (with or without a language tag)
/// and its closing fence. Unfenced input passes through untouched.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let body = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed;
    };

    match body.find("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "global_enterprise_tech": [{
            "title": "Chips", "summary": "s", "link": "https://t.example/1",
            "published": "Mon, 04 Aug 2025", "context": "c", "related_developments": "r"
        }],
        "world_politics": [{"title": "Summit", "link": "https://w.example/1"}],
        "indian_politics": [],
        "business_market": [{
            "title": "Merger", "link": "https://b.example/1",
            "what_it_is": "w", "why_it_matters": "y"
        }],
        "generated_at": "2025-08-04T09:00:00Z"
    }"#;

    #[test]
    fn fenced_and_raw_inputs_parse_identically() {
        let raw = Report::from_model_output(PAYLOAD).unwrap();
        let tagged = Report::from_model_output(&format!("```json\n{PAYLOAD}\n```")).unwrap();
        let bare = Report::from_model_output(&format!("```\n{PAYLOAD}\n```")).unwrap();

        for report in [&raw, &tagged, &bare] {
            assert_eq!(report.global_enterprise_tech.len(), 1);
            assert_eq!(report.global_enterprise_tech[0].title, "Chips");
            assert_eq!(report.generated_at, "2025-08-04T09:00:00Z");
        }
    }

    #[test]
    fn strip_ignores_unfenced_input() {
        assert_eq!(strip_code_fence("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn strip_handles_missing_closing_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let report = Report::from_model_output(PAYLOAD).unwrap();
        let item = &report.world_politics[0];
        assert_eq!(item.background, "");
        assert_eq!(item.key_players, "");
        assert_eq!(item.complete_picture, "");
        assert_eq!(report.business_market[0].market_context, "");
    }

    #[test]
    fn missing_required_fields_fail_parse() {
        let missing_link = r#"{"world_politics": [{"title": "No link"}]}"#;
        assert!(Report::from_model_output(missing_link).is_err());
    }

    #[test]
    fn missing_categories_default_to_empty_arrays() {
        let report = Report::from_model_output("{}").unwrap();
        assert!(report.global_enterprise_tech.is_empty());
        assert!(report.business_market.is_empty());
        assert_eq!(report.generated_at, "");
    }
}
