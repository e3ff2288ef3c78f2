use serde::{Deserialize, Serialize};

use crate::TextMetrics;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingElement {
    pub element: String,
    pub suggestion: String,
}

impl MissingElement {
    fn new(element: &str, suggestion: &str) -> Self {
        Self {
            element: element.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    /// The single entry returned when nothing is missing.
    pub fn complete() -> Self {
        Self::new("None", "Your content has all key elements!")
    }

    pub fn is_complete(&self) -> bool {
        self.element == "None"
    }
}

const EMOTIONAL_TRIGGERS: &[&str] = &[
    "secret",
    "warning",
    "mistake",
    "proven",
    "free",
    "exclusive",
    "urgent",
    "shocking",
];

// Matches the letter "i" anywhere, so nearly all English text passes.
const POSITIONING_MARKERS: &[&str] = &["i", "my", "we"];

const CTA_MARKERS: &[&str] = &["follow", "retweet", "reply", "comment", "share", "thread"];
const STORY_MARKERS: &[&str] = &["when i", "i was", "my story"];

struct ElementCheck {
    element: &'static str,
    suggestion: &'static str,
    is_missing: fn(&TextMetrics) -> bool,
}

const CHECKS: &[ElementCheck] = &[
    ElementCheck {
        element: "Stronger Hook",
        suggestion: "Start with a question, bold statement, or surprising fact to grab attention immediately.",
        is_missing: |metrics| metrics.first_line_len() < 30 || !metrics.first_line_has_punch(),
    },
    ElementCheck {
        element: "Emotional Trigger",
        suggestion: "Add words that create curiosity, urgency, or fear of missing out to boost engagement.",
        is_missing: |metrics| !metrics.mentions_any(EMOTIONAL_TRIGGERS),
    },
    ElementCheck {
        element: "Clearer Positioning",
        suggestion: "Add personal experience or credentials to establish authority and relatability.",
        is_missing: |metrics| !metrics.mentions_any(POSITIONING_MARKERS),
    },
    ElementCheck {
        element: "Call to Action",
        suggestion: "End with a clear CTA like \"Follow for more\" or \"RT if this helped\" to drive engagement.",
        is_missing: |metrics| !metrics.mentions_any(CTA_MARKERS),
    },
    ElementCheck {
        element: "Storytelling",
        suggestion: "Weave in a personal anecdote or case study to make the content more relatable and memorable.",
        is_missing: |metrics| !metrics.mentions_any(STORY_MARKERS) && metrics.word_count > 100,
    },
];

/// Gaps in checklist order, or a single [`MissingElement::complete`] entry.
pub fn find_missing_elements(metrics: &TextMetrics) -> Vec<MissingElement> {
    let missing: Vec<MissingElement> = CHECKS
        .iter()
        .filter(|check| (check.is_missing)(metrics))
        .map(|check| MissingElement::new(check.element, check.suggestion))
        .collect();

    if missing.is_empty() {
        vec![MissingElement::complete()]
    } else {
        missing
    }
}
