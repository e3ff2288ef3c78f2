use serde::{Deserialize, Serialize};

use crate::analysis::AiDetection;
use crate::TextMetrics;

pub const MAX_IMPROVEMENTS: usize = 3;

const CTA_MARKERS: &[&str] = &["follow", "retweet", "comment"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    pub title: String,
    pub description: String,
}

impl Improvement {
    fn new(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
        }
    }
}

type ImprovementRule = fn(&TextMetrics, &AiDetection) -> Option<Improvement>;

// Priority order, not severity: hook, structure, specificity, AI language, CTA.
const RULES: &[ImprovementRule] = &[
    hook_improvement,
    structure_improvement,
    specificity_improvement,
    ai_language_improvement,
    cta_improvement,
];

fn hook_improvement(metrics: &TextMetrics, _: &AiDetection) -> Option<Improvement> {
    if metrics.first_line_len() < 40 {
        Some(Improvement::new(
            "Strengthen Your Hook",
            "Your opening line is too short. Expand it to create more intrigue. Try \"The secret to [X] that nobody talks about:\" or \"I made [mistake] so you don't have to:\"",
        ))
    } else if !metrics.first_line_has_punch() {
        Some(Improvement::new(
            "Add Punctuation to Hook",
            "End your hook with a question mark or exclamation to create more energy and engagement.",
        ))
    } else {
        None
    }
}

fn structure_improvement(metrics: &TextMetrics, _: &AiDetection) -> Option<Improvement> {
    (metrics.paragraph_count == 1 && metrics.word_count > 100).then(|| {
        Improvement::new(
            "Break Into Sections",
            "Add line breaks every 2-3 sentences to improve readability and prevent wall-of-text effect.",
        )
    })
}

fn specificity_improvement(metrics: &TextMetrics, _: &AiDetection) -> Option<Improvement> {
    (!metrics.has_digit()).then(|| {
        Improvement::new(
            "Add Specific Numbers",
            "Include specific numbers or stats to increase credibility and engagement. Instead of \"many\", say \"47 projects\" or \"3x returns\".",
        )
    })
}

fn ai_language_improvement(_: &TextMetrics, ai_detection: &AiDetection) -> Option<Improvement> {
    if !ai_detection.confidence.is_flagged() {
        return None;
    }
    let cited = ai_detection
        .detected_phrases
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    Some(Improvement::new(
        "Remove AI-Sounding Phrases",
        format!(
            "Replace corporate jargon with casual Web3 lingo. Detected phrases: {}.",
            cited
        ),
    ))
}

fn cta_improvement(metrics: &TextMetrics, _: &AiDetection) -> Option<Improvement> {
    (!metrics.mentions_any(CTA_MARKERS)).then(|| {
        Improvement::new(
            "Add a Clear Call-to-Action",
            "End with \"Follow me for more Web3 insights\" or \"RT if this helped you\" to drive engagement and growth.",
        )
    })
}

/// The first [`MAX_IMPROVEMENTS`] triggered suggestions, in priority order.
pub fn generate_improvements(metrics: &TextMetrics, ai_detection: &AiDetection) -> Vec<Improvement> {
    RULES
        .iter()
        .filter_map(|rule| rule(metrics, ai_detection))
        .take(MAX_IMPROVEMENTS)
        .collect()
}
