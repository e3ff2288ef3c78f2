use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::TextMetrics;

/// Stock phrases that read as machine-written. Scanned in this order, so the
/// evidence list follows it too.
pub const AI_PHRASES: &[&str] = &[
    "delve into",
    "dive deep",
    "it's important to note",
    "moreover",
    "furthermore",
    "in conclusion",
    "in today's digital landscape",
    "landscape",
    "unlock",
    "unlock the power",
    "leverage",
    "cutting-edge",
    "game-changer",
    "revolutionary",
    "innovative solution",
    "robust",
    "seamless",
    "ecosystem",
    "paradigm shift",
    "at the end of the day",
    "to be honest",
    "if you will",
    "so to speak",
    "needless to say",
    "tapestry",
    "realm",
    "ever-evolving",
    "dynamic",
];

const PASSIVE_MARKERS: &[&str] = &["is being", "was being", "has been"];
const FORMAL_MARKERS: &[&str] = &["one must", "it is essential", "therefore"];

const ADVERB_LIMIT: usize = 5;
const ADVERB_WEIGHT: u32 = 2;
const PASSIVE_WEIGHT: u32 = 1;
const FORMAL_WEIGHT: u32 = 2;

static ADVERB_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"ly\b").expect("adverb pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AiConfidence {
    Low,
    Medium,
    High,
}

impl AiConfidence {
    pub fn from_hits(hits: u32) -> Self {
        if hits >= 5 {
            AiConfidence::High
        } else if hits >= 3 {
            AiConfidence::Medium
        } else {
            AiConfidence::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AiConfidence::Low => "Low",
            AiConfidence::Medium => "Medium",
            AiConfidence::High => "High",
        }
    }

    pub fn is_flagged(self) -> bool {
        matches!(self, AiConfidence::Medium | AiConfidence::High)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiDetection {
    pub confidence: AiConfidence,
    pub detected_phrases: Vec<String>,
    /// Phrase hits plus the stylistic weights, which add no evidence entries.
    pub weighted_hits: u32,
}

pub fn detect_ai(metrics: &TextMetrics) -> AiDetection {
    let detected_phrases: Vec<String> = AI_PHRASES
        .iter()
        .filter(|phrase| metrics.lower.contains(**phrase))
        .map(|phrase| phrase.to_string())
        .collect();

    let mut weighted_hits = detected_phrases.len() as u32;

    // Suffix count runs on the original casing.
    if ADVERB_SUFFIX_RE.find_iter(metrics.text).count() > ADVERB_LIMIT {
        weighted_hits += ADVERB_WEIGHT;
    }
    if metrics.mentions_any(PASSIVE_MARKERS) {
        weighted_hits += PASSIVE_WEIGHT;
    }
    if metrics.mentions_any(FORMAL_MARKERS) {
        weighted_hits += FORMAL_WEIGHT;
    }

    AiDetection {
        confidence: AiConfidence::from_hits(weighted_hits),
        detected_phrases,
        weighted_hits,
    }
}
