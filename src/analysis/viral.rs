use serde::{Deserialize, Serialize};

use crate::analysis::{AiConfidence, AiDetection};
use crate::TextMetrics;

const THREAD_MARKERS: &[char] = &['→', '•'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ViralTier {
    Low,
    Medium,
    High,
    Viral,
}

impl ViralTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 75 {
            ViralTier::Viral
        } else if score >= 60 {
            ViralTier::High
        } else if score >= 40 {
            ViralTier::Medium
        } else {
            ViralTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViralTier::Low => "Low",
            ViralTier::Medium => "Medium",
            ViralTier::High => "High",
            ViralTier::Viral => "Viral",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            ViralTier::Viral => "Exceptional content with strong hook, optimal length, and high engagement potential. High chance of going viral with the right timing.",
            ViralTier::High => "Strong content that should perform well. Good hook and structure with solid engagement elements.",
            ViralTier::Medium => "Decent content but needs improvements in hook strength, clarity, or engagement elements to maximize reach.",
            ViralTier::Low => "Needs significant improvements. Focus on strengthening the hook, reducing AI-sounding phrases, and adding emotional triggers.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViralPotential {
    pub potential: ViralTier,
    pub explanation: String,
    pub score: u8,
}

/// Composite of the retention score (40), AI penalty (20), length fit (20)
/// and engagement elements (20). Rounded once at the end.
pub fn viral_potential(
    metrics: &TextMetrics,
    retention_score: u8,
    ai_detection: &AiDetection,
) -> ViralPotential {
    let mut score = f64::from(retention_score) / 100.0 * 40.0;

    score += match ai_detection.confidence {
        AiConfidence::Low => 20.0,
        AiConfidence::Medium => 10.0,
        AiConfidence::High => 0.0,
    };

    let words = metrics.word_count;
    if (50..=300).contains(&words) {
        score += 20.0;
    } else if words < 50 || (301..=500).contains(&words) {
        score += 10.0;
    }

    if metrics.text.contains('?') {
        score += 7.0;
    }
    if metrics.has_digit() {
        score += 7.0;
    }
    if metrics.text.contains(THREAD_MARKERS) {
        score += 6.0;
    }

    let score = score.round().clamp(0.0, 100.0) as u8;
    let potential = ViralTier::from_score(score);

    ViralPotential {
        potential,
        explanation: potential.explanation().to_string(),
        score,
    }
}
