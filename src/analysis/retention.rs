use serde::{Deserialize, Serialize};

use crate::TextMetrics;

const EMOTIONAL_WORDS: &[&str] = &[
    "secret",
    "warning",
    "mistake",
    "proven",
    "guaranteed",
    "free",
    "exclusive",
    "urgent",
];

const BULLET_MARKERS: &[char] = &['•', '-', '→'];

/// Points earned per band. The bands are independent and several conditions
/// inside one band can fire together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionBreakdown {
    /// 0..=25
    pub hook_strength: u32,
    /// 0..=25
    pub clarity: u32,
    /// 0..=20
    pub emotional_pull: u32,
    /// 0..=15
    pub readability: u32,
    /// 0..=15
    pub engagement: u32,
}

impl RetentionBreakdown {
    pub fn total(&self) -> u32 {
        self.hook_strength + self.clarity + self.emotional_pull + self.readability + self.engagement
    }
}

pub fn retention_breakdown(metrics: &TextMetrics) -> RetentionBreakdown {
    let mut breakdown = RetentionBreakdown::default();

    let first_line_len = metrics.first_line_len();
    if first_line_len > 20 && first_line_len < 100 {
        breakdown.hook_strength += 15;
    }
    if metrics.first_line_has_punch() {
        breakdown.hook_strength += 10;
    }

    let avg_words = metrics.avg_words_per_sentence();
    if avg_words < 20.0 {
        breakdown.clarity += 15;
    }
    if avg_words < 15.0 {
        breakdown.clarity += 10;
    }

    if metrics.mentions_any(EMOTIONAL_WORDS) {
        breakdown.emotional_pull += 15;
    }
    if metrics.text.contains('!') {
        breakdown.emotional_pull += 5;
    }

    if metrics.paragraph_count > 1 {
        breakdown.readability += 10;
    }
    if metrics.word_count < 500 {
        breakdown.readability += 5;
    }

    if metrics.has_digit() {
        breakdown.engagement += 8;
    }
    if metrics.text.contains(BULLET_MARKERS) {
        breakdown.engagement += 7;
    }

    breakdown
}

/// 0..=100 estimate of how well the content holds attention.
pub fn retention_score(metrics: &TextMetrics) -> u8 {
    retention_breakdown(metrics).total().min(100) as u8
}
