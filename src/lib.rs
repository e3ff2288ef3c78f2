pub mod analysis;
pub mod config;

use serde::{Deserialize, Serialize};

pub use analysis::{
    AiConfidence, AiDetection, Audience, FormatRecommendation, HookResult, HookType, Improvement,
    MissingElement, PostFormat, PostingStrategy, RetentionBreakdown, ViralPotential, ViralTier,
};

use crate::analysis::{
    analyze_hook, detect_ai, find_missing_elements, generate_improvements, human_rewrite,
    identify_audience, recommend_format, recommend_posting_strategy, retention_score,
    viral_potential,
};

/// Segmentation of one piece of content, computed once and shared by every analyzer.
///
/// Counting is deliberately naive: words are whitespace tokens, sentences are
/// the non-blank pieces between runs of `.`, `!` and `?`, paragraphs are the
/// pieces of a split on a blank line. Decimal numbers and abbreviations will
/// inflate the sentence count; that is the scored behavior.
#[derive(Debug, Clone)]
pub struct TextMetrics<'a> {
    pub text: &'a str,
    pub lower: String,
    pub first_line: &'a str,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub char_count: usize,
}

impl<'a> TextMetrics<'a> {
    pub fn new(text: &'a str) -> Self {
        let sentence_count = text
            .split(|ch| matches!(ch, '.' | '!' | '?'))
            .filter(|piece| !piece.trim().is_empty())
            .count();

        Self {
            text,
            lower: text.to_lowercase(),
            first_line: text.split('\n').next().unwrap_or(""),
            word_count: text.split_whitespace().count(),
            sentence_count,
            paragraph_count: text.split("\n\n").count(),
            char_count: text.chars().count(),
        }
    }

    /// Zero sentences count as one so single fragments never divide by zero.
    pub fn avg_words_per_sentence(&self) -> f64 {
        self.word_count as f64 / self.sentence_count.max(1) as f64
    }

    pub fn first_line_len(&self) -> usize {
        self.first_line.chars().count()
    }

    pub fn first_line_has_punch(&self) -> bool {
        self.first_line.contains('?') || self.first_line.contains('!')
    }

    pub fn has_digit(&self) -> bool {
        self.text.chars().any(|ch| ch.is_ascii_digit())
    }

    /// Case-insensitive substring test against any of `needles`.
    pub fn mentions_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.lower.contains(*needle))
    }

    pub fn summary(&self) -> ContentMetrics {
        ContentMetrics {
            word_count: self.word_count,
            sentence_count: self.sentence_count,
            paragraph_count: self.paragraph_count,
            char_count: self.char_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub char_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metrics: ContentMetrics,
    pub hook_analysis: HookResult,
    pub retention_score: u8,
    pub ai_detection: AiDetection,
    pub human_rewrite: String,
    pub format_recommendation: FormatRecommendation,
    pub audience_targeting: Vec<Audience>,
    pub missing_elements: Vec<MissingElement>,
    pub viral_potential: ViralPotential,
    pub posting_strategy: PostingStrategy,
    pub improvements: Vec<Improvement>,
}

/// Runs every analyzer over `text` and assembles the composite report.
///
/// Callers are expected to trim and reject blank input first; blank or tiny
/// input still produces a complete report.
pub fn analyze(text: &str) -> AnalysisReport {
    let metrics = TextMetrics::new(text);

    let retention_score = retention_score(&metrics);
    let ai_detection = detect_ai(&metrics);
    let viral_potential = viral_potential(&metrics, retention_score, &ai_detection);

    tracing::debug!(
        words = metrics.word_count,
        retention_score,
        ai_confidence = ai_detection.confidence.label(),
        viral_tier = viral_potential.potential.label(),
        "content analyzed"
    );

    AnalysisReport {
        metrics: metrics.summary(),
        hook_analysis: analyze_hook(&metrics),
        retention_score,
        human_rewrite: human_rewrite(&metrics),
        format_recommendation: recommend_format(&metrics),
        audience_targeting: identify_audience(&metrics),
        missing_elements: find_missing_elements(&metrics),
        posting_strategy: recommend_posting_strategy(&metrics),
        improvements: generate_improvements(&metrics, &ai_detection),
        viral_potential,
        ai_detection,
    }
}
