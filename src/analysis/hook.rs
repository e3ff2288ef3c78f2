use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::TextMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookType {
    #[serde(rename = "Curiosity Gap")]
    CuriosityGap,
    #[serde(rename = "Authority Hook")]
    Authority,
    #[serde(rename = "Contrarian Hook")]
    Contrarian,
    #[serde(rename = "Warning/Threat Hook")]
    Warning,
    #[serde(rename = "Ego Challenge Hook")]
    EgoChallenge,
    #[serde(rename = "Insider Hook")]
    Insider,
    #[serde(rename = "Story Hook")]
    Story,
    #[serde(rename = "Reward Hook")]
    Reward,
    #[serde(rename = "None detected")]
    NoneDetected,
}

impl HookType {
    pub fn label(self) -> &'static str {
        match self {
            HookType::CuriosityGap => "Curiosity Gap",
            HookType::Authority => "Authority Hook",
            HookType::Contrarian => "Contrarian Hook",
            HookType::Warning => "Warning/Threat Hook",
            HookType::EgoChallenge => "Ego Challenge Hook",
            HookType::Insider => "Insider Hook",
            HookType::Story => "Story Hook",
            HookType::Reward => "Reward Hook",
            HookType::NoneDetected => "None detected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookResult {
    pub current_hook: HookType,
    pub recommendation: String,
    pub first_line: String,
}

enum HookMatcher {
    Contains(&'static [&'static str]),
    Pattern(Regex),
}

impl HookMatcher {
    fn matches(&self, lower: &str) -> bool {
        match self {
            HookMatcher::Contains(needles) => needles.iter().any(|needle| lower.contains(*needle)),
            HookMatcher::Pattern(pattern) => pattern.is_match(lower),
        }
    }
}

// Evaluated top to bottom; the first matching rule wins.
static HOOK_RULES: Lazy<Vec<(HookMatcher, HookType)>> = Lazy::new(|| {
    vec![
        (
            HookMatcher::Contains(&["?", "what", "why", "how"]),
            HookType::CuriosityGap,
        ),
        (
            HookMatcher::Contains(&["secret", "insider", "nobody"]),
            HookType::Insider,
        ),
        (
            HookMatcher::Contains(&["warning", "don't", "avoid", "mistake"]),
            HookType::Warning,
        ),
        (
            HookMatcher::Pattern(Regex::new(r"i've|i'm|my|after [0-9]+").expect("story pattern")),
            HookType::Story,
        ),
        (
            HookMatcher::Contains(&["free", "thread", "guide"]),
            HookType::Reward,
        ),
        (
            HookMatcher::Contains(&["unpopular", "actually", "wrong"]),
            HookType::Contrarian,
        ),
        (
            HookMatcher::Pattern(
                Regex::new(r"spent \$|built|earned|made \$").expect("authority pattern"),
            ),
            HookType::Authority,
        ),
        (
            HookMatcher::Contains(&["you're", "can't", "won't"]),
            HookType::EgoChallenge,
        ),
    ]
});

const MIN_CONFIDENT_HOOK_CHARS: usize = 20;

pub fn classify_hook(first_line: &str) -> HookType {
    let lower = first_line.to_lowercase();
    HOOK_RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(&lower))
        .map(|(_, hook)| *hook)
        .unwrap_or(HookType::NoneDetected)
}

pub fn analyze_hook(metrics: &TextMetrics) -> HookResult {
    let current_hook = classify_hook(metrics.first_line);

    let recommendation = if current_hook == HookType::NoneDetected
        || metrics.first_line_len() < MIN_CONFIDENT_HOOK_CHARS
    {
        "Try starting with a curiosity gap or contrarian statement to immediately grab attention."
            .to_string()
    } else {
        format!(
            "Strong {} detected. Consider testing a {} or {} for variety.",
            current_hook.label(),
            HookType::Contrarian.label(),
            HookType::Insider.label()
        )
    };

    HookResult {
        current_hook,
        recommendation,
        first_line: metrics.first_line.to_string(),
    }
}
