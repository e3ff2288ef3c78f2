use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::TextMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Audience {
    Traders,
    Builders,
    Creators,
    Developers,
    Investors,
    Beginners,
    #[serde(rename = "Advanced Users")]
    AdvancedUsers,
}

impl Audience {
    pub fn label(self) -> &'static str {
        match self {
            Audience::Traders => "Traders",
            Audience::Builders => "Builders",
            Audience::Creators => "Creators",
            Audience::Developers => "Developers",
            Audience::Investors => "Investors",
            Audience::Beginners => "Beginners",
            Audience::AdvancedUsers => "Advanced Users",
        }
    }
}

pub const DEFAULT_AUDIENCES: [Audience; 2] = [Audience::Creators, Audience::Beginners];

static AUDIENCE_PATTERNS: Lazy<Vec<(Audience, Regex)>> = Lazy::new(|| {
    [
        (
            Audience::Traders,
            r"trade|trading|entry|exit|chart|technical analysis|ta\b",
        ),
        (
            Audience::Builders,
            r"build|building|developer|code|smart contract|solidity",
        ),
        (
            Audience::Creators,
            r"content|creator|growth|audience|engagement|viral",
        ),
        (
            Audience::Developers,
            r"dev|developer|programming|github|api|web3\.js",
        ),
        (
            Audience::Investors,
            r"invest|investment|portfolio|returns|roi|defi",
        ),
        (
            Audience::Beginners,
            r"beginner|start|guide|basics|introduction|new to",
        ),
        (
            Audience::AdvancedUsers,
            r"advanced|deep dive|technical|complex|sophisticated",
        ),
    ]
    .iter()
    .map(|(audience, pattern)| (*audience, Regex::new(pattern).expect("audience pattern")))
    .collect()
});

/// Every segment whose keywords appear, in declaration order. Segments are
/// not exclusive; content matching none falls back to [`DEFAULT_AUDIENCES`].
pub fn identify_audience(metrics: &TextMetrics) -> Vec<Audience> {
    let audiences: Vec<Audience> = AUDIENCE_PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&metrics.lower))
        .map(|(audience, _)| *audience)
        .collect();

    if audiences.is_empty() {
        DEFAULT_AUDIENCES.to_vec()
    } else {
        audiences
    }
}
