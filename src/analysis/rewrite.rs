use once_cell::sync::Lazy;
use regex::Regex;

use crate::TextMetrics;

pub const HUMAN_FALLBACK: &str =
    "Your content is already quite human! Maybe just shorten sentences and add more personality.";

const OPENERS: &[(&str, &str)] = &[
    ("in today's", "Here's the thing about Web3 right now:"),
    ("blockchain", "Real talk about blockchain:"),
    ("nft", "Let me be straight with you about NFTs:"),
];
const DEFAULT_OPENER: &str = "Quick reality check:";

static REPLACEMENTS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"Moreover,?", "Plus,"),
        (r"Furthermore,?", "Also,"),
        (r"It is important to note that", "Important:"),
        (r"In conclusion,?", "Bottom line:"),
        (r"leverage", "use"),
        (r"utilize", "use"),
        (r"paradigm shift", "big change"),
        (r"cutting-edge", "new"),
        (r"game-changer", "game changer"),
    ]
    .iter()
    .map(|(pattern, replacement)| {
        let regex = Regex::new(&format!("(?i){}", pattern)).expect("replacement pattern");
        (regex, *replacement)
    })
    .collect()
});

fn opener_for(first_line: &str) -> &'static str {
    let lower = first_line.to_lowercase();
    OPENERS
        .iter()
        .find(|(keyword, _)| lower.contains(*keyword))
        .map(|(_, opener)| *opener)
        .unwrap_or(DEFAULT_OPENER)
}

/// Applies the jargon table to the whole text, case-insensitively.
pub fn simplify_phrasing(text: &str) -> String {
    REPLACEMENTS
        .iter()
        .fold(text.to_string(), |current, (pattern, replacement)| {
            pattern.replace_all(&current, *replacement).into_owned()
        })
}

pub fn human_rewrite(metrics: &TextMetrics) -> String {
    let headline = metrics
        .text
        .split('\n')
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    let simplified = simplify_phrasing(metrics.text);
    let remainder = simplified.split('\n').skip(1).collect::<Vec<_>>().join("\n");
    if remainder.trim().is_empty() {
        return HUMAN_FALLBACK.to_string();
    }

    format!("{}\n\n{}", opener_for(headline), remainder)
}
