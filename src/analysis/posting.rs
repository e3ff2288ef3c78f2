use serde::{Deserialize, Serialize};

use crate::TextMetrics;

// Tuned for a global, crypto-native audience; not derived from the content.
const BEST_TIME: &str = "8-10 AM EST or 6-8 PM EST";
const BEST_DAY: &str = "Tuesday through Thursday";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingStrategy {
    pub best_time: String,
    pub best_day: String,
    pub post_type: String,
}

pub fn recommend_posting_strategy(metrics: &TextMetrics) -> PostingStrategy {
    let post_type = if metrics.word_count < 100 {
        "Single post for maximum immediate impact"
    } else if metrics.word_count < 300 {
        "Single long-form post or 3-tweet thread"
    } else {
        "Thread (5-7 tweets) posted sequentially"
    };

    PostingStrategy {
        best_time: BEST_TIME.to_string(),
        best_day: BEST_DAY.to_string(),
        post_type: post_type.to_string(),
    }
}
