use serde::{Deserialize, Serialize};

use crate::TextMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostFormat {
    #[serde(rename = "Short Tweet")]
    ShortTweet,
    #[serde(rename = "Long Tweet")]
    LongTweet,
    Thread,
    #[serde(rename = "Long Thread or Article")]
    LongThreadOrArticle,
    Article,
}

impl PostFormat {
    /// Each upper bound is exclusive: 50 words is already a long tweet.
    pub fn for_word_count(words: usize) -> Self {
        if words < 50 {
            PostFormat::ShortTweet
        } else if words < 150 {
            PostFormat::LongTweet
        } else if words < 500 {
            PostFormat::Thread
        } else if words < 1000 {
            PostFormat::LongThreadOrArticle
        } else {
            PostFormat::Article
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostFormat::ShortTweet => "Short Tweet",
            PostFormat::LongTweet => "Long Tweet",
            PostFormat::Thread => "Thread",
            PostFormat::LongThreadOrArticle => "Long Thread or Article",
            PostFormat::Article => "Article",
        }
    }

    pub fn rationale(self) -> &'static str {
        match self {
            PostFormat::ShortTweet => {
                "Your content is concise and punchy. Perfect for a standalone tweet to maximize engagement."
            }
            PostFormat::LongTweet => {
                "Good length for a single comprehensive tweet. Provides value without requiring a thread."
            }
            PostFormat::Thread => {
                "Break this into 3-5 tweets for better readability and engagement on each part."
            }
            PostFormat::LongThreadOrArticle => {
                "This has substantial depth. Consider a 7-10 tweet thread or a Medium article with a summary thread."
            }
            PostFormat::Article => {
                "Too long for a thread. Publish as an article and share a compelling thread with key takeaways linking to it."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRecommendation {
    pub format: PostFormat,
    pub reason: String,
}

pub fn recommend_format(metrics: &TextMetrics) -> FormatRecommendation {
    let format = PostFormat::for_word_count(metrics.word_count);
    FormatRecommendation {
        format,
        reason: format.rationale().to_string(),
    }
}
