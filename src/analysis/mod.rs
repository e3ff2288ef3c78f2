pub mod ai_detect;
pub mod audience;
pub mod format;
pub mod hook;
pub mod improvements;
pub mod missing;
pub mod posting;
pub mod retention;
pub mod rewrite;
pub mod viral;

pub use ai_detect::{detect_ai, AiConfidence, AiDetection, AI_PHRASES};
pub use audience::{identify_audience, Audience, DEFAULT_AUDIENCES};
pub use format::{recommend_format, FormatRecommendation, PostFormat};
pub use hook::{analyze_hook, classify_hook, HookResult, HookType};
pub use improvements::{generate_improvements, Improvement, MAX_IMPROVEMENTS};
pub use missing::{find_missing_elements, MissingElement};
pub use posting::{recommend_posting_strategy, PostingStrategy};
pub use retention::{retention_breakdown, retention_score, RetentionBreakdown};
pub use rewrite::{human_rewrite, simplify_phrasing, HUMAN_FALLBACK};
pub use viral::{viral_potential, ViralPotential, ViralTier};
