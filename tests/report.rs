use retention_os::{analyze, AiConfidence, Audience, HookType, PostFormat, ViralTier};

const THREAD: &str = "Why do 90% of NFT projects die in 6 months?\n\nI was building one when I found out.\n\n→ No utility\n→ No community\n→ No follow-through\n\nFollow for part 2.";

#[test]
fn analyze_is_deterministic() {
    let first = analyze(THREAD);
    let second = analyze(THREAD);
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn report_assembles_every_section() {
    let report = analyze(THREAD);

    assert_eq!(report.hook_analysis.current_hook, HookType::CuriosityGap);
    assert_eq!(
        report.hook_analysis.first_line,
        "Why do 90% of NFT projects die in 6 months?"
    );
    assert_eq!(report.retention_score, 80);
    assert_eq!(report.ai_detection.confidence, AiConfidence::Low);
    assert_eq!(report.format_recommendation.format, PostFormat::ShortTweet);
    assert!(report.audience_targeting.contains(&Audience::Builders));
    assert_eq!(report.viral_potential.potential, ViralTier::Viral);
    assert!(report.human_rewrite.starts_with("Let me be straight with you about NFTs:\n\n"));
    assert!(report.improvements.len() <= 3);
    assert!(!report.missing_elements.is_empty());
    assert_eq!(report.metrics.paragraph_count, 4);
}

#[test]
fn report_serializes_with_display_labels() {
    let report = analyze(
        "Warning: advanced technical analysis for complex charts\nDon't chase entries blindly.",
    );
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["hook_analysis"]["current_hook"], "Warning/Threat Hook");
    assert_eq!(json["format_recommendation"]["format"], "Short Tweet");
    let audiences = json["audience_targeting"].as_array().unwrap();
    assert!(audiences.iter().any(|value| value == "Advanced Users"));
    assert!(audiences.iter().any(|value| value == "Traders"));
    assert!(json["ai_detection"]["weighted_hits"].is_u64());
    assert!(json["viral_potential"]["score"].is_u64());
}

#[test]
fn degenerate_inputs_still_produce_reports() {
    for text in ["", "x", "?", "🚀", "—", "\n\n\n"] {
        let report = analyze(text);
        assert!(report.retention_score <= 100);
        assert!(report.viral_potential.score <= 100);
        assert!(!report.audience_targeting.is_empty());
        assert!(!report.missing_elements.is_empty());
        assert!(report.improvements.len() <= 3);
    }
}

#[test]
fn report_round_trips_through_json() {
    let report = analyze(THREAD);
    let json = serde_json::to_string_pretty(&report).unwrap();
    let parsed: retention_os::AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);
}
