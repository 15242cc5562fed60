#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use musa_classifier::{MessageClassifier, aggregate_patterns, rules};
    use musa_core::{Classification, Complexity, Intent, Interaction, MAX_KEYWORDS, Sentiment};
    use musa_llm::MockProvider;

    fn classifier(provider: MockProvider) -> MessageClassifier {
        MessageClassifier::new(Arc::new(provider), "gemini-2.5-pro", 0.3)
    }

    // ── Remote path ────────────────────────────────────────────

    #[tokio::test]
    async fn test_classify_parses_model_json() {
        let provider = MockProvider::new("mock").with_response(
            r#"{"intent": "complaint", "sentiment": "frustrated", "topic": "Shipping",
                "complexity": "moderate", "keywords": ["order", "late", "week"]}"#,
        );
        let requests = provider.recorded_requests();
        let c = classifier(provider).classify("طلبي متأخر أسبوع كامل").await;

        assert_eq!(c.intent, Intent::Complaint);
        assert_eq!(c.sentiment, Sentiment::Frustrated);
        assert_eq!(c.topic, "shipping");
        assert_eq!(c.complexity, Complexity::Moderate);
        assert_eq!(c.keywords.len(), 3);

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].json_output);
        assert_eq!(requests[0].temperature, 0.3);
        assert!(requests[0].prompt.contains("طلبي متأخر"));
    }

    #[tokio::test]
    async fn test_classify_coerces_out_of_range_values() {
        let provider = MockProvider::new("mock").with_response(
            r#"{"intent": "rant", "sentiment": "chaotic", "complexity": "extreme",
                "keywords": ["a", "b", "c", "d", "e", "f", "g"]}"#,
        );
        let c = classifier(provider).classify("whatever").await;
        assert_eq!(c.intent, Intent::Question);
        assert_eq!(c.sentiment, Sentiment::Neutral);
        assert_eq!(c.topic, "general");
        assert_eq!(c.complexity, Complexity::Moderate);
        assert_eq!(c.keywords.len(), MAX_KEYWORDS);
    }

    // ── Fallback path ──────────────────────────────────────────

    #[tokio::test]
    async fn test_classify_falls_back_on_remote_error() {
        let provider = MockProvider::new("mock").with_error("HTTP 500: boom");
        let c = classifier(provider).classify("أين طلبي؟").await;
        // Rule fallback: request words + question mark
        assert_eq!(c.intent, Intent::Request);
        assert_eq!(c.sentiment, Sentiment::Curious);
    }

    #[tokio::test]
    async fn test_classify_falls_back_on_non_json() {
        let provider = MockProvider::new("mock").with_response("sorry, I can't do that");
        let c = classifier(provider).classify("مرحباً").await;
        assert_eq!(c.intent, Intent::Greeting);
    }

    #[tokio::test]
    async fn test_fallback_is_deterministic() {
        let text = "عندي مشكلة في الدفع والتوصيل";
        let first = {
            let provider = MockProvider::new("mock").with_error("down");
            classifier(provider).classify(text).await
        };
        let second = {
            let provider = MockProvider::new("mock").with_error("down");
            classifier(provider).classify(text).await
        };
        assert_eq!(first, second);
    }

    // ── Rule classifier ────────────────────────────────────────

    #[test]
    fn test_rules_defaults_for_unmatched_long_text() {
        // 120 Latin characters, nothing matching any keyword table
        let text = "x".repeat(120);
        let c = rules::classify(&text);
        assert_eq!(c.intent, Intent::Question);
        assert_eq!(c.sentiment, Sentiment::Neutral);
        assert_eq!(c.topic, "general");
        assert_eq!(c.complexity, Complexity::Complex);
    }

    #[test]
    fn test_rules_short_text_is_simple() {
        let c = rules::classify("ok");
        assert_eq!(c.complexity, Complexity::Simple);
    }

    #[test]
    fn test_rules_medium_text_is_moderate() {
        let text = "y".repeat(60);
        let c = rules::classify(&text);
        assert_eq!(c.complexity, Complexity::Moderate);
    }

    #[test]
    fn test_rules_multiple_question_marks_bump_complexity() {
        let c = rules::classify("لماذا؟ وكيف؟");
        assert_eq!(c.complexity, Complexity::Moderate);
    }

    #[test]
    fn test_rules_complex_keyword_wins_over_length() {
        let c = rules::classify("الموضوع معقد");
        assert_eq!(c.complexity, Complexity::Complex);
    }

    #[test]
    fn test_rules_intent_first_match_wins() {
        // Contains both a product word and a complaint word — product table
        // is scanned first
        let c = rules::classify("مشكلة في الساعة");
        assert_eq!(c.intent, Intent::Information);
        assert_eq!(c.sentiment, Sentiment::Negative);
        assert_eq!(c.topic, "product");
    }

    #[test]
    fn test_rules_keywords_skip_short_tokens() {
        let c = rules::classify("هل يوجد توصيل سريع الى القاهرة الجديدة اليوم");
        assert!(c.keywords.len() <= MAX_KEYWORDS);
        assert!(c.keywords.iter().all(|k| k.chars().count() > 2));
    }

    // ── Pattern aggregation ────────────────────────────────────

    #[test]
    fn test_aggregate_patterns_empty() {
        let summary = aggregate_patterns(&[]);
        assert_eq!(summary.total_interactions, 0);
        assert!(summary.intent_counts.is_empty());
        assert!(summary.complexity_trend.is_empty());
    }

    #[test]
    fn test_aggregate_patterns_counts() {
        let make = |intent, sentiment, topic: &str, complexity| {
            Interaction::new(
                "q",
                "a",
                chrono::Utc::now(),
                Classification {
                    intent,
                    sentiment,
                    topic: topic.into(),
                    complexity,
                    keywords: vec![],
                },
            )
        };
        let interactions = vec![
            make(Intent::Question, Sentiment::Curious, "product", Complexity::Simple),
            make(Intent::Question, Sentiment::Neutral, "product", Complexity::Complex),
            make(Intent::Complaint, Sentiment::Negative, "shipping", Complexity::Moderate),
        ];

        let summary = aggregate_patterns(&interactions);
        assert_eq!(summary.total_interactions, 3);
        assert_eq!(summary.intent_counts[&Intent::Question], 2);
        assert_eq!(summary.intent_counts[&Intent::Complaint], 1);
        assert_eq!(summary.sentiment_counts[&Sentiment::Negative], 1);
        assert_eq!(summary.topic_counts["product"], 2);
        assert_eq!(
            summary.complexity_trend,
            vec![Complexity::Simple, Complexity::Complex, Complexity::Moderate]
        );
    }
}
