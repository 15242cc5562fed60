#[cfg(test)]
mod tests {
    use musa_core::*;

    // ── Classification validation ──────────────────────────────

    mod classification {
        use super::*;

        #[test]
        fn test_from_raw_valid_fields() {
            let raw = RawClassification {
                intent: Some("complaint".into()),
                sentiment: Some("frustrated".into()),
                topic: Some("Shipping".into()),
                complexity: Some("complex".into()),
                keywords: Some(vec!["order".into(), "late".into()]),
            };
            let c = Classification::from_raw(raw);
            assert_eq!(c.intent, Intent::Complaint);
            assert_eq!(c.sentiment, Sentiment::Frustrated);
            assert_eq!(c.topic, "shipping");
            assert_eq!(c.complexity, Complexity::Complex);
            assert_eq!(c.keywords, vec!["order", "late"]);
        }

        #[test]
        fn test_from_raw_coerces_invalid_to_defaults() {
            let raw = RawClassification {
                intent: Some("rant".into()),
                sentiment: Some("melancholic".into()),
                topic: None,
                complexity: Some("impossible".into()),
                keywords: None,
            };
            let c = Classification::from_raw(raw);
            assert_eq!(c.intent, Intent::Question);
            assert_eq!(c.sentiment, Sentiment::Neutral);
            assert_eq!(c.topic, "general");
            assert_eq!(c.complexity, Complexity::Moderate);
            assert!(c.keywords.is_empty());
        }

        #[test]
        fn test_from_raw_is_case_insensitive() {
            let raw = RawClassification {
                intent: Some("GREETING".into()),
                sentiment: Some("Positive".into()),
                topic: Some("PRODUCT".into()),
                complexity: Some("Simple".into()),
                keywords: None,
            };
            let c = Classification::from_raw(raw);
            assert_eq!(c.intent, Intent::Greeting);
            assert_eq!(c.sentiment, Sentiment::Positive);
            assert_eq!(c.topic, "product");
            assert_eq!(c.complexity, Complexity::Simple);
        }

        #[test]
        fn test_from_raw_truncates_keywords() {
            let raw = RawClassification {
                keywords: Some((0..9).map(|i| format!("kw{i}")).collect()),
                ..Default::default()
            };
            let c = Classification::from_raw(raw);
            assert_eq!(c.keywords.len(), MAX_KEYWORDS);
            assert_eq!(c.keywords[0], "kw0");
        }

        #[test]
        fn test_from_raw_blank_topic_defaults() {
            let raw = RawClassification {
                topic: Some("   ".into()),
                ..Default::default()
            };
            let c = Classification::from_raw(raw);
            assert_eq!(c.topic, "general");
        }

        #[test]
        fn test_raw_deserializes_partial_json() {
            let raw: RawClassification =
                serde_json::from_str(r#"{"intent": "help", "keywords": ["a"]}"#).unwrap();
            let c = Classification::from_raw(raw);
            assert_eq!(c.intent, Intent::Help);
            assert_eq!(c.sentiment, Sentiment::Neutral);
            assert_eq!(c.keywords, vec!["a"]);
        }

        #[test]
        fn test_enums_serialize_lowercase() {
            assert_eq!(
                serde_json::to_string(&Intent::Compliment).unwrap(),
                "\"compliment\""
            );
            assert_eq!(
                serde_json::to_string(&Sentiment::Curious).unwrap(),
                "\"curious\""
            );
            assert_eq!(
                serde_json::to_string(&Complexity::Simple).unwrap(),
                "\"simple\""
            );
        }

        #[test]
        fn test_classification_serde_roundtrip() {
            let c = Classification {
                intent: Intent::Request,
                sentiment: Sentiment::Excited,
                topic: "payment".into(),
                complexity: Complexity::Moderate,
                keywords: vec!["pay".into()],
            };
            let json = serde_json::to_string(&c).unwrap();
            let restored: Classification = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, c);
        }
    }

    // ── Interaction ────────────────────────────────────────────

    mod interaction {
        use super::*;
        use chrono::Utc;

        #[test]
        fn test_interaction_serde_uses_analysis_field() {
            let interaction = Interaction::new(
                "كم سعر الساعة؟",
                "السعر 400 جنيه",
                Utc::now(),
                Classification::default(),
            );
            let json = serde_json::to_value(&interaction).unwrap();
            assert!(json.get("analysis").is_some());
            assert!(json.get("user_input").is_some());
            assert!(json.get("assistant_response").is_some());
            assert!(json.get("timestamp").is_some());
        }

        #[test]
        fn test_interaction_roundtrip() {
            let interaction = Interaction::new(
                "hello",
                "hi there",
                Utc::now(),
                Classification::default(),
            );
            let json = serde_json::to_string(&interaction).unwrap();
            let restored: Interaction = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, interaction);
        }
    }
}
