//! Deterministic rule-based fallback classification.
//!
//! Used whenever the remote classification call fails or returns something
//! unparseable. A pure function of the input text: keyword scans per field,
//! first matching rule wins, plus length thresholds for complexity.

use musa_core::{Classification, Complexity, Intent, MAX_KEYWORDS, Sentiment};

// Keyword tables — the storefront's Arabic customer vocabulary.
const INFORMATION_WORDS: &[&str] = &["ساعة", "منتج", "سعر", "شراء", "اشتري"];
const GREETING_WORDS: &[&str] = &["أهلاً", "السلام", "مرحباً", "صباح"];
const REQUEST_WORDS: &[&str] = &["طلب", "تتبع", "وصل", "شحن"];
const COMPLAINT_WORDS: &[&str] = &["مشكلة", "شكوى", "خطأ", "غلط"];
const COMPLIMENT_WORDS: &[&str] = &["شكراً", "ممتاز", "رائع"];
const HELP_WORDS: &[&str] = &["مساعدة", "ساعدني", "كيف"];

const POSITIVE_WORDS: &[&str] = &["شكراً", "ممتاز", "رائع", "جيد", "أحب"];
const NEGATIVE_WORDS: &[&str] = &["سيء", "مشكلة", "غاضب", "محبط", "زعلان"];
const CURIOUS_WORDS: &[&str] = &["؟", "كيف", "ماذا", "متى", "أين"];

const PRODUCT_WORDS: &[&str] = &["ساعة", "منتج"];
const SHIPPING_WORDS: &[&str] = &["شحن", "توصيل", "طلب"];
const PAYMENT_WORDS: &[&str] = &["دفع", "فلوس", "سعر"];
const RETURNS_WORDS: &[&str] = &["إرجاع", "استبدال", "ضمان"];

const COMPLEX_WORDS: &[&str] = &["معقد", "صعب", "مشكلة كبيرة"];

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Classify `text` without any remote call. Unmatched fields take their
/// defaults: question / neutral / general.
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    let intent = if contains_any(&lower, INFORMATION_WORDS) {
        Intent::Information
    } else if contains_any(&lower, GREETING_WORDS) {
        Intent::Greeting
    } else if contains_any(&lower, REQUEST_WORDS) {
        Intent::Request
    } else if contains_any(&lower, COMPLAINT_WORDS) {
        Intent::Complaint
    } else if contains_any(&lower, COMPLIMENT_WORDS) {
        Intent::Compliment
    } else if contains_any(&lower, HELP_WORDS) {
        Intent::Help
    } else {
        Intent::Question
    };

    let sentiment = if contains_any(&lower, POSITIVE_WORDS) {
        Sentiment::Positive
    } else if contains_any(&lower, NEGATIVE_WORDS) {
        Sentiment::Negative
    } else if contains_any(&lower, CURIOUS_WORDS) {
        Sentiment::Curious
    } else {
        Sentiment::Neutral
    };

    let topic = if contains_any(&lower, PRODUCT_WORDS) {
        "product"
    } else if contains_any(&lower, SHIPPING_WORDS) {
        "shipping"
    } else if contains_any(&lower, PAYMENT_WORDS) {
        "payment"
    } else if contains_any(&lower, RETURNS_WORDS) {
        "returns"
    } else {
        "general"
    }
    .to_string();

    // Length thresholds are in characters, not bytes — the input is Arabic.
    let chars = text.chars().count();
    let question_marks = text.matches('؟').count();
    let mut complexity = Complexity::Simple;
    if chars > 50 || question_marks > 1 {
        complexity = Complexity::Moderate;
    }
    if chars > 100 || contains_any(&lower, COMPLEX_WORDS) {
        complexity = Complexity::Complex;
    }

    let keywords = lower
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect();

    Classification {
        intent,
        sentiment,
        topic,
        complexity,
        keywords,
    }
}
