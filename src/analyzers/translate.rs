//! Bilingual phrase translator.
//!
//! Exact-phrase lookup against a fixed dictionary, then a per-word pass,
//! then a locale-tagged passthrough marker when nothing matched. Source
//! language is auto-detected from the presence of CJK ideographs.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::types::{AppError, AppResult};

/// Common phrases in both directions. Static, never mutated at runtime.
static DICTIONARY: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // English -> Chinese
        ("hello", "你好"),
        ("world", "世界"),
        ("goodbye", "再见"),
        ("thank you", "谢谢"),
        ("thanks", "谢谢"),
        ("yes", "是"),
        ("no", "否"),
        ("love", "爱"),
        ("friend", "朋友"),
        ("code", "代码"),
        ("computer", "电脑"),
        ("good", "好"),
        ("morning", "早上"),
        ("night", "晚上"),
        ("beautiful", "美丽"),
        ("happy", "开心"),
        ("ai", "人工智能"),
        ("agent", "代理"),
        ("wallet", "钱包"),
        ("blockchain", "区块链"),
        ("payment", "支付"),
        // Chinese -> English
        ("你好", "hello"),
        ("世界", "world"),
        ("再见", "goodbye"),
        ("谢谢", "thank you"),
        ("是", "yes"),
        ("否", "no"),
        ("爱", "love"),
        ("朋友", "friend"),
        ("代码", "code"),
        ("电脑", "computer"),
        ("好", "good"),
        ("早上", "morning"),
        ("晚上", "night"),
        ("美丽", "beautiful"),
        ("开心", "happy"),
        ("人工智能", "AI"),
        ("代理", "agent"),
        ("钱包", "wallet"),
        ("区块链", "blockchain"),
        ("支付", "payment"),
    ])
});

#[derive(Debug, Clone, Serialize)]
pub struct TranslationResult {
    pub translated: String,
    pub from: String,
    pub to: String,
}

fn contains_chinese(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c))
}

/// Translate `text` between Chinese and English via the phrase dictionary.
pub fn translate(text: &str, from: &str, to: &str) -> AppResult<TranslationResult> {
    if text.is_empty() {
        return Err(AppError::invalid("Missing text parameter"));
    }

    let detected_from = if from == "auto" {
        if contains_chinese(text) {
            "zh"
        } else {
            "en"
        }
    } else {
        from
    };

    let lower = text.to_lowercase();
    let lower = lower.trim();

    let translated = if let Some(hit) = DICTIONARY.get(lower) {
        (*hit).to_string()
    } else if let Some(hit) = DICTIONARY.get(text) {
        (*hit).to_string()
    } else {
        translate_word_by_word(lower, detected_from)
            .unwrap_or_else(|| passthrough(text, detected_from))
    };

    Ok(TranslationResult {
        translated,
        from: detected_from.to_string(),
        to: to.to_string(),
    })
}

/// Map each whitespace-separated word through the dictionary. Returns None
/// when no word translated at all.
fn translate_word_by_word(lower: &str, detected_from: &str) -> Option<String> {
    let words: Vec<&str> = lower.split_whitespace().collect();
    let translated: Vec<&str> = words
        .iter()
        .map(|word| DICTIONARY.get(word).copied().unwrap_or(word))
        .collect();

    if translated == words {
        return None;
    }
    // Chinese joins without spaces
    let separator = if detected_from == "zh" { "" } else { " " };
    Some(translated.join(separator))
}

fn passthrough(text: &str, detected_from: &str) -> String {
    if detected_from == "en" {
        format!("[译] {text}")
    } else {
        format!("[Trans] {text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_phrase_hits_dictionary() {
        let result = translate("hello", "auto", "zh").unwrap();
        assert_eq!(result.translated, "你好");
        assert_eq!(result.from, "en");
        assert_eq!(result.to, "zh");
    }

    #[test]
    fn chinese_phrase_hits_dictionary() {
        let result = translate("你好", "auto", "en").unwrap();
        assert_eq!(result.translated, "hello");
        assert_eq!(result.from, "zh");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let result = translate("  Hello ", "auto", "en").unwrap();
        assert_eq!(result.translated, "你好");
    }

    #[test]
    fn explicit_source_language_is_kept() {
        let result = translate("hello", "en", "zh").unwrap();
        assert_eq!(result.from, "en");
        let result = translate("hello", "fr", "en").unwrap();
        assert_eq!(result.from, "fr");
    }

    #[test]
    fn word_by_word_fallback_for_english() {
        let result = translate("hello world", "auto", "zh").unwrap();
        assert_eq!(result.translated, "你好 世界");
    }

    #[test]
    fn partial_word_translation_keeps_unknown_words() {
        let result = translate("hello stranger", "auto", "zh").unwrap();
        assert_eq!(result.translated, "你好 stranger");
    }

    #[test]
    fn unknown_text_falls_through_to_marker() {
        let result = translate("xyz123", "auto", "en").unwrap();
        assert!(result.translated.contains("xyz123"));
        assert!(result.translated.starts_with("[译]"));
    }

    #[test]
    fn unknown_chinese_uses_trans_marker() {
        let result = translate("此处无词典条目", "auto", "en").unwrap();
        assert!(result.translated.starts_with("[Trans]"));
        assert_eq!(result.from, "zh");
    }

    #[test]
    fn empty_text_rejected() {
        assert!(matches!(
            translate("", "auto", "en"),
            Err(AppError::InvalidInput(_))
        ));
    }
}
