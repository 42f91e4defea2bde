use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One story file: a titled list of sentence pairs.
///
/// Fields this crate does not model (`topic`, ...) are kept in `extra` so a
/// rewrite never drops them. Field order is the serialized key order:
/// `title`, unknown fields in input order, then `sentences`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Story {
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(default)]
    pub sentences: Vec<Sentence>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub korean: String,
    #[serde(default)]
    pub target_word_english: String,
    // Unknown fields sit before the enrichment fields so they keep their place
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrong_answers: Option<Vec<String>>,
}

impl Sentence {
    pub fn new(english: &str, korean: &str, target_word_english: &str) -> Self {
        Self {
            english: english.to_string(),
            korean: korean.to_string(),
            target_word_english: target_word_english.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_survive_rewrite() {
        let raw = r#"{
            "title": "Fox",
            "topic": "animals",
            "sentences": [
                {"english": "Run.", "korean": "달려.", "targetWordEnglish": "run", "targetWordKorean": "달리다"}
            ]
        }"#;

        let story: Story = serde_json::from_str(raw).unwrap();
        assert_eq!(story.extra["topic"], "animals");
        assert_eq!(story.sentences[0].extra["targetWordKorean"], "달리다");

        let value = serde_json::to_value(&story).unwrap();
        assert_eq!(value["topic"], "animals");
        assert_eq!(value["sentences"][0]["targetWordKorean"], "달리다");
        assert!(value["sentences"][0].get("partOfSpeech").is_none());
        assert!(value["sentences"][0].get("wrongAnswers").is_none());
    }

    #[test]
    fn test_rewrite_keeps_input_key_order() {
        let raw = r#"{
            "title": "Fox",
            "topic": "animals",
            "sentences": [
                {"english": "Run.", "korean": "달려.", "targetWordEnglish": "run", "targetWordKorean": "달리다"}
            ]
        }"#;

        let mut story: Story = serde_json::from_str(raw).unwrap();
        story.sentences[0].part_of_speech = Some("verb".to_string());
        story.sentences[0].wrong_answers = Some(vec!["do".to_string()]);

        let value = serde_json::to_value(&story).unwrap();
        let story_keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(story_keys, vec!["title", "topic", "sentences"]);

        let sentence_keys: Vec<&String> =
            value["sentences"][0].as_object().unwrap().keys().collect();
        assert_eq!(
            sentence_keys,
            vec![
                "english",
                "korean",
                "targetWordEnglish",
                "targetWordKorean",
                "partOfSpeech",
                "wrongAnswers",
            ]
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let story: Story = serde_json::from_str(r#"{"sentences": [{}]}"#).unwrap();

        assert_eq!(story.title, "");
        assert_eq!(story.sentences[0], Sentence::default());
    }

    #[test]
    fn test_enrichment_fields_use_camel_case() {
        let mut sentence = Sentence::new("Run.", "달려.", "run");
        sentence.part_of_speech = Some("verb".to_string());
        sentence.wrong_answers = Some(vec!["do".to_string()]);

        let value = serde_json::to_value(&sentence).unwrap();
        assert_eq!(value["partOfSpeech"], "verb");
        assert_eq!(value["wrongAnswers"][0], "do");
        assert_eq!(value["targetWordEnglish"], "run");
    }
}
