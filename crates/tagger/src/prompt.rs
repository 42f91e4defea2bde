pub fn build_tagging_prompt(sentence: &str) -> String {
    format!(
        r#"Tag every token of the English sentence below with its Universal Dependencies part of speech.

INSTRUCTIONS:
1. Tokenize the sentence the way a standard English tokenizer would (split punctuation and contractions)
2. Keep each token's text exactly as written, including capitalization
3. Output ONLY valid JSON, nothing else

SCHEMA:
{{
  "tokens": [
    {{"text": "token", "pos": "NOUN"}}
  ]
}}

RULES:
- "pos" must be one of: ADJ, ADP, ADV, AUX, CCONJ, DET, INTJ, NOUN, NUM, PART, PRON, PROPN, PUNCT, SCONJ, SYM, VERB, X
- Keep tokens in sentence order
- Output ONLY the JSON object, no markdown, no explanations

SENTENCE:
{}

JSON OUTPUT:"#,
        sentence
    )
}

pub fn build_retry_prompt(invalid_json: &str) -> String {
    format!(
        r#"The following JSON is invalid:

{}

Fix this JSON so it matches {{"tokens": [{{"text": "...", "pos": "..."}}]}}. Output only valid JSON with no markdown formatting, no code blocks, no explanations. Just the raw JSON object."#,
        invalid_json
    )
}
