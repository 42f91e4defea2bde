use stories::{AnalyzedSentence, Sentence, generate_sentence_id};

/// Find the analysis for the sentence at `index` of `story_filename`.
///
/// Tries, in order: the stable sentence ID, exact (trimmed) English text,
/// then the first analyzed sentence containing the target word.
pub fn find_match<'a>(
    story_filename: &str,
    index: usize,
    sentence: &Sentence,
    analyzed: &'a [AnalyzedSentence],
) -> Option<&'a AnalyzedSentence> {
    let id = generate_sentence_id(story_filename, index, &sentence.english);
    let english = sentence.english.trim();
    let target = sentence.target_word_english.to_lowercase();

    analyzed
        .iter()
        .find(|a| a.sentence_id.as_deref() == Some(id.as_str()))
        .or_else(|| analyzed.iter().find(|a| a.original_english.trim() == english))
        .or_else(|| {
            analyzed
                .iter()
                .find(|a| a.original_english.to_lowercase().contains(&target))
        })
}
