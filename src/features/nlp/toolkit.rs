use std::sync::Arc;

use crate::features::nlp::resources::NlpResources;
use crate::features::nlp::tagger::tag_words;
use crate::features::nlp::tags::TaggedWord;
use crate::features::nlp::tokenizer::{split_sentences, split_words};

/// Sentence segmentation, word tokenization, tagging and stop-word lookup
/// for one language.
pub trait LanguageToolkit: Send + Sync {
    fn sentences(&self, text: &str) -> Vec<String>;

    fn words(&self, sentence: &str) -> Vec<String>;

    fn tag(&self, words: &[String]) -> Vec<TaggedWord>;

    fn is_stop_word(&self, word: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct RuleBasedToolkit {
    resources: Arc<NlpResources>,
}

impl Default for RuleBasedToolkit {
    fn default() -> Self {
        Self::new(Arc::new(NlpResources::builtin()))
    }
}

impl RuleBasedToolkit {
    pub fn new(resources: Arc<NlpResources>) -> Self {
        Self { resources }
    }
}

impl LanguageToolkit for RuleBasedToolkit {
    fn sentences(&self, text: &str) -> Vec<String> {
        split_sentences(text)
    }

    fn words(&self, sentence: &str) -> Vec<String> {
        split_words(sentence)
    }

    fn tag(&self, words: &[String]) -> Vec<TaggedWord> {
        tag_words(words, &self.resources)
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.resources.is_stop_word(word)
    }
}
