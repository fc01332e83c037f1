pub mod resources;
mod stopwords;
pub mod tagger;
pub mod tags;
pub mod tokenizer;
pub mod toolkit;

pub use resources::{NlpResources, initialise};
pub use tags::{PosTag, TaggedWord};
pub use tokenizer::is_punctuation;
pub use toolkit::{LanguageToolkit, RuleBasedToolkit};
