use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::{debug, info};

use crate::config::dto::NlpConfig;
use crate::core::error::AppError;
use crate::features::nlp::stopwords::ENGLISH_STOP_WORDS;
use crate::features::nlp::tags::PosTag;

const STOP_WORDS_FILE: &str = "stopwords/english";
const LEXICON_FILE: &str = "lexicon.tsv";

static SHARED_RESOURCES: OnceLock<Arc<NlpResources>> = OnceLock::new();

/// Stop words plus lexicon overrides consulted by the tagger before its
/// built-in rules.
#[derive(Debug, Clone)]
pub struct NlpResources {
    stop_words: HashSet<String>,
    lexicon: HashMap<String, PosTag>,
}

impl Default for NlpResources {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NlpResources {
    pub fn builtin() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS
                .iter()
                .map(|word| word.to_string())
                .collect(),
            lexicon: HashMap::new(),
        }
    }

    /// Loads resources from `config.data_dir`.
    ///
    /// Layout: `stopwords/english` holds one stop word per line and replaces
    /// the built-in list; `lexicon.tsv` holds `word<TAB>TAG` overrides. Either
    /// file may be absent, the directory itself may not.
    pub fn load(config: &NlpConfig) -> Result<Self, AppError> {
        let mut resources = Self::builtin();
        let Some(dir) = config.data_dir.as_deref() else {
            return Ok(resources);
        };

        if !dir.is_dir() {
            return Err(AppError::resource(format!(
                "NLP data directory {} does not exist",
                dir.display()
            )));
        }

        let stop_words_path = dir.join(STOP_WORDS_FILE);
        if let Some(content) = read_optional(&stop_words_path)? {
            resources.stop_words = parse_stop_words(&content);
            debug!(target: "nlp", path = %stop_words_path.display(), count = resources.stop_words.len(), "loaded stop words");
        }

        let lexicon_path = dir.join(LEXICON_FILE);
        if let Some(content) = read_optional(&lexicon_path)? {
            for (word, tag) in parse_lexicon(&content, &lexicon_path)? {
                resources = resources.with_lexicon_entry(&word, tag);
            }
            debug!(target: "nlp", path = %lexicon_path.display(), count = resources.lexicon.len(), "loaded lexicon overrides");
        }

        Ok(resources)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    pub fn lexicon_tag(&self, lowercase_word: &str) -> Option<PosTag> {
        self.lexicon.get(lowercase_word).copied()
    }

    pub fn with_lexicon_entry(mut self, word: &str, tag: PosTag) -> Self {
        self.lexicon.insert(word.to_lowercase(), tag);
        self
    }
}

/// Loads the process-wide resources once; later calls return the first
/// result and ignore their `config`.
pub fn initialise(config: &NlpConfig) -> Result<Arc<NlpResources>, AppError> {
    if let Some(existing) = SHARED_RESOURCES.get() {
        return Ok(existing.clone());
    }

    let loaded = Arc::new(NlpResources::load(config)?);
    let shared = SHARED_RESOURCES.get_or_init(|| loaded);
    info!(
        target: "nlp",
        data_dir = ?config.data_dir,
        stop_words = shared.stop_words.len(),
        lexicon_overrides = shared.lexicon.len(),
        "language resources ready"
    );
    Ok(shared.clone())
}

fn read_optional(path: &Path) -> Result<Option<String>, AppError> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|err| AppError::resource(format!("failed to read {}: {err}", path.display())))
}

fn parse_stop_words(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

fn parse_lexicon(content: &str, path: &Path) -> Result<Vec<(String, PosTag)>, AppError> {
    let mut lexicon = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(word), Some(tag), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(AppError::resource(format!(
                "{}:{}: expected `word<TAB>TAG`",
                path.display(),
                number + 1
            )));
        };

        let tag = tag.parse::<PosTag>().map_err(|err| {
            AppError::resource(format!("{}:{}: {err}", path.display(), number + 1))
        })?;
        lexicon.push((word.to_string(), tag));
    }

    Ok(lexicon)
}
