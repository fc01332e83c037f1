use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub disable_proxy: bool,
    pub default_max_points: usize,
    pub static_dir: PathBuf,
    pub ollama: OllamaConfig,
    pub nlp: NlpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    pub api_url: String,
    pub model: String,
    pub timeout_secs: Option<u64>,
}

/// Where the language toolkit looks for stop-word and lexicon overrides.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NlpConfig {
    pub data_dir: Option<PathBuf>,
}
