use std::env;
use std::path::PathBuf;

use crate::config::dto::{AppConfig, NlpConfig, OllamaConfig};
use crate::core::error::AppError;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_OLLAMA_API_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_OLLAMA_MODEL: &str = "phi3";
pub const DEFAULT_MAX_POINTS: usize = 15;
pub const DEFAULT_STATIC_DIR: &str = "static";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let port = env::var("DEBATE_SERVER_PORT")
        .or_else(|_| env::var("PORT"))
        .ok()
        .map(|value| {
            value
                .parse::<u16>()
                .map_err(|err| AppError::configuration(format!("invalid port: {err}")))
        })
        .transpose()?
        .unwrap_or(DEFAULT_PORT);

    let disable_proxy = parse_bool_env("DEBATE_DISABLE_PROXY", false);

    let default_max_points = parse_optional_env::<usize>("DEBATE_DEFAULT_MAX_POINTS")?
        .unwrap_or(DEFAULT_MAX_POINTS);
    if default_max_points == 0 {
        return Err(AppError::configuration(
            "DEBATE_DEFAULT_MAX_POINTS must be at least 1".to_string(),
        ));
    }

    let static_dir = env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

    let ollama = OllamaConfig {
        api_url: env::var("OLLAMA_API_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_API_URL.to_string()),
        model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_OLLAMA_MODEL.to_string()),
        timeout_secs: parse_optional_env::<u64>("OLLAMA_TIMEOUT_SECS")?,
    };

    let nlp = NlpConfig {
        data_dir: env::var("NLP_DATA_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from),
    };

    Ok(AppConfig {
        port,
        disable_proxy,
        default_max_points,
        static_dir,
        ollama,
        nlp,
    })
}

fn parse_bool_env(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|value| parse_bool(&value))
        .unwrap_or(default)
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "true" | "1" | "TRUE" | "True")
}

fn parse_optional_env<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => parse_value(key, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|err| AppError::configuration(format!("invalid {key}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_values_follow_common_spellings() {
        assert!(parse_bool("true"));
        assert!(parse_bool("1"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool("yes"));
        assert!(!parse_bool("0"));
    }

    #[test]
    fn invalid_numbers_are_configuration_errors() {
        let error = parse_value::<u64>("OLLAMA_TIMEOUT_SECS", "soon").expect_err("should fail");
        match error {
            AppError::Configuration(message) => {
                assert!(message.contains("OLLAMA_TIMEOUT_SECS"), "unexpected message: {message}");
            }
            other => panic!("expected configuration error, got {other:?}"),
        }

        assert_eq!(parse_value::<usize>("DEBATE_DEFAULT_MAX_POINTS", " 12 ").expect("parse"), 12);
    }
}
