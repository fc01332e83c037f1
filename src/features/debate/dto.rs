use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct DebateRequestDto {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub max_points: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateEntryDto {
    pub point: String,
    pub pro: String,
    pub con: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateResponseDto {
    pub key_points: Vec<String>,
    pub debate: Vec<DebateEntryDto>,
}
