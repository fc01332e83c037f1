pub mod classifier;
pub mod dto;
pub mod extractor;
pub mod handler;
pub mod service;
pub mod synthesizer;

pub use classifier::{DebatabilityPolicy, DebatabilityRule, is_debatable};
pub use dto::{DebateEntryDto, DebateRequestDto, DebateResponseDto};
pub use extractor::{DEFAULT_EXTRACT_LIMIT, KeyPointExtractor, SENTINEL_POINT};
pub use handler::handle_debate;
pub use service::DebateService;
pub use synthesizer::{format_statements, synthesize_debate};
