pub mod client;
pub mod dto;
pub mod handler;
pub mod prompt;
pub mod service;

pub use client::{FragmentStream, GenerationBackend, NdjsonDecoder, OllamaClient, decode_fragments};
pub use dto::GenerateDebateRequestDto;
pub use handler::handle_generate_debate;
pub use prompt::build_debate_prompt;
pub use service::{GenerationService, UPSTREAM_ERROR_PREFIX};
