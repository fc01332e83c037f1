use std::collections::VecDeque;
use std::fmt::Display;
use std::time::Duration;

use async_trait::async_trait;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::generation::dto::{GenerateChunk, GenerateRequest};

/// Text fragments in arrival order; an `Err` item means the upstream failed.
pub type FragmentStream = BoxStream<'static, Result<String, AppError>>;

#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Starts an incremental generation. Failing to reach the backend is an
    /// `Err` here; failures after the first byte arrive inside the stream.
    async fn generate(&self, prompt: String) -> Result<FragmentStream, AppError>;
}

pub struct OllamaClient {
    http_client: reqwest::Client,
    api_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let timeout = config.ollama.timeout_secs.map(Duration::from_secs);
        let http_client = build_http_client(config.disable_proxy, timeout)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self::with_client(
            http_client,
            config.ollama.api_url.clone(),
            config.ollama.model.clone(),
        ))
    }

    pub fn with_client(http_client: reqwest::Client, api_url: String, model: String) -> Self {
        Self {
            http_client,
            api_url,
            model,
        }
    }
}

#[async_trait]
impl GenerationBackend for OllamaClient {
    async fn generate(&self, prompt: String) -> Result<FragmentStream, AppError> {
        let payload = GenerateRequest {
            model: self.model.clone(),
            prompt,
            stream: true,
        };

        debug!(target: "generation", url = %self.api_url, model = %self.model, "requesting generation");
        let response = self
            .http_client
            .post(&self.api_url)
            .json(&payload)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|err| AppError::upstream(err.to_string()))?;

        Ok(decode_fragments(response.bytes_stream()).boxed())
    }
}

/// Turns a byte stream of newline-delimited generate objects into text fragments.
pub fn decode_fragments<S, B, E>(source: S) -> impl Stream<Item = Result<String, AppError>> + Send
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Display + Send + 'static,
{
    let state = DecodeState {
        source: Box::pin(source),
        decoder: NdjsonDecoder::default(),
        pending: VecDeque::new(),
        exhausted: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(fragment) = state.pending.pop_front() {
                return Some((Ok(fragment), state));
            }
            if state.exhausted {
                return None;
            }

            match state.source.next().await {
                Some(Ok(chunk)) => {
                    let fragments = state.decoder.push(chunk.as_ref());
                    state.pending.extend(fragments);
                }
                Some(Err(err)) => {
                    state.exhausted = true;
                    return Some((Err(AppError::upstream(err.to_string())), state));
                }
                None => {
                    state.exhausted = true;
                    let fragments = state.decoder.finish();
                    state.pending.extend(fragments);
                }
            }
        }
    })
}

struct DecodeState<S> {
    source: std::pin::Pin<Box<S>>,
    decoder: NdjsonDecoder,
    pending: VecDeque<String>,
    exhausted: bool,
}

/// Splits bytes into lines and pulls the `response` text out of each one.
/// Lines may straddle chunk boundaries.
#[derive(Debug, Default)]
pub struct NdjsonDecoder {
    buffer: Vec<u8>,
}

impl NdjsonDecoder {
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(bytes);

        let mut fragments = Vec::new();
        while let Some(position) = self.buffer.iter().position(|byte| *byte == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=position).collect();
            fragments.extend(parse_line(&line[..position]));
        }
        fragments
    }

    /// Decodes whatever is left after the final newline.
    pub fn finish(&mut self) -> Vec<String> {
        let rest = std::mem::take(&mut self.buffer);
        parse_line(&rest).into_iter().collect()
    }
}

fn parse_line(line: &[u8]) -> Option<String> {
    let line = line.trim_ascii();
    if line.is_empty() {
        return None;
    }

    match serde_json::from_slice::<GenerateChunk>(line) {
        Ok(chunk) => {
            if let Some(error) = chunk.error {
                warn!(target: "generation", %error, "generation backend reported an error");
            }
            if chunk.done {
                debug!(target: "generation", "generation finished");
            }
            chunk.response.filter(|fragment| !fragment.is_empty())
        }
        Err(err) => {
            debug!(target: "generation", %err, "skipping malformed line");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_complete_lines() {
        let mut decoder = NdjsonDecoder::default();
        let fragments = decoder.push(
            b"{\"response\":\"Key\"}\n{\"response\":\" Claims\"}\n{\"response\":\"\",\"done\":true}\n",
        );
        assert_eq!(fragments, vec!["Key", " Claims"]);
        assert!(decoder.finish().is_empty());
    }

    #[test]
    fn joins_lines_split_across_chunks() {
        let mut decoder = NdjsonDecoder::default();
        assert!(decoder.push(b"{\"respo").is_empty());
        assert_eq!(decoder.push(b"nse\":\"Persona A\"}\r\n{\"resp"), vec!["Persona A"]);
        assert_eq!(decoder.push(b"onse\":\": \"}"), Vec::<String>::new());
        assert_eq!(decoder.finish(), vec![": "]);
    }

    #[test]
    fn finish_drains_the_pending_line() {
        let mut decoder = NdjsonDecoder::default();
        assert!(decoder.push(b"{\"response\":\"tail\"}").is_empty());
        assert_eq!(decoder.finish(), vec!["tail"]);
        assert!(decoder.finish().is_empty());
    }

    #[test]
    fn skips_malformed_and_fragmentless_lines() {
        let mut decoder = NdjsonDecoder::default();
        let fragments = decoder.push(
            b"not json\n\n{\"model\":\"phi3\"}\n{\"error\":\"model not loaded\"}\n[1,2]\n{\"response\":\"ok\"}\n",
        );
        assert_eq!(fragments, vec!["ok"]);
    }

    #[test]
    fn multibyte_text_survives_chunk_boundaries() {
        let line = "{\"response\":\"caf\u{e9} \u{2014} d\u{e9}bat\"}\n".as_bytes();
        let (head, tail) = line.split_at(17);

        let mut decoder = NdjsonDecoder::default();
        assert!(decoder.push(head).is_empty());
        assert_eq!(decoder.push(tail), vec!["caf\u{e9} \u{2014} d\u{e9}bat"]);
    }

    #[tokio::test]
    async fn stream_decoding_preserves_order_and_stops_on_error() {
        let chunks: Vec<Result<Vec<u8>, String>> = vec![
            Ok(b"{\"response\":\"one\"}\n{\"response\":".to_vec()),
            Ok(b"\"two\"}\n".to_vec()),
            Err("connection reset".to_string()),
            Ok(b"{\"response\":\"never\"}\n".to_vec()),
        ];

        let items: Vec<Result<String, AppError>> =
            decode_fragments(stream::iter(chunks)).collect().await;

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_ref().expect("first"), "one");
        assert_eq!(items[1].as_ref().expect("second"), "two");
        match &items[2] {
            Err(AppError::Upstream(message)) => assert_eq!(message, "connection reset"),
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn trailing_line_without_newline_is_decoded() {
        let chunks: Vec<Result<&'static [u8], String>> =
            vec![Ok(b"{\"response\":\"a\"}\n{\"response\":\"b\"}".as_slice())];

        let items: Vec<String> = decode_fragments(stream::iter(chunks))
            .map(|item| item.expect("fragment"))
            .collect()
            .await;

        assert_eq!(items, vec!["a", "b"]);
    }
}
