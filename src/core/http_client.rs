use std::time::Duration;

use reqwest::Client;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Generation can run for minutes, so a total timeout is only applied when configured.
pub fn build_http_client(
    disable_proxy: bool,
    timeout: Option<Duration>,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent("article-debate-server/0.1")
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS));

    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    if disable_proxy {
        builder = builder.no_proxy();
    }

    builder.build()
}
