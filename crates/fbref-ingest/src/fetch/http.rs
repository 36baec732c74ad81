use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use crate::error::{IngestError, Result};

use super::DocumentSource;

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Desktop Chrome identities (Windows and Linux) rotated across requests.
pub const USER_AGENTS: [&str; 6] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.6261.112 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.6099.217 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.6167.184 Safari/537.36",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.6045.199 Safari/537.36",
];

/// Blocking HTTP fetcher with a rotating user agent.
pub struct HttpFetcher {
    client: Client,
    rng: StdRng,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| IngestError::ClientBuild(error.to_string()))?;
        Ok(Self {
            client,
            rng: StdRng::from_entropy(),
        })
    }

    fn next_user_agent(&mut self) -> &'static str {
        USER_AGENTS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(USER_AGENTS[0])
    }
}

impl DocumentSource for HttpFetcher {
    fn fetch(&mut self, source: &str) -> Result<String> {
        let agent = self.next_user_agent();
        debug!(source = %source, user_agent = %agent, "fetching document");

        let response = self
            .client
            .get(source)
            .header(USER_AGENT, agent)
            .header(ACCEPT, "text/html")
            .send()
            .map_err(|error| IngestError::Retrieval {
                source_id: source.to_string(),
                message: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::HttpStatus {
                source_id: source.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|error| IngestError::Retrieval {
            source_id: source.to_string(),
            message: error.to_string(),
        })
    }
}
