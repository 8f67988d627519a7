use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{MovieRecord, MovieRecordInput},
    error::GatewayError,
};
use tracing::{debug, info, warn};
use url::Url;

pub mod payload;

pub use payload::parse_payload;

/// Read/write access to a movie backend.
#[async_trait]
pub trait MovieGateway: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<MovieRecord>, GatewayError>;
    /// Stores a new movie. Nothing is cached locally; callers re-fetch to
    /// observe the record.
    async fn create(&self, input: &MovieRecordInput) -> Result<(), GatewayError>;
}

/// Gateway speaking JSON over HTTP. The same URL serves reads (GET) and
/// writes (POST).
#[derive(Debug, Clone)]
pub struct HttpMovieGateway {
    http: Client,
    endpoint: Url,
}

impl HttpMovieGateway {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn parse(endpoint: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(endpoint)?))
    }
}

#[async_trait]
impl MovieGateway for HttpMovieGateway {
    async fn fetch_all(&self) -> Result<Vec<MovieRecord>, GatewayError> {
        debug!(endpoint = %self.endpoint, "fetching movies");
        let res = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(network_error)?;

        let status = res.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "movie fetch rejected");
            return Err(GatewayError::BadResponse {
                status: status.as_u16(),
            });
        }

        let body = res.bytes().await.map_err(network_error)?;
        let movies = parse_payload(&body)?;
        info!(endpoint = %self.endpoint, count = movies.len(), "fetched movies");
        Ok(movies)
    }

    async fn create(&self, input: &MovieRecordInput) -> Result<(), GatewayError> {
        let res = self
            .http
            .post(self.endpoint.clone())
            .json(input)
            .send()
            .await
            .map_err(network_error)?;

        let status = res.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "movie create rejected");
            return Err(GatewayError::BadResponse {
                status: status.as_u16(),
            });
        }

        // The body (a generated id on keyed backends) is only logged.
        match res.text().await {
            Ok(body) => debug!(endpoint = %self.endpoint, %body, "movie created"),
            Err(error) => debug!(endpoint = %self.endpoint, %error, "movie created, body unreadable"),
        }
        info!(endpoint = %self.endpoint, title = %input.title, "created movie");
        Ok(())
    }
}

fn network_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Network(err.to_string())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
