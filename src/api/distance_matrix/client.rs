use std::time::Duration;

use anyhow::anyhow;
use reqwest::Url;
use thiserror::Error;

use super::types::MatrixResponse;

pub const DISTANCE_MATRIX_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

pub const STATUS_OK: &str = "OK";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {status}: {message}")]
    Rejected { status: String, message: String },

    #[error("malformed provider response: {0}")]
    Malformed(String),
}

#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    base: Url,
    api_key: String,
}

impl Client {
    pub fn new(base: &str, api_key: String) -> anyhow::Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let base = base
            .parse()
            .map_err(|e| anyhow!("{} is not a valid url: {}", base, e))?;

        Ok(Self {
            inner,
            base,
            api_key,
        })
    }

    /// One round trip to the provider: a single origin against every
    /// destination, pipe-joined, imperial units.
    pub async fn drive_times(
        &self,
        origin: &str,
        destinations: &[String],
    ) -> Result<MatrixResponse, MatrixError> {
        let dests = destinations.join("|");

        let response: MatrixResponse = self
            .inner
            .get(self.base.clone())
            .query(&[
                ("origins", origin),
                ("destinations", dests.as_str()),
                ("units", "imperial"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        if response.status != STATUS_OK {
            return Err(MatrixError::Rejected {
                status: response.status,
                message: response.error_message.unwrap_or_default(),
            });
        }

        Ok(response)
    }
}
