//! reqwest client for the deployed endpoint.

use async_trait::async_trait;
use reqwest::Client;

use super::RsvpStore;
use crate::config::WriteMode;
use crate::errors::AppError;
use crate::models::{EndpointReply, RsvpRecord};

/// Endpoint reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    endpoint_url: String,
    write_mode: WriteMode,
}

impl HttpStore {
    pub fn new(endpoint_url: String, write_mode: WriteMode) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint_url,
            write_mode,
        })
    }
}

#[async_trait]
impl RsvpStore for HttpStore {
    async fn submit(&self, record: &RsvpRecord) -> Result<(), AppError> {
        let response = self
            .client
            .post(&self.endpoint_url)
            .json(record)
            .send()
            .await?;

        match self.write_mode {
            // The deployed endpoint is written cross-origin without a readable
            // reply, so reaching it at all is the only signal of success.
            WriteMode::Opaque => Ok(()),
            WriteMode::Checked => {
                if !response.status().is_success() {
                    return Err(AppError::UpstreamStatus(response.status().as_u16()));
                }
                let reply: EndpointReply = response.json().await?;
                reply.into_result().map(|_| ())
            }
        }
    }

    async fn fetch(&self, password: &str) -> Result<Vec<RsvpRecord>, AppError> {
        let response = self
            .client
            .get(&self.endpoint_url)
            .query(&[("password", password)])
            .send()
            .await?;

        // Status is not checked here: the endpoint reports failures in the body.
        let reply: EndpointReply = response.json().await?;
        reply.into_result()
    }

    async fn delete(&self, password: &str, row_id: &str) -> Result<(), AppError> {
        let response = self
            .client
            .get(&self.endpoint_url)
            .query(&[("password", password), ("action", "delete"), ("rowId", row_id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamStatus(response.status().as_u16()));
        }

        let reply: EndpointReply = response.json().await?;
        reply.into_result().map(|_| ())
    }
}
