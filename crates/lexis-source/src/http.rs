use std::time::Duration;

use async_trait::async_trait;
use lexis_config::source::SourceConfig;
use lexis_types::Entry;
use reqwest::StatusCode;

use crate::{EntrySource, SourceError};

/// Fetches the dictionary document with a single GET
#[derive(Clone)]
pub struct HttpEntrySource {
    client: reqwest::Client,
    url: String,
}

impl HttpEntrySource {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl EntrySource for HttpEntrySource {
    async fn fetch_all(&self) -> Result<Vec<Entry>, SourceError> {
        tracing::debug!("GET {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let entries: Vec<Entry> = serde_json::from_str(&body)?;

        tracing::debug!("Fetched {} entries ({} bytes)", entries.len(), body.len());
        Ok(entries)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
