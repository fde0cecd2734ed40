use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::section::PageSections;

use super::page_extractor::{parse_page_sections, validate_url, ExtractError, PageExtractor};

/// Fetches pages with a plain GET. Works for pages that render without javascript.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(fake_user_agent::get_rua())
            .cookie_store(true)
            .build()?;

        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl PageExtractor for HttpFetcher {
    async fn extract(&mut self, url: &str) -> Result<PageSections, ExtractError> {
        let url = validate_url(url)?;

        let res = self.client.get(url.clone()).send().await.map_err(|e| {
            match e.is_timeout() {
                true => ExtractError::Timeout(url.to_string()),
                false => ExtractError::Http(e),
            }
        })?;

        if !res.status().is_success() {
            return Err(ExtractError::Status(res.status()));
        }

        let html_content = res.text().await?;
        parse_page_sections(&html_content)
    }

    async fn close(self) -> Result<(), ExtractError> {
        Ok(())
    }
}
