use crate::domain::record::Record;

use super::{
    keyword_aggregator::KeywordAggregator,
    page_extractor::{ExtractError, PageExtractor},
};

#[derive(Default)]
pub struct KeywordScraper {
    aggregator: KeywordAggregator,
}

impl KeywordScraper {
    pub fn new() -> Self {
        KeywordScraper::default()
    }

    /// Runs every url through the extractor in order. A url that fails to
    /// extract is logged and contributes no records. The extractor is closed
    /// once after the last url.
    pub async fn run<E: PageExtractor>(&self, mut extractor: E, urls: &[String]) -> Vec<Record> {
        let mut records = vec![];

        for url in urls {
            match self.scrape_url(&mut extractor, url).await {
                Ok(url_records) => {
                    log::info!("Found {} keywords on {}", url_records.len(), url);
                    records.extend(url_records);
                }
                Err(e) => log::error!("Failed to extract data from {}: {}", url, e),
            }
        }

        if let Err(e) = extractor.close().await {
            log::error!("Failed to close page extractor: {}", e);
        }

        records
    }

    async fn scrape_url<E: PageExtractor>(
        &self,
        extractor: &mut E,
        url: &str,
    ) -> Result<Vec<Record>, ExtractError> {
        let page = extractor.extract(url).await?;

        let records = page
            .into_sections()
            .into_iter()
            .flat_map(|section| {
                self.aggregator
                    .aggregate(&section.text())
                    .into_records(section.name, url)
            })
            .collect();

        Ok(records)
    }
}
