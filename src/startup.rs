use anyhow::Context;

use crate::{
    configuration::{Backend, Settings},
    domain::record::Record,
    services::{write_records, Droid, HttpFetcher, KeywordScraper},
};

/// Scrapes every configured url and writes the keyword counts to the output csv.
pub async fn run(settings: Settings) -> anyhow::Result<Vec<Record>> {
    let scrape = &settings.scrape;
    let keyword_scraper = KeywordScraper::new();

    log::info!(
        "Scraping {} urls with the {:?} backend",
        scrape.urls.len(),
        scrape.backend
    );

    let records = match scrape.backend {
        Backend::WebDriver => {
            let droid = Droid::new(&settings.browser, scrape.page_load_timeout())
                .await
                .context("Failed to start browser session")?;
            keyword_scraper.run(droid, &scrape.urls).await
        }
        Backend::Http => {
            let fetcher = HttpFetcher::new(scrape.page_load_timeout())
                .context("Failed to build http client")?;
            keyword_scraper.run(fetcher, &scrape.urls).await
        }
    };

    write_records(&scrape.output_path, &records)
        .with_context(|| format!("Failed to write {}", scrape.output_path))?;

    Ok(records)
}
