use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use thirtyfour::error::WebDriverError;

use crate::domain::section::PageSections;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid url {0}: {1}")]
    InvalidUrl(String, url::ParseError),
    #[error("timed out loading {0}")]
    Timeout(String),
    #[error("no <{0}> element on page")]
    MissingElement(&'static str),
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
    #[error("bad selector {0}")]
    Selector(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    WebDriver(#[from] WebDriverError),
}

/// Loads a page and pulls out the text that keywords are counted on.
#[async_trait]
pub trait PageExtractor: Send {
    async fn extract(&mut self, url: &str) -> Result<PageSections, ExtractError>;

    /// Releases whatever session the extractor holds. Called once after the last url.
    async fn close(self) -> Result<(), ExtractError>;
}

pub fn validate_url(url: &str) -> Result<url::Url, ExtractError> {
    url::Url::parse(url).map_err(|e| ExtractError::InvalidUrl(url.to_string(), e))
}

fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector(format!("{}: {}", css, e)))
}

fn text_content(element: ElementRef) -> String {
    element.text().collect()
}

/*
 title          -> search engine title, empty when absent
 first h1       -> page title, required
 h2, h3         -> subheadings, document order
 p, li, table   -> main content, document order
*/
pub fn parse_page_sections(html: &str) -> Result<PageSections, ExtractError> {
    let title_selector = selector("title")?;
    let h1_selector = selector("h1")?;
    let subheading_selector = selector("h2, h3")?;
    let content_selector = selector("p, li, table")?;

    let document = Html::parse_document(html);

    let search_engine_title = document
        .select(&title_selector)
        .next()
        .map(text_content)
        .unwrap_or_default();

    let page_title = document
        .select(&h1_selector)
        .next()
        .map(text_content)
        .ok_or(ExtractError::MissingElement("h1"))?;

    let subheadings = document.select(&subheading_selector).map(text_content).collect();
    let main_content = document.select(&content_selector).map(text_content).collect();

    Ok(PageSections {
        search_engine_title,
        page_title,
        subheadings,
        main_content,
    })
}
