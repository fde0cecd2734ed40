pub mod csv_writer;
pub mod droid;
pub mod http_fetcher;
pub mod keyword_aggregator;
pub mod keyword_scraper;
pub mod page_extractor;

pub use csv_writer::*;
pub use droid::*;
pub use http_fetcher::*;
pub use keyword_aggregator::*;
pub use keyword_scraper::*;
pub use page_extractor::*;
