use serde::{Deserialize, Serialize};

use super::section::SectionName;

pub const CSV_HEADER: [&str; 4] = ["Section", "URL", "Keyword", "Count"];

/// One keyword count for one section of one page.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Section")]
    pub section: SectionName,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Keyword")]
    pub keyword: String,
    #[serde(rename = "Count")]
    pub count: u32,
}
