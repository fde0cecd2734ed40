use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum SectionName {
    #[serde(rename = "Search Engine Title")]
    SearchEngineTitle,
    #[serde(rename = "Page Title")]
    PageTitle,
    #[serde(rename = "SubHeadings")]
    SubHeadings,
    #[serde(rename = "Main Content")]
    MainContent,
}

impl SectionName {
    pub fn label(&self) -> &'static str {
        match self {
            SectionName::SearchEngineTitle => "Search Engine Title",
            SectionName::PageTitle => "Page Title",
            SectionName::SubHeadings => "SubHeadings",
            SectionName::MainContent => "Main Content",
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Section {
    pub name: SectionName,
    pub data: Vec<String>,
}

impl Section {
    /// All scraped strings of the section joined by a single space.
    pub fn text(&self) -> String {
        self.data.join(" ")
    }
}

/// Raw text scraped from one page, before it is split into sections.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct PageSections {
    pub search_engine_title: String,
    pub page_title: String,
    pub subheadings: Vec<String>,
    pub main_content: Vec<String>,
}

impl PageSections {
    pub fn into_sections(self) -> [Section; 4] {
        [
            Section {
                name: SectionName::SearchEngineTitle,
                data: vec![self.search_engine_title],
            },
            Section {
                name: SectionName::PageTitle,
                data: vec![self.page_title],
            },
            Section {
                name: SectionName::SubHeadings,
                data: self.subheadings,
            },
            Section {
                name: SectionName::MainContent,
                data: self.main_content,
            },
        ]
    }
}
