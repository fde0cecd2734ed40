pub mod frequency;
pub mod record;
pub mod section;
pub mod stopwords;
