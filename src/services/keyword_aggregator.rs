use rust_stemmers::{Algorithm, Stemmer};

use crate::domain::{frequency::FrequencyTable, stopwords::is_stopword};

pub struct KeywordAggregator {
    stemmer: Stemmer,
}

impl Default for KeywordAggregator {
    fn default() -> Self {
        KeywordAggregator {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl KeywordAggregator {
    pub fn new() -> Self {
        KeywordAggregator::default()
    }

    /*
     1. Split the text into word tokens
     2. Drop numeric tokens
     3. Drop stopwords, compared in lowercase
     4. Stem what is left and count each stem
    */
    pub fn aggregate(&self, text: &str) -> FrequencyTable {
        tokenize(text)
            .filter(|token| !is_number(token))
            .filter(|token| !is_stopword(token))
            .map(|token| self.stemmer.stem(&token.to_lowercase()).into_owned())
            .collect()
    }
}

pub fn aggregate(text: &str) -> FrequencyTable {
    KeywordAggregator::new().aggregate(text)
}

/// Maximal runs of alphanumerics and underscores, everything else delimits.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
}

/// True for tokens that read as a number on their own: integers, floats with
/// an exponent, radix prefixed integers and `Infinity`.
pub fn is_number(token: &str) -> bool {
    if token == "Infinity" {
        return true;
    }

    let radix_prefixes = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in radix_prefixes {
        if let Some(digits) = token.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }

    token.starts_with(|c: char| c.is_ascii_digit()) && token.parse::<f64>().is_ok()
}
