use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

pub const DEFAULT_URLS: [&str; 3] = [
    "https://www.runnersworld.com/gear/a19663621/best-running-shoes/",
    "https://www.fleetfeet.com/running-shoe-buyers-guide",
    "https://nymag.com/strategist/article/best-running-shoes-men-women.html",
];

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scrape: ScrapeSettings,
    pub browser: BrowserSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrapeSettings {
    pub urls: Vec<String>,
    pub output_path: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_load_timeout_secs: u64,
    pub backend: Backend,
}

impl ScrapeSettings {
    pub fn page_load_timeout(&self) -> Duration {
        Duration::from_secs(self.page_load_timeout_secs)
    }
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        ScrapeSettings {
            urls: DEFAULT_URLS.iter().map(|u| u.to_string()).collect(),
            output_path: "output.csv".to_string(),
            page_load_timeout_secs: 60,
            backend: Backend::WebDriver,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    pub webdriver_url: String,
    pub headless: bool,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        BrowserSettings {
            webdriver_url: "http://localhost:4444".to_string(),
            headless: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    WebDriver,
    Http,
}

/// Defaults, then `configuration/base.yaml` if present, then `APP_` prefixed
/// environment variables, e.g. `APP_SCRAPE__OUTPUT_PATH=keywords.csv`.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base = std::env::current_dir()
        .map(|dir| dir.join("configuration").join("base"))
        .map_err(|e| ConfigError::Foreign(Box::new(e)))?;

    build_configuration(
        Config::builder().add_source(
            File::new(&base.to_string_lossy(), FileFormat::Yaml).required(false),
        ),
    )
}

fn build_configuration(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, ConfigError> {
    builder
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("scrape.urls")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use config::{Config, File, FileFormat};

    use super::{build_configuration, Backend, Settings, DEFAULT_URLS};

    #[test]
    fn defaults_without_sources() {
        let settings = build_configuration(Config::builder()).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.scrape.urls, DEFAULT_URLS);
        assert_eq!(settings.scrape.output_path, "output.csv");
        assert_eq!(settings.scrape.page_load_timeout().as_secs(), 60);
        assert_eq!(settings.scrape.backend, Backend::WebDriver);
    }

    #[test]
    fn yaml_overrides_defaults() {
        let yaml = r#"
scrape:
  urls:
    - https://example.com/a
  page_load_timeout_secs: "15"
  backend: http
browser:
  headless: false
"#;
        let settings =
            build_configuration(Config::builder().add_source(File::from_str(yaml, FileFormat::Yaml)))
                .unwrap();

        assert_eq!(settings.scrape.urls, vec!["https://example.com/a"]);
        assert_eq!(settings.scrape.page_load_timeout_secs, 15);
        assert_eq!(settings.scrape.backend, Backend::Http);
        assert_eq!(settings.scrape.output_path, "output.csv");
        assert!(!settings.browser.headless);
        assert_eq!(settings.browser.webdriver_url, "http://localhost:4444");
    }
}
