use std::{fmt::Debug, future::Future, time::Duration};

use async_trait::async_trait;
use thirtyfour::{
    error::WebDriverError, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver, WindowHandle,
};

use crate::{configuration::BrowserSettings, domain::section::PageSections};

use super::page_extractor::{parse_page_sections, validate_url, ExtractError, PageExtractor};

/// A single browser session. Every url gets its own tab which is closed
/// before the next url is loaded.
pub struct Droid {
    driver: WebDriver,
    main_window: WindowHandle,
    page_load_timeout: Duration,
}

impl Droid {
    pub async fn new(
        settings: &BrowserSettings,
        page_load_timeout: Duration,
    ) -> Result<Self, ExtractError> {
        let mut caps = DesiredCapabilities::chrome();
        if settings.headless {
            caps.set_headless()?;
        }
        caps.set_no_sandbox()?;
        caps.add_arg("--disable-setuid-sandbox")?;

        log::info!("Connecting to webdriver at {}", settings.webdriver_url);
        let driver = WebDriver::new(&settings.webdriver_url, caps).await?;

        let main_window = quit_on_error(prepare_session(&driver, page_load_timeout).await, || {
            driver.clone().quit()
        })
        .await?;

        Ok(Droid {
            driver,
            main_window,
            page_load_timeout,
        })
    }

    async fn load_sections(&self, tab: WindowHandle, url: &str) -> Result<PageSections, ExtractError> {
        self.driver.switch_to_window(tab).await?;
        bounded(url, self.page_load_timeout, self.driver.goto(url)).await?;
        let page_source = self.driver.source().await?;
        parse_page_sections(&page_source)
    }
}

/// The two window operations needed to hand a tab back.
#[async_trait]
trait TabSession: Sync {
    type Handle: Clone + Send + Sync;
    type Error: Debug + Send;

    async fn focus(&self, handle: Self::Handle) -> Result<(), Self::Error>;
    async fn close_focused(&self) -> Result<(), Self::Error>;
}

#[async_trait]
impl TabSession for WebDriver {
    type Handle = WindowHandle;
    type Error = WebDriverError;

    async fn focus(&self, handle: WindowHandle) -> Result<(), WebDriverError> {
        self.switch_to_window(handle).await
    }

    async fn close_focused(&self) -> Result<(), WebDriverError> {
        self.close_window().await
    }
}

/// Closes `tab` whatever state the load left it in and focuses `main` again.
/// Failures are logged, never returned, so the extraction result survives.
async fn release_tab<S: TabSession>(session: &S, tab: S::Handle, main: S::Handle, url: &str) {
    match session.focus(tab).await {
        Ok(_) => {
            if let Err(e) = session.close_focused().await {
                log::error!("Failed to close tab for {}: {:?}", url, e);
            }
        }
        Err(e) => log::error!("Failed to focus tab for {}: {:?}", url, e),
    }

    if let Err(e) = session.focus(main).await {
        log::error!("Failed to return to main window after {}: {:?}", url, e);
    }
}

/// Shuts the session down when setup after connecting fails.
async fn quit_on_error<T, E, Q, QE>(result: Result<T, E>, quit: impl FnOnce() -> Q) -> Result<T, E>
where
    Q: Future<Output = Result<(), QE>>,
    QE: Debug,
{
    if result.is_err() {
        if let Err(e) = quit().await {
            log::error!("Failed to quit browser session: {:?}", e);
        }
    }
    result
}

async fn prepare_session(
    driver: &WebDriver,
    page_load_timeout: Duration,
) -> Result<WindowHandle, WebDriverError> {
    driver.set_page_load_timeout(page_load_timeout).await?;
    driver.window().await
}

/// Runs a navigation step, turning both the browser's own page load timeout
/// and an elapsed `limit` into `ExtractError::Timeout`.
async fn bounded<F, T>(url: &str, limit: Duration, step: F) -> Result<T, ExtractError>
where
    F: Future<Output = Result<T, WebDriverError>>,
{
    match tokio::time::timeout(limit, step).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(WebDriverError::Timeout(..))) | Err(_) => Err(ExtractError::Timeout(url.to_string())),
        Ok(Err(e)) => Err(ExtractError::WebDriver(e)),
    }
}

#[async_trait]
impl PageExtractor for Droid {
    async fn extract(&mut self, url: &str) -> Result<PageSections, ExtractError> {
        validate_url(url)?;

        let tab = self.driver.new_tab().await?;
        let result = self.load_sections(tab.clone(), url).await;
        release_tab(&self.driver, tab, self.main_window.clone(), url).await;

        result
    }

    async fn close(self) -> Result<(), ExtractError> {
        log::info!("Closing browser session");
        self.driver.quit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Mutex,
        },
        time::Duration,
    };

    use async_trait::async_trait;
    use thirtyfour::error::WebDriverError;

    use crate::services::page_extractor::ExtractError;

    use super::{bounded, quit_on_error, release_tab, TabSession};

    /// Records window calls; focusing `broken` fails.
    struct RecordingSession {
        calls: Mutex<Vec<String>>,
        broken: Option<&'static str>,
    }

    impl RecordingSession {
        fn new(broken: Option<&'static str>) -> Self {
            RecordingSession {
                calls: Mutex::new(vec![]),
                broken,
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TabSession for RecordingSession {
        type Handle = &'static str;
        type Error = String;

        async fn focus(&self, handle: &'static str) -> Result<(), String> {
            self.calls.lock().unwrap().push(format!("focus {}", handle));
            match self.broken == Some(handle) {
                true => Err(format!("no such window {}", handle)),
                false => Ok(()),
            }
        }

        async fn close_focused(&self) -> Result<(), String> {
            self.calls.lock().unwrap().push("close".to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn release_tab_closes_tab_then_returns_to_main() {
        let session = RecordingSession::new(None);

        release_tab(&session, "tab", "main", "https://a.example").await;

        assert_eq!(session.calls(), vec!["focus tab", "close", "focus main"]);
    }

    #[tokio::test]
    async fn release_tab_returns_to_main_when_tab_is_unreachable() {
        let session = RecordingSession::new(Some("tab"));

        release_tab(&session, "tab", "main", "https://a.example").await;

        assert_eq!(session.calls(), vec!["focus tab", "focus main"]);
    }

    #[tokio::test]
    async fn release_tab_tolerates_lost_main_window() {
        let session = RecordingSession::new(Some("main"));

        release_tab(&session, "tab", "main", "https://a.example").await;

        assert_eq!(session.calls(), vec!["focus tab", "close", "focus main"]);
    }

    #[tokio::test]
    async fn quit_on_error_quits_failed_setup() {
        let quits = AtomicUsize::new(0);
        let counter = &quits;
        let quit = move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<(), String>(())
        };

        let result = quit_on_error(Err::<(), _>("no window".to_string()), quit).await;

        assert_eq!(result, Err("no window".to_string()));
        assert_eq!(quits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn quit_on_error_keeps_healthy_session() {
        let quits = AtomicUsize::new(0);
        let counter = &quits;
        let quit = move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<(), String>(())
        };

        let result = quit_on_error(Ok::<_, String>("main"), quit).await;

        assert_eq!(result, Ok("main"));
        assert_eq!(quits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn bounded_passes_value_through() {
        let result = bounded("https://a.example", Duration::from_secs(1), async {
            Ok::<_, WebDriverError>(7)
        })
        .await;

        assert!(matches!(result, Ok(7)));
    }

    #[tokio::test]
    async fn bounded_stalled_load_is_timeout() {
        let stalled = std::future::pending::<Result<(), WebDriverError>>();

        let result = bounded("https://slow.example", Duration::from_millis(20), stalled).await;

        match result {
            Err(ExtractError::Timeout(url)) => assert_eq!(url, "https://slow.example"),
            other => panic!("expected timeout, got {:?}", other),
        }
    }
}
