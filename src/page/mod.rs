//! Per-call page operations: navigation, capture, extraction, scripted flows,
//! viewport sweeps, and accessibility checks.
//!
//! Every operation opens its own page, navigates, acts, and closes the page on
//! both success and error paths. Pages are never reused across calls.

pub mod a11y;
pub mod action;
pub mod extract;
pub mod viewport;

pub use a11y::AccessibilityReport;
pub use action::Action;
pub use extract::{Extraction, ExtractionMap, ExtractionMiss};
pub use viewport::Viewport;

use crate::browser::config::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::browser::{BrowserSession, emulation};
use crate::error::{ProbeError, Result};
use a11y::ACCESSIBILITY_CHECK_JS;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Element, Tab};
use indexmap::IndexMap;
use serde::Deserialize;
use std::ops::Deref;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default bound for navigation and selector waits
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pause after a viewport change so layout can settle before capture
const LAYOUT_SETTLE: Duration = Duration::from_millis(500);

/// Options for a single screenshot capture
#[derive(Debug, Clone, Default)]
pub struct CaptureOptions {
    /// Capture only the region of the first element matching this selector.
    /// Falls back to a page-level capture when nothing matches.
    pub selector: Option<String>,

    /// Capture the full scrollable page instead of the viewport
    pub full_page: bool,

    /// Wait for this selector to appear before capturing; a timeout here is an
    /// error, unlike `selector`
    pub wait_for: Option<String>,
}

impl CaptureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn full_page(mut self, full_page: bool) -> Self {
        self.full_page = full_page;
        self
    }

    pub fn wait_for(mut self, selector: impl Into<String>) -> Self {
        self.wait_for = Some(selector.into());
        self
    }
}

/// Closes the page when dropped, so every exit path releases it exactly once
struct PageGuard {
    tab: Arc<Tab>,
}

impl PageGuard {
    fn new(tab: Arc<Tab>) -> Self {
        Self { tab }
    }
}

impl Deref for PageGuard {
    type Target = Tab;

    fn deref(&self) -> &Tab {
        &self.tab
    }
}

impl Drop for PageGuard {
    fn drop(&mut self) {
        if let Err(e) = self.tab.close(true) {
            log::debug!("Failed to close page: {}", e);
        }
    }
}

/// Page-level automation over a shared [`BrowserSession`]
pub struct PageActions<'s> {
    session: &'s BrowserSession,
    timeout: Duration,
}

impl<'s> PageActions<'s> {
    pub fn new(session: &'s BrowserSession) -> Self {
        Self {
            session,
            timeout: DEFAULT_WAIT_TIMEOUT,
        }
    }

    /// Bound navigation and selector waits by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Open a fresh page and navigate it to `url`, waiting for the load to
    /// settle. The returned guard closes the page when dropped.
    fn open(&self, url: &str) -> Result<PageGuard> {
        let tab = self.session.new_page()?;
        tab.set_default_timeout(self.timeout);

        let page = PageGuard::new(tab);

        page.navigate_to(url)
            .map_err(|e| ProbeError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;
        page.wait_until_navigated()
            .map_err(|e| ProbeError::NavigationFailed(format!("Navigation to {} did not settle: {}", url, e)))?;

        Ok(page)
    }

    /// Capture a screenshot of `url`.
    ///
    /// With a `selector`, waits for it and captures just that element; when it
    /// never appears the capture degrades to the page-level shot rather than
    /// failing. With `full_page`, captures the full scrollable page.
    pub fn screenshot(&self, url: &str, options: &CaptureOptions) -> Result<Vec<u8>> {
        let page = self.open(url)?;

        if let Some(wait_for) = &options.wait_for {
            page.wait_for_element_with_custom_timeout(wait_for, self.timeout)
                .map_err(|e| ProbeError::ElementNotFound(format!("'{}' did not appear: {}", wait_for, e)))?;
        }

        if let Some(selector) = &options.selector {
            match page.wait_for_element_with_custom_timeout(selector, self.timeout) {
                Ok(element) => {
                    return element
                        .capture_screenshot(Page::CaptureScreenshotFormatOption::Png)
                        .map_err(|e| {
                            ProbeError::CaptureFailed(format!("Failed to capture '{}': {}", selector, e))
                        });
                }
                Err(e) => {
                    log::warn!("Selector '{}' did not appear, capturing page instead: {}", selector, e);
                }
            }
        }

        if options.full_page {
            self.capture_full_page(&page)
        } else {
            capture_viewport(&page)
        }
    }

    /// Resolve each extractor key independently and read the element's trimmed
    /// text. Per-key failures are recovered: logged, recorded as an empty
    /// string, and reported through the result's miss channel. The result key
    /// set always equals the input key set.
    pub fn extract_data(&self, url: &str, extractors: &ExtractionMap) -> Result<Extraction> {
        let page = self.open(url)?;
        let mut extraction = Extraction::with_capacity(extractors.len());

        for (key, selector) in extractors {
            match read_text(&page, selector) {
                Ok(text) => extraction.record(key, text),
                Err(e) => {
                    log::warn!("Extraction for key '{}' ({}) failed: {}", key, selector, e);
                    extraction.record_miss(key, e.to_string());
                }
            }
        }

        Ok(extraction)
    }

    /// Execute `actions` strictly in order on one page and return the
    /// screenshots captured along the way, one per [`Action::Screenshot`]
    pub fn perform_actions(&self, url: &str, actions: &[Action]) -> Result<Vec<Vec<u8>>> {
        let page = self.open(url)?;
        let mut screenshots = Vec::new();

        for action in actions {
            match action {
                Action::Click { selector, delay_ms } => {
                    find_element(&page, selector)?
                        .click()
                        .map_err(|e| ProbeError::PageOperationFailed(format!("Click on '{}' failed: {}", selector, e)))?;
                    pause(*delay_ms);
                }
                Action::Type {
                    selector,
                    text,
                    delay_ms,
                } => {
                    find_element(&page, selector)?
                        .type_into(text)
                        .map_err(|e| ProbeError::PageOperationFailed(format!("Typing into '{}' failed: {}", selector, e)))?;
                    pause(*delay_ms);
                }
                Action::WaitFor { selector } => {
                    page.wait_for_element_with_custom_timeout(selector, self.timeout)
                        .map_err(|e| ProbeError::ElementNotFound(format!("'{}' did not appear: {}", selector, e)))?;
                }
                Action::Sleep { delay_ms } => pause(Some(*delay_ms)),
                Action::Screenshot => screenshots.push(capture_viewport(&page)?),
            }
        }

        Ok(screenshots)
    }

    /// Navigate once, then capture the page at each viewport in order, keyed
    /// by viewport name. One page is reused across the whole sweep.
    pub fn capture_viewports(&self, url: &str, viewports: &[Viewport]) -> Result<IndexMap<String, Vec<u8>>> {
        let page = self.open(url)?;
        let mut screenshots = IndexMap::with_capacity(viewports.len());

        for viewport in viewports {
            emulation::set_viewport(&page, viewport.width, viewport.height)?;
            thread::sleep(LAYOUT_SETTLE);
            screenshots.insert(viewport.name.clone(), capture_viewport(&page)?);
        }

        Ok(screenshots)
    }

    /// Run the structural accessibility check against `url`
    pub fn audit_accessibility(&self, url: &str) -> Result<AccessibilityReport> {
        let page = self.open(url)?;
        let json = evaluate_to_json_string(&page, ACCESSIBILITY_CHECK_JS)?;

        serde_json::from_str(&json)
            .map_err(|e| ProbeError::EvaluationFailed(format!("Failed to parse accessibility report: {}", e)))
    }

    /// Resize the page to the full content size, capture, then restore the
    /// default viewport
    fn capture_full_page(&self, page: &Tab) -> Result<Vec<u8>> {
        let json = evaluate_to_json_string(page, CONTENT_SIZE_JS)?;
        let size: ContentSize = serde_json::from_str(&json)
            .map_err(|e| ProbeError::EvaluationFailed(format!("Failed to parse content size: {}", e)))?;

        emulation::set_viewport(page, size.width(), size.height())?;
        thread::sleep(Duration::from_millis(100));

        let screenshot = capture_viewport(page);
        emulation::set_viewport(page, DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)?;

        screenshot
    }
}

/// In-page script measuring the scrollable content size as a JSON string
const CONTENT_SIZE_JS: &str = r#"
JSON.stringify({
    width: Math.max(document.documentElement.scrollWidth, document.body ? document.body.scrollWidth : 0),
    height: Math.max(document.documentElement.scrollHeight, document.body ? document.body.scrollHeight : 0),
})
"#;

#[derive(Debug, Deserialize)]
struct ContentSize {
    width: f64,
    height: f64,
}

impl ContentSize {
    fn width(&self) -> u32 {
        self.width.max(1.0).ceil() as u32
    }

    fn height(&self) -> u32 {
        self.height.max(1.0).ceil() as u32
    }
}

fn pause(delay_ms: Option<u64>) {
    if let Some(ms) = delay_ms {
        thread::sleep(Duration::from_millis(ms));
    }
}

fn find_element<'a>(page: &'a Tab, selector: &str) -> Result<Element<'a>> {
    page.find_element(selector)
        .map_err(|e| ProbeError::ElementNotFound(format!("Element '{}' not found: {}", selector, e)))
}

/// Capture the current viewport as PNG
fn capture_viewport(page: &Tab) -> Result<Vec<u8>> {
    page.capture_screenshot(Page::CaptureScreenshotFormatOption::Png, None, None, true)
        .map_err(|e| ProbeError::CaptureFailed(e.to_string()))
}

/// Read an element's trimmed text content
fn read_text(page: &Tab, selector: &str) -> Result<String> {
    let element = find_element(page, selector)?;

    let result = element
        .call_js_fn("function() { return (this.textContent || '').trim(); }", vec![], false)
        .map_err(|e| ProbeError::EvaluationFailed(format!("Failed to read text of '{}': {}", selector, e)))?;

    Ok(result
        .value
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default())
}

/// Evaluate a script that returns a JSON string and hand the string back
fn evaluate_to_json_string(page: &Tab, script: &str) -> Result<String> {
    let result = page
        .evaluate(script, false)
        .map_err(|e| ProbeError::EvaluationFailed(format!("Script execution failed: {}", e)))?;

    let value = result
        .value
        .ok_or_else(|| ProbeError::EvaluationFailed("Script returned no value".to_string()))?;

    serde_json::from_value(value)
        .map_err(|e| ProbeError::EvaluationFailed(format!("Script did not return a string: {}", e)))
}
