//! Task-level automation facade composing the shared browser session with
//! per-call page operations.

pub mod config;

pub use config::ProbeConfig;

use crate::browser::{BrowserSession, SessionRegistry};
use crate::error::Result;
use crate::page::{
    AccessibilityReport, Action, CaptureOptions, Extraction, ExtractionMap, PageActions, Viewport,
};
use indexmap::IndexMap;
use std::sync::Arc;

/// Task-shaped automation operations against one site.
///
/// The probe borrows the process-wide browser session from the
/// [`SessionRegistry`]; each operation opens its own page and closes it on
/// completion. Call [`cleanup`](Self::cleanup) when done to shut the shared
/// browser down.
pub struct SiteProbe {
    config: ProbeConfig,
    session: Arc<BrowserSession>,
}

impl SiteProbe {
    /// Create a probe over the process-wide shared session
    pub fn new(config: ProbeConfig) -> Self {
        let session = SessionRegistry::global().obtain(&config.session_config());
        Self { config, session }
    }

    /// Create a probe configured from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ProbeConfig::from_env()?))
    }

    /// Create a probe over an explicit session instead of the registry's
    pub fn with_session(config: ProbeConfig, session: Arc<BrowserSession>) -> Self {
        Self { config, session }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    fn actions(&self) -> PageActions<'_> {
        PageActions::new(&self.session).with_timeout(self.config.nav_timeout)
    }

    /// Navigate to `path` and capture a screenshot.
    ///
    /// When `options.wait_for` is set, the wait and the capture happen on the
    /// same page over a single navigation.
    pub fn navigate_and_capture(&self, path: &str, options: &CaptureOptions) -> Result<Vec<u8>> {
        let url = self.config.join_url(path);
        self.actions().screenshot(&url, options)
    }

    /// Extract text for each key/selector pair on `path`
    pub fn extract_page_data(&self, path: &str, selectors: &ExtractionMap) -> Result<Extraction> {
        let url = self.config.join_url(path);
        self.actions().extract_data(&url, selectors)
    }

    /// Run a scripted user flow on `path`, returning the screenshots captured
    /// by its `Screenshot` actions in order
    pub fn perform_user_flow(&self, path: &str, actions: &[Action]) -> Result<Vec<Vec<u8>>> {
        let url = self.config.join_url(path);
        self.actions().perform_actions(&url, actions)
    }

    /// Capture `path` at each of the default viewports (mobile, tablet,
    /// desktop), keyed by viewport name
    pub fn test_responsiveness(&self, path: &str) -> Result<IndexMap<String, Vec<u8>>> {
        self.test_responsiveness_with(path, &Viewport::defaults())
    }

    /// Capture `path` at each given viewport, in order, on one page
    pub fn test_responsiveness_with(
        &self,
        path: &str,
        viewports: &[Viewport],
    ) -> Result<IndexMap<String, Vec<u8>>> {
        let url = self.config.join_url(path);
        self.actions().capture_viewports(&url, viewports)
    }

    /// Run the structural accessibility check on `path`
    pub fn validate_accessibility(&self, path: &str) -> Result<AccessibilityReport> {
        let url = self.config.join_url(path);
        self.actions().audit_accessibility(&url)
    }

    /// Release the process-wide shared session
    pub fn cleanup(&self) {
        SessionRegistry::global().release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::SessionConfig;

    #[test]
    fn test_probe_construction_does_not_launch() {
        let session = Arc::new(BrowserSession::new(SessionConfig::default()));
        let probe = SiteProbe::with_session(ProbeConfig::default(), Arc::clone(&session));

        assert!(!session.is_active());
        assert_eq!(probe.config().base_url, "http://localhost:3000");
    }

    #[test]
    fn test_registry_backed_probes_share_a_session() {
        let first = SiteProbe::new(ProbeConfig::default());
        let second = SiteProbe::new(ProbeConfig::default());

        assert!(Arc::ptr_eq(&first.session, &second.session));
        first.cleanup();
    }
}
