use std::path::PathBuf;
use std::time::Duration;

/// Desktop user agent applied to every page for cross-run screenshot consistency
pub const DESKTOP_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default page viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1920;

/// Default page viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 1080;

/// Options for launching the shared browser process
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Run the browser in headless mode
    pub headless: bool,

    /// Enable the Chrome sandbox. Disabled by default so the browser can run
    /// inside containers without extra privileges.
    pub sandbox: bool,

    /// Initial browser window width in pixels
    pub window_width: u32,

    /// Initial browser window height in pixels
    pub window_height: u32,

    /// Path to the Chrome/Chromium binary (autodetected when `None`)
    pub chrome_path: Option<PathBuf>,

    /// How long the browser may sit idle before the engine shuts it down
    pub idle_timeout: Duration,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            sandbox: false,
            window_width: DEFAULT_VIEWPORT_WIDTH,
            window_height: DEFAULT_VIEWPORT_HEIGHT,
            chrome_path: None,
            // Keep the browser alive between probe calls (engine default is 30s)
            idle_timeout: Duration::from_secs(60 * 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_builder() {
        let config = SessionConfig::new().headless(false).window_size(800, 600);

        assert!(!config.headless);
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
    }

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();

        assert!(config.headless);
        assert!(!config.sandbox);
        assert_eq!(config.window_width, DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(config.window_height, DEFAULT_VIEWPORT_HEIGHT);
        assert!(config.chrome_path.is_none());
    }

    #[test]
    fn test_chrome_path_builder() {
        let config = SessionConfig::new().chrome_path("/usr/bin/chromium");
        assert_eq!(config.chrome_path, Some(PathBuf::from("/usr/bin/chromium")));
    }
}
