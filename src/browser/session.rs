use crate::browser::config::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DESKTOP_USER_AGENT, SessionConfig,
};
use crate::browser::emulation;
use crate::error::{ProbeError, Result};
use headless_chrome::{Browser, Tab};
use std::ffi::OsStr;
use std::sync::{Arc, Mutex};

/// Browser session that owns a single lazily-launched Chrome/Chromium instance.
///
/// The browser process is shared by every page the session hands out; it is
/// launched on the first [`acquire`](Self::acquire) and lives until
/// [`release`](Self::release) or drop. Re-acquiring after release relaunches.
pub struct BrowserSession {
    config: SessionConfig,
    browser: Mutex<Option<Arc<Browser>>>,
}

impl BrowserSession {
    /// Create a session without launching the browser
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            browser: Mutex::new(None),
        }
    }

    /// Get the shared browser handle, launching the process on first call.
    /// Launch failure propagates; there is no retry.
    pub fn acquire(&self) -> Result<Arc<Browser>> {
        let mut guard = self
            .browser
            .lock()
            .map_err(|e| ProbeError::PageOperationFailed(format!("Session lock poisoned: {}", e)))?;

        if let Some(browser) = guard.as_ref() {
            return Ok(Arc::clone(browser));
        }

        log::debug!("Launching browser (headless: {})", self.config.headless);

        let mut launch_opts = headless_chrome::LaunchOptions::default();
        launch_opts.headless = self.config.headless;
        launch_opts.sandbox = self.config.sandbox;
        launch_opts.window_size = Some((self.config.window_width, self.config.window_height));
        launch_opts.idle_browser_timeout = self.config.idle_timeout;

        // Flags for stable capture inside containers
        launch_opts.args.push(OsStr::new("--disable-dev-shm-usage"));
        launch_opts.args.push(OsStr::new("--disable-accelerated-2d-canvas"));
        launch_opts.args.push(OsStr::new("--disable-gpu"));
        launch_opts.args.push(OsStr::new("--no-first-run"));
        launch_opts.args.push(OsStr::new("--no-zygote"));

        if let Some(path) = &self.config.chrome_path {
            launch_opts.path = Some(path.clone());
        }

        let browser = Browser::new(launch_opts).map_err(|e| ProbeError::LaunchFailed(e.to_string()))?;
        let browser = Arc::new(browser);
        *guard = Some(Arc::clone(&browser));

        Ok(browser)
    }

    /// Open a fresh page pre-set to the default viewport and a fixed desktop
    /// user agent, so screenshots are comparable across runs
    pub fn new_page(&self) -> Result<Arc<Tab>> {
        let browser = self.acquire()?;

        let tab = browser
            .new_tab()
            .map_err(|e| ProbeError::PageOperationFailed(format!("Failed to open page: {}", e)))?;

        tab.set_user_agent(DESKTOP_USER_AGENT, None, None)
            .map_err(|e| ProbeError::PageOperationFailed(format!("Failed to set user agent: {}", e)))?;

        emulation::set_viewport(&tab, DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)?;

        Ok(tab)
    }

    /// Whether the browser process is currently running
    pub fn is_active(&self) -> bool {
        self.browser
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Close the browser handle if present; no-op when already released.
    /// Pages handed out earlier keep the process alive until they are dropped.
    pub fn release(&self) {
        if let Ok(mut guard) = self.browser.lock() {
            if guard.take().is_some() {
                log::debug!("Released browser handle");
            }
        }
    }

    /// Launch configuration this session was created with
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.release();
    }
}

/// Process-wide owner of the shared [`BrowserSession`].
///
/// At most one session is active per process. The first
/// [`obtain`](Self::obtain) decides the configuration; later calls return the
/// same instance until [`release`](Self::release), after which a new session
/// may be created.
pub struct SessionRegistry {
    slot: Mutex<Option<Arc<BrowserSession>>>,
}

static GLOBAL_REGISTRY: SessionRegistry = SessionRegistry {
    slot: Mutex::new(None),
};

impl SessionRegistry {
    /// The process-wide registry
    pub fn global() -> &'static SessionRegistry {
        &GLOBAL_REGISTRY
    }

    /// Get the shared session, creating it with `config` on first use
    pub fn obtain(&self, config: &SessionConfig) -> Arc<BrowserSession> {
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(session) = slot.as_ref() {
            return Arc::clone(session);
        }

        let session = Arc::new(BrowserSession::new(config.clone()));
        *slot = Some(Arc::clone(&session));
        session
    }

    /// Release the shared session and clear the slot; idempotent
    pub fn release(&self) {
        let taken = self.slot.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(session) = taken {
            session.release();
        }
    }
}
