//! # site-probe
//!
//! A Rust library for probing web storefronts via Chrome DevTools Protocol (CDP):
//! screenshots, data extraction, scripted user flows, responsive capture, and
//! structural accessibility checks.
//!
//! ## Features
//!
//! - **Shared Browser Session**: One lazily-launched browser process per
//!   process, managed through an explicit registry
//! - **Per-Call Pages**: Every operation runs on its own page, closed on both
//!   success and error paths
//! - **Page Operations**: Screenshot (viewport, full-page, element), text
//!   extraction with per-key failure recovery, scripted click/type/wait flows
//! - **Responsive Capture**: One navigation captured across a viewport sweep
//! - **Accessibility Check**: Structural heuristics for missing alt text,
//!   unlabelled buttons/inputs, and landmark presence
//!
//! ## Usage
//!
//! ### Probing a site
//!
//! ```rust,no_run
//! use site_probe::{CaptureOptions, ProbeConfig, SiteProbe};
//!
//! # fn main() -> site_probe::Result<()> {
//! let probe = SiteProbe::new(ProbeConfig::new("http://localhost:3000")?);
//!
//! // Full-page screenshot of the landing page
//! let png = probe.navigate_and_capture("/", &CaptureOptions::new().full_page(true))?;
//! std::fs::write("home.png", png).unwrap();
//!
//! // Structural accessibility findings
//! let report = probe.validate_accessibility("/")?;
//! println!("images without alt: {}", report.images_without_alt);
//!
//! probe.cleanup();
//! # Ok(())
//! # }
//! ```
//!
//! ### Scripted user flows
//!
//! ```rust,no_run
//! use site_probe::{Action, ProbeConfig, SiteProbe};
//!
//! # fn main() -> site_probe::Result<()> {
//! let probe = SiteProbe::new(ProbeConfig::new("http://localhost:3000")?);
//!
//! let shots = probe.perform_user_flow("/products/1", &[
//!     Action::Click { selector: "#add-to-cart".into(), delay_ms: Some(250) },
//!     Action::WaitFor { selector: ".cart-badge".into() },
//!     Action::Screenshot,
//! ])?;
//! assert_eq!(shots.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`browser`]: Shared browser session, launch configuration, viewport emulation
//! - [`page`]: Per-call page operations and their data types
//! - [`probe`]: Task-level facade combining session and page operations
//! - [`error`]: Error types and result alias

pub mod browser;
pub mod error;
pub mod page;
pub mod probe;

pub use browser::{BrowserSession, SessionConfig, SessionRegistry};
pub use error::{ProbeError, Result};
pub use page::{
    AccessibilityReport, Action, CaptureOptions, Extraction, ExtractionMap, ExtractionMiss,
    PageActions, Viewport,
};
pub use probe::{ProbeConfig, SiteProbe};
