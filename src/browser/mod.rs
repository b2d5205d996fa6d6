//! Browser session management and launch configuration

pub mod config;
pub mod emulation;
pub mod session;

pub use config::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DESKTOP_USER_AGENT, SessionConfig};
pub use session::{BrowserSession, SessionRegistry};
