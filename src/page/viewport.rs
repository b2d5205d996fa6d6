use serde::{Deserialize, Serialize};

/// A named viewport used to drive responsive capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// The default sweep: mobile, tablet, desktop
    pub fn defaults() -> Vec<Viewport> {
        vec![
            Viewport::new("mobile", 375, 667),
            Viewport::new("tablet", 768, 1024),
            Viewport::new("desktop", 1920, 1080),
        ]
    }
}
