//! Viewport emulation via the `Emulation.setDeviceMetricsOverride` CDP method.

use crate::error::{ProbeError, Result};
use headless_chrome::Tab;
use headless_chrome::protocol::cdp::types::Method;
use serde::Serialize;

/// Parameters for `Emulation.setDeviceMetricsOverride`. Only the required CDP
/// fields are sent; omitted optional fields keep their browser defaults.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDeviceMetrics {
    pub width: u32,
    pub height: u32,
    pub device_scale_factor: f64,
    pub mobile: bool,
}

impl Method for SetDeviceMetrics {
    const NAME: &'static str = "Emulation.setDeviceMetricsOverride";
    type ReturnObject = serde_json::Value;
}

/// Resize the page viewport without touching the browser window
pub fn set_viewport(tab: &Tab, width: u32, height: u32) -> Result<()> {
    tab.call_method(SetDeviceMetrics {
        width,
        height,
        device_scale_factor: 1.0,
        mobile: false,
    })
    .map_err(|e| {
        ProbeError::PageOperationFailed(format!("Failed to set viewport to {}x{}: {}", width, height, e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_name() {
        assert_eq!(SetDeviceMetrics::NAME, "Emulation.setDeviceMetricsOverride");
    }

    #[test]
    fn test_params_serialize_camel_case() {
        let params = SetDeviceMetrics {
            width: 375,
            height: 667,
            device_scale_factor: 1.0,
            mobile: false,
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["width"], 375);
        assert_eq!(json["height"], 667);
        assert_eq!(json["deviceScaleFactor"], 1.0);
        assert_eq!(json["mobile"], false);
    }
}
