use serde::{Deserialize, Serialize};

/// Structural accessibility findings for one page.
///
/// This is a heuristic over the DOM, not a full audit: it counts elements that
/// are missing the most basic labelling and checks for the two landmarks
/// screen readers rely on first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityReport {
    /// `<img>` elements without an `alt` attribute
    pub images_without_alt: usize,

    /// `<button>` elements with neither text content nor an `aria-label`
    pub buttons_without_label: usize,

    /// Non-hidden `<input>` elements with neither an associated `<label for>`
    /// nor an `aria-label`
    pub inputs_without_label: usize,

    /// Whether the page has an `<h1>`
    pub has_h1: bool,

    /// Whether the page has a `<main>` landmark
    pub has_main_landmark: bool,
}

impl AccessibilityReport {
    /// Whether no finding was raised
    pub fn is_clean(&self) -> bool {
        self.images_without_alt == 0
            && self.buttons_without_label == 0
            && self.inputs_without_label == 0
            && self.has_h1
            && self.has_main_landmark
    }
}

/// In-page script producing the report as a JSON string
pub(crate) const ACCESSIBILITY_CHECK_JS: &str = r#"
(() => {
    const images = Array.from(document.querySelectorAll('img'));
    const imagesWithoutAlt = images.filter(img => !img.getAttribute('alt')).length;

    const buttons = Array.from(document.querySelectorAll('button'));
    const buttonsWithoutLabel = buttons.filter(btn =>
        !(btn.textContent || '').trim() && !btn.getAttribute('aria-label')
    ).length;

    const inputs = Array.from(document.querySelectorAll('input:not([type="hidden"])'));
    const inputsWithoutLabel = inputs.filter(input => {
        const hasLabel = !!(input.id && document.querySelector('label[for="' + input.id + '"]'));
        return !hasLabel && !input.getAttribute('aria-label');
    }).length;

    return JSON.stringify({
        imagesWithoutAlt,
        buttonsWithoutLabel,
        inputsWithoutLabel,
        hasH1: !!document.querySelector('h1'),
        hasMainLandmark: !!document.querySelector('main'),
    });
})()
"#;
