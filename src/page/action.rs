use serde::{Deserialize, Serialize};

/// One step in a scripted user flow.
///
/// Actions form a closed set; each variant carries exactly the fields it
/// needs, so a malformed record fails deserialization instead of being
/// silently skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Click the element matching `selector`, then optionally pause
    Click {
        selector: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay_ms: Option<u64>,
    },

    /// Type `text` into the element matching `selector`, then optionally pause
    Type {
        selector: String,
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        delay_ms: Option<u64>,
    },

    /// Block until an element matching `selector` appears
    WaitFor { selector: String },

    /// Pause for a fixed duration
    Sleep { delay_ms: u64 },

    /// Capture the current page state and append it to the flow's results
    Screenshot,
}

impl Action {
    /// Whether this action contributes a screenshot to the flow result
    pub fn captures(&self) -> bool {
        matches!(self, Action::Screenshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_action_deserialize() {
        let json = serde_json::json!({
            "type": "click",
            "selector": "#add-to-cart",
            "delay_ms": 250
        });

        let action: Action = serde_json::from_value(json).unwrap();
        assert_eq!(
            action,
            Action::Click {
                selector: "#add-to-cart".to_string(),
                delay_ms: Some(250),
            }
        );
    }

    #[test]
    fn test_type_action_without_delay() {
        let json = serde_json::json!({
            "type": "type",
            "selector": "input[name='email']",
            "text": "user@example.com"
        });

        let action: Action = serde_json::from_value(json).unwrap();
        assert_eq!(
            action,
            Action::Type {
                selector: "input[name='email']".to_string(),
                text: "user@example.com".to_string(),
                delay_ms: None,
            }
        );
    }

    #[test]
    fn test_wait_variants() {
        let wait_for: Action = serde_json::from_value(serde_json::json!({
            "type": "wait_for",
            "selector": ".cart-badge"
        }))
        .unwrap();
        assert_eq!(
            wait_for,
            Action::WaitFor {
                selector: ".cart-badge".to_string()
            }
        );

        let sleep: Action =
            serde_json::from_value(serde_json::json!({ "type": "sleep", "delay_ms": 500 })).unwrap();
        assert_eq!(sleep, Action::Sleep { delay_ms: 500 });
    }

    #[test]
    fn test_screenshot_action() {
        let action: Action = serde_json::from_value(serde_json::json!({ "type": "screenshot" })).unwrap();
        assert_eq!(action, Action::Screenshot);
        assert!(action.captures());
        assert!(!Action::Sleep { delay_ms: 1 }.captures());
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        // A click with no selector must not be silently skipped
        let result: Result<Action, _> = serde_json::from_value(serde_json::json!({ "type": "click" }));
        assert!(result.is_err());

        let result: Result<Action, _> = serde_json::from_value(serde_json::json!({ "type": "hover" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_action_sequence_order_preserved() {
        let json = serde_json::json!([
            { "type": "type", "selector": "#search", "text": "shoes" },
            { "type": "click", "selector": "#go" },
            { "type": "wait_for", "selector": ".results" },
            { "type": "screenshot" }
        ]);

        let actions: Vec<Action> = serde_json::from_value(json).unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions.iter().filter(|a| a.captures()).count(), 1);
        assert_eq!(actions[3], Action::Screenshot);
    }
}
