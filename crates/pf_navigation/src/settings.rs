#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum UnknownViewPolicy {
    /// Report `Error::UnknownView`
    Reject,
    /// Log and leave the navigation untouched
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ReentrancyPolicy {
    /// Nested activations from an animation fail with `Error::ReentrantActivation`
    Reject,
    /// Nested activations are queued and run once the current one completes
    Defer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BindingPolicy {
    /// Every view needs at least one indicator
    Strict,
    /// Views without an indicator are allowed
    Tolerant,
}

/// How the host lays out the views
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Layout {
    /// One view visible at a time
    Paged,
    /// All views stacked in one scrolling document
    Continuous,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    pub unknown_view: UnknownViewPolicy,
    pub reentrancy: ReentrancyPolicy,
    pub bindings: BindingPolicy,
    pub wrap: bool,
    pub layout: Layout,
}

impl ControllerSettings {
    pub fn new() -> Self {
        Self {
            unknown_view: UnknownViewPolicy::Reject,
            reentrancy: ReentrancyPolicy::Reject,
            bindings: BindingPolicy::Strict,
            wrap: true,
            layout: Layout::Paged,
        }
    }

    /// Settings matching a page that silently ignores bad targets
    pub fn lenient() -> Self {
        Self {
            unknown_view: UnknownViewPolicy::Ignore,
            bindings: BindingPolicy::Tolerant,
            ..Self::new()
        }
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings: ControllerSettings =
            serde_json::from_str(r#"{ "reentrancy": "Defer" }"#).unwrap();

        assert_eq!(settings.reentrancy, ReentrancyPolicy::Defer);
        assert_eq!(settings.unknown_view, UnknownViewPolicy::Reject);
        assert!(settings.wrap);
    }
}
